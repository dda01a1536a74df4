//! XML and HTML wiring. Both run the hypertext-family lexer; HTML adds the
//! embedded-script style block on top of the markup base.

use crate::language::LanguageId;
use crate::registry::ColorRegistry;

use super::folding::{self, FoldProfile};
use super::style_ids::hypertext as h;
use super::StyleSink;

pub(super) const XML_STYLES: &[(u32, &str)] = &[
    (h::DEFAULT, "Default"),
    (h::TAG, "Tag"),
    (h::TAG_UNKNOWN, "TagUnknown"),
    (h::ATTRIBUTE, "Attribute"),
    (h::ATTRIBUTE_UNKNOWN, "AttributeUnknown"),
    (h::NUMBER, "Number"),
    (h::DOUBLE_STRING, "DoubleString"),
    (h::SINGLE_STRING, "SingleString"),
    (h::OTHER, "Other"),
    (h::COMMENT, "Comment"),
    (h::ENTITY, "Entity"),
    (h::TAG_END, "TagEnd"),
    (h::XML_START, "XmlStart"),
    (h::XML_END, "XmlEnd"),
    (h::CDATA, "CData"),
    (h::QUESTION, "Question"),
    (h::VALUE, "Value"),
];

pub(super) const HTML_STYLES: &[(u32, &str)] = &[
    (h::DEFAULT, "Default"),
    (h::TAG, "Tag"),
    (h::TAG_UNKNOWN, "TagUnknown"),
    (h::ATTRIBUTE, "Attribute"),
    (h::ATTRIBUTE_UNKNOWN, "AttributeUnknown"),
    (h::NUMBER, "Number"),
    (h::DOUBLE_STRING, "DoubleString"),
    (h::SINGLE_STRING, "SingleString"),
    (h::OTHER, "Other"),
    (h::COMMENT, "Comment"),
    (h::ENTITY, "Entity"),
    (h::TAG_END, "TagEnd"),
    (h::XML_START, "XmlStart"),
    (h::XML_END, "XmlEnd"),
    (h::SCRIPT, "Script"),
    (h::ASP, "Asp"),
    (h::ASP_AT, "AspAt"),
    (h::CDATA, "CData"),
    (h::QUESTION, "Question"),
    (h::VALUE, "Value"),
    (h::J_START, "JsStart"),
    (h::J_DEFAULT, "JsDefault"),
    (h::J_COMMENT, "JsComment"),
    (h::J_COMMENT_LINE, "JsCommentLine"),
    (h::J_COMMENT_DOC, "JsCommentDoc"),
    (h::J_NUMBER, "JsNumber"),
    (h::J_WORD, "JsWord"),
    (h::J_KEYWORD, "JsKeyword"),
    (h::J_DOUBLE_STRING, "JsDoubleString"),
    (h::J_SINGLE_STRING, "JsSingleString"),
    (h::J_SYMBOLS, "JsSymbols"),
    (h::J_STRING_EOL, "JsStringEol"),
    (h::J_REGEX, "JsRegex"),
];

pub(super) fn configure_xml(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    super::begin(sink, colors, LanguageId::Xml);
    super::apply_styles(sink, colors, LanguageId::Xml, XML_STYLES);
    folding::apply(sink, FoldProfile::Markup);
}

pub(super) fn configure_html(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    super::begin(sink, colors, LanguageId::Html);
    super::apply_styles(sink, colors, LanguageId::Html, HTML_STYLES);
    super::install_keywords(sink, LanguageId::Html);
    super::install_embedded(sink, colors, LanguageId::Html);
    folding::apply(sink, FoldProfile::Markup);
}

/// The markup half of the HTML table, for languages that embed markup.
pub(super) fn apply_html_base(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    let base: Vec<(u32, &str)> = HTML_STYLES
        .iter()
        .copied()
        .filter(|&(style, _)| style < h::J_START)
        .collect();
    super::apply_styles(sink, colors, LanguageId::Html, &base);
}

/// The embedded-script half of the HTML table.
pub(super) fn apply_script_styles(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    let script: Vec<(u32, &str)> = HTML_STYLES
        .iter()
        .copied()
        .filter(|&(style, _)| style >= h::J_START)
        .collect();
    super::apply_styles(sink, colors, LanguageId::Html, &script);
}
