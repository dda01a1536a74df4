use crate::language::LanguageId;
use crate::registry::ColorRegistry;

use super::folding::{self, FoldProfile};
use super::style_ids::hypertext as h;
use super::StyleSink;

pub(super) const STYLES: &[(u32, &str)] = &[
    (h::PHP_DEFAULT, "Default"),
    (h::PHP_HSTRING, "HString"),
    (h::PHP_SIMPLE_STRING, "SimpleString"),
    (h::PHP_WORD, "Word"),
    (h::PHP_NUMBER, "Number"),
    (h::PHP_VARIABLE, "Variable"),
    (h::PHP_COMMENT, "Comment"),
    (h::PHP_COMMENT_LINE, "CommentLine"),
    (h::PHP_HSTRING_VARIABLE, "HStringVariable"),
    (h::PHP_OPERATOR, "Operator"),
    (h::PHP_COMPLEX_VARIABLE, "ComplexVariable"),
];

pub(super) fn configure(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    super::begin(sink, colors, LanguageId::Php);
    super::apply_styles(sink, colors, LanguageId::Php, STYLES);
    super::install_keywords(sink, LanguageId::Php);
    super::install_embedded(sink, colors, LanguageId::Php);
    folding::apply(sink, FoldProfile::Markup);
}
