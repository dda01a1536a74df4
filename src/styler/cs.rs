use crate::language::LanguageId;
use crate::registry::ColorRegistry;

use super::folding::{self, FoldProfile};
use super::style_ids::c;
use super::StyleSink;

pub(super) const STYLES: &[(u32, &str)] = &[
    (c::PREPROCESSOR, "Preprocessor"),
    (c::DEFAULT, "Default"),
    (c::WORD, "Word"),
    (c::WORD2, "Word2"),
    (c::COMMENT, "Comment"),
    (c::COMMENT_LINE, "CommentLine"),
    (c::COMMENT_DOC, "CommentDoc"),
    (c::NUMBER, "Number"),
    (c::STRING, "String"),
    (c::CHARACTER, "Character"),
    (c::UUID, "Uuid"),
    (c::OPERATOR, "Operator"),
    (c::IDENTIFIER, "Identifier"),
    (c::STRING_EOL, "StringEol"),
    (c::VERBATIM, "Verbatim"),
    (c::REGEX, "Regex"),
    (c::COMMENT_LINE_DOC, "CommentLineDoc"),
    (c::COMMENT_DOC_KEYWORD, "CommentDocKeyword"),
    (c::COMMENT_DOC_KEYWORD_ERROR, "CommentDocKeywordError"),
    (c::GLOBAL_CLASS, "GlobalClass"),
];

pub(super) fn configure(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    super::begin(sink, colors, LanguageId::Cs);
    super::apply_styles(sink, colors, LanguageId::Cs, STYLES);
    super::install_keywords(sink, LanguageId::Cs);
    folding::apply(sink, FoldProfile::CLike);
}
