use crate::language::LanguageId;
use crate::registry::ColorRegistry;

use super::folding::{self, FoldProfile};
use super::style_ids::pascal;
use super::StyleSink;

pub(super) const STYLES: &[(u32, &str)] = &[
    (pascal::DEFAULT, "Default"),
    (pascal::IDENTIFIER, "Identifier"),
    (pascal::COMMENT, "Comment"),
    (pascal::COMMENT2, "Comment2"),
    (pascal::COMMENT_LINE, "CommentLine"),
    (pascal::PREPROCESSOR, "Preprocessor"),
    (pascal::PREPROCESSOR2, "Preprocessor2"),
    (pascal::NUMBER, "Number"),
    (pascal::HEX_NUMBER, "HexNumber"),
    (pascal::WORD, "Word"),
    (pascal::STRING, "String"),
    (pascal::STRING_EOL, "StringEol"),
    (pascal::CHARACTER, "Character"),
    (pascal::OPERATOR, "Operator"),
    (pascal::ASM, "Asm"),
];

pub(super) fn configure(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    super::begin(sink, colors, LanguageId::Pascal);
    super::apply_styles(sink, colors, LanguageId::Pascal, STYLES);
    super::install_keywords(sink, LanguageId::Pascal);
    folding::apply(sink, FoldProfile::CLike);
}
