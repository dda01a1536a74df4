use crate::language::LanguageId;
use crate::registry::ColorRegistry;

use super::folding::{self, FoldProfile};
use super::style_ids::powershell as ps;
use super::StyleSink;

pub(super) const STYLES: &[(u32, &str)] = &[
    (ps::DEFAULT, "Default"),
    (ps::COMMENT, "Comment"),
    (ps::STRING, "String"),
    (ps::CHARACTER, "Character"),
    (ps::NUMBER, "Number"),
    (ps::VARIABLE, "Variable"),
    (ps::OPERATOR, "Operator"),
    (ps::IDENTIFIER, "Identifier"),
    (ps::KEYWORD, "Keyword"),
    (ps::CMDLET, "Cmdlet"),
    (ps::ALIAS, "Alias"),
    (ps::FUNCTION, "Function"),
    (ps::USER1, "User1"),
    (ps::COMMENT_STREAM, "CommentStream"),
    (ps::HERE_STRING, "HereString"),
    (ps::HERE_CHARACTER, "HereCharacter"),
    (ps::COMMENT_DOC_KEYWORD, "CommentDocKeyword"),
];

pub(super) fn configure(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    super::begin(sink, colors, LanguageId::PowerShell);
    super::apply_styles(sink, colors, LanguageId::PowerShell, STYLES);
    super::install_keywords(sink, LanguageId::PowerShell);
    folding::apply(sink, FoldProfile::Basic);
}
