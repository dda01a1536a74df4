use crate::language::LanguageId;
use crate::registry::ColorRegistry;

use super::folding::{self, FoldProfile};
use super::style_ids::sql;
use super::StyleSink;

pub(super) const STYLES: &[(u32, &str)] = &[
    (sql::DEFAULT, "Default"),
    (sql::COMMENT, "Comment"),
    (sql::COMMENT_LINE, "CommentLine"),
    (sql::COMMENT_DOC, "CommentDoc"),
    (sql::NUMBER, "Number"),
    (sql::WORD, "Word"),
    (sql::STRING, "String"),
    (sql::CHARACTER, "Character"),
    (sql::SQLPLUS, "SqlPlus"),
    (sql::SQLPLUS_PROMPT, "SqlPlusPrompt"),
    (sql::OPERATOR, "Operator"),
    (sql::IDENTIFIER, "Identifier"),
    (sql::SQLPLUS_COMMENT, "SqlPlusComment"),
    (sql::COMMENT_LINE_DOC, "CommentLineDoc"),
    (sql::WORD2, "Word2"),
    (sql::COMMENT_DOC_KEYWORD, "CommentDocKeyword"),
    (sql::COMMENT_DOC_KEYWORD_ERROR, "CommentDocKeywordError"),
    (sql::USER1, "User1"),
    (sql::USER2, "User2"),
    (sql::USER3, "User3"),
    (sql::USER4, "User4"),
    (sql::QUOTED_IDENTIFIER, "QuotedIdentifier"),
];

pub(super) fn configure(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    super::begin(sink, colors, LanguageId::Sql);
    super::apply_styles(sink, colors, LanguageId::Sql, STYLES);
    super::install_keywords(sink, LanguageId::Sql);
    folding::apply(sink, FoldProfile::Sql);
}
