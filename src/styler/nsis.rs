use crate::language::LanguageId;
use crate::registry::ColorRegistry;

use super::folding::{self, FoldProfile};
use super::style_ids::nsis;
use super::StyleSink;

pub(super) const STYLES: &[(u32, &str)] = &[
    (nsis::DEFAULT, "Default"),
    (nsis::COMMENT, "Comment"),
    (nsis::STRING_DQ, "StringDq"),
    (nsis::STRING_LQ, "StringLq"),
    (nsis::STRING_RQ, "StringRq"),
    (nsis::FUNCTION, "Function"),
    (nsis::VARIABLE, "Variable"),
    (nsis::LABEL, "Label"),
    (nsis::USER_DEFINED, "UserDefined"),
    (nsis::SECTION_DEF, "SectionDef"),
    (nsis::SUB_SECTION_DEF, "SubSectionDef"),
    (nsis::IF_DEFINE_DEF, "IfDef"),
    (nsis::MACRO_DEF, "MacroDef"),
    (nsis::STRING_VAR, "StringVar"),
    (nsis::NUMBER, "Number"),
    (nsis::SECTION_GROUP, "SectionGroup"),
    (nsis::PAGE_EX, "PageEx"),
    (nsis::FUNCTION_DEF, "FunctionDef"),
    (nsis::COMMENT_BOX, "CommentBox"),
];

pub(super) fn configure(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    super::begin(sink, colors, LanguageId::Nsis);
    super::apply_styles(sink, colors, LanguageId::Nsis, STYLES);
    super::install_keywords(sink, LanguageId::Nsis);
    sink.set_property("nsis.ignorecase", "1");
    folding::apply(sink, FoldProfile::Basic);
}
