use crate::language::LanguageId;
use crate::registry::ColorRegistry;

use super::folding::{self, FoldProfile};
use super::style_ids::props;
use super::StyleSink;

pub(super) const STYLES: &[(u32, &str)] = &[
    (props::DEFAULT, "Default"),
    (props::COMMENT, "Comment"),
    (props::SECTION, "Section"),
    (props::ASSIGNMENT, "Assignment"),
    (props::DEF_VAL, "DefVal"),
    (props::KEY, "Key"),
];

pub(super) fn configure(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    super::begin(sink, colors, LanguageId::Ini);
    super::apply_styles(sink, colors, LanguageId::Ini, STYLES);
    folding::apply(sink, FoldProfile::Basic);
}
