use crate::language::LanguageId;
use crate::registry::ColorRegistry;

use super::folding::{self, FoldProfile};
use super::style_ids::batch;
use super::StyleSink;

pub(super) const STYLES: &[(u32, &str)] = &[
    (batch::DEFAULT, "Default"),
    (batch::COMMENT, "Comment"),
    (batch::WORD, "Word"),
    (batch::LABEL, "Label"),
    (batch::HIDE, "Hide"),
    (batch::COMMAND, "Command"),
    (batch::IDENTIFIER, "Identifier"),
    (batch::OPERATOR, "Operator"),
];

pub(super) fn configure(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    super::begin(sink, colors, LanguageId::Batch);
    super::apply_styles(sink, colors, LanguageId::Batch, STYLES);
    super::install_keywords(sink, LanguageId::Batch);
    folding::apply(sink, FoldProfile::Basic);
}
