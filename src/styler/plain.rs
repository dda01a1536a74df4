use crate::language::LanguageId;
use crate::registry::ColorRegistry;

use super::sink::STYLE_DEFAULT;
use super::StyleSink;

pub(super) const STYLES: &[(u32, &str)] = &[(STYLE_DEFAULT, "Default")];

/// The null configuration: no lexer, no keywords, no folding.
pub(super) fn configure(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    super::begin(sink, colors, LanguageId::PlainText);
    super::apply_styles(sink, colors, LanguageId::PlainText, STYLES);
}
