//! The lexer configurator: translates a language identifier into a concrete
//! widget configuration. Colors come from the registry, keyword lists and
//! folding setup are fixed per language.
//!
//! Configuration is a stateless, idempotent function of (registry contents,
//! language); re-running it reproduces the same widget state.

pub mod sink;

mod batch;
mod cpp;
mod cs;
mod folding;
mod ini;
mod markup;
mod notepad;
mod nsis;
mod pascal;
mod php;
mod plain;
mod powershell;
mod python;
mod sql;
mod style_ids;

pub use notepad::apply_definition_file;
pub use sink::{FoldMargin, MarkerSymbol, RecordingSink, StyleSink};

use crate::keywords;
use crate::language::LanguageId;
use crate::registry::ColorRegistry;

type Routine = fn(&mut dyn StyleSink, &ColorRegistry);

/// The configuration routine for a language, or `None` when nothing is
/// wired for it yet.
fn routine(language: LanguageId) -> Option<Routine> {
    match language {
        LanguageId::PlainText => Some(plain::configure),
        LanguageId::Cs => Some(cs::configure),
        LanguageId::Cpp => Some(cpp::configure),
        LanguageId::Xml => Some(markup::configure_xml),
        LanguageId::Html => Some(markup::configure_html),
        LanguageId::Sql => Some(sql::configure),
        LanguageId::Batch => Some(batch::configure),
        LanguageId::Pascal => Some(pascal::configure),
        LanguageId::Php => Some(php::configure),
        LanguageId::PowerShell => Some(powershell::configure),
        LanguageId::Ini => Some(ini::configure),
        LanguageId::Python => Some(python::configure),
        LanguageId::Nsis => Some(nsis::configure),
        LanguageId::InnoSetup | LanguageId::Yaml => None,
    }
}

/// Configures the widget for a language. `false` means no configuration is
/// wired for the language; the sink is left untouched in that case.
pub fn configure(sink: &mut dyn StyleSink, colors: &ColorRegistry, language: LanguageId) -> bool {
    match routine(language) {
        Some(run) => {
            run(sink, colors);
            tracing::debug!(language = language.display_name(), "lexer configured");
            true
        }
        None => {
            tracing::debug!(
                language = language.display_name(),
                "no lexer configuration wired"
            );
            false
        }
    }
}

/// The fixed (style id, slot name) wiring table for a language. Used by the
/// tests to check the tables stay aligned with the registry's slot names.
#[cfg(test)]
fn style_table(language: LanguageId) -> &'static [(u32, &'static str)] {
    match language {
        LanguageId::PlainText => plain::STYLES,
        LanguageId::Cs => cs::STYLES,
        LanguageId::Cpp => cpp::STYLES,
        LanguageId::Xml => markup::XML_STYLES,
        LanguageId::Html => markup::HTML_STYLES,
        LanguageId::Sql => sql::STYLES,
        LanguageId::Batch => batch::STYLES,
        LanguageId::Pascal => pascal::STYLES,
        LanguageId::Php => php::STYLES,
        LanguageId::PowerShell => powershell::STYLES,
        LanguageId::Ini => ini::STYLES,
        LanguageId::Python => python::STYLES,
        LanguageId::Nsis => nsis::STYLES,
        LanguageId::InnoSetup | LanguageId::Yaml => &[],
    }
}

/// Resets style state, seeds the base style from the `Default` slot and
/// selects the lexer. Every routine starts here.
fn begin(sink: &mut dyn StyleSink, colors: &ColorRegistry, language: LanguageId) {
    sink.reset_styles();
    if let Ok(pair) = colors.pair(language, "Default") {
        sink.set_style_fore(sink::STYLE_DEFAULT, pair.fore);
        sink.set_style_back(sink::STYLE_DEFAULT, pair.back);
    }
    sink.set_lexer(language.lexer_name());
}

fn apply_styles(
    sink: &mut dyn StyleSink,
    colors: &ColorRegistry,
    language: LanguageId,
    styles: &[(u32, &str)],
) {
    for &(style, slot) in styles {
        match colors.pair(language, slot) {
            Ok(pair) => {
                sink.set_style_fore(style, pair.fore);
                sink.set_style_back(style, pair.back);
            }
            Err(err) => {
                tracing::warn!(error = %err, style, "style slot missing from color table");
            }
        }
    }
}

fn install_keywords(sink: &mut dyn StyleSink, language: LanguageId) {
    for &(set, words) in keywords::keyword_groups(language) {
        sink.set_keywords(set, words);
    }
}

/// Two languages carry another language's tokens inside their content. This
/// re-applies the embedding layer's style set on top of the host's and
/// reinstalls the embedded keyword list. A fixed two-layer composition, not
/// a general mechanism.
fn install_embedded(sink: &mut dyn StyleSink, colors: &ColorRegistry, language: LanguageId) {
    match language {
        LanguageId::Html => {
            markup::apply_script_styles(sink, colors);
            sink.set_keywords(1, keywords::JS_KEYWORDS);
        }
        LanguageId::Php => {
            markup::apply_html_base(sink, colors);
            sink.set_keywords(4, keywords::PHP_KEYWORDS);
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/styler.rs"]
mod tests;
