//! Loader for externally authored style-definition documents (the
//! Notepad++ `stylers.xml` shape): a `NotepadPlus` root with `GlobalStyles`
//! holding `WidgetStyle` elements and `LexerStyles` holding per-lexer
//! `WordsStyle` elements. The schema belongs to that ecosystem, not to this
//! crate's own color files.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::color::{parse_hex, Color};
use crate::error::RegistryError;
use crate::language::LanguageId;

use super::folding::{self, FoldProfile};
use super::sink::{StyleSink, STYLE_DEFAULT};

#[derive(Debug, Default)]
struct StyleEntry {
    name: String,
    style_id: u32,
    fg: Option<Color>,
    bg: Option<Color>,
    font_name: Option<String>,
    font_size: Option<u16>,
    keyword_class: Option<String>,
    words: String,
}

#[derive(Debug, Default)]
struct Definition {
    globals: Vec<StyleEntry>,
    lexer: Vec<StyleEntry>,
}

/// Applies an external style-definition file to the widget.
///
/// Only the C# language is mapped onto this path. Every failure (missing
/// file, malformed document, unmapped language) is reported uniformly as
/// `false`.
pub fn apply_definition_file(
    sink: &mut dyn StyleSink,
    language: LanguageId,
    path: &Path,
    use_global_override: bool,
    apply_font: bool,
) -> bool {
    if language != LanguageId::Cs {
        tracing::debug!(
            language = language.display_name(),
            "no external definition mapping for language"
        );
        return false;
    }
    match load_and_apply(sink, path, use_global_override, apply_font) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, path = %path.display(), "style definition load failed");
            false
        }
    }
}

fn load_and_apply(
    sink: &mut dyn StyleSink,
    path: &Path,
    use_global_override: bool,
    apply_font: bool,
) -> Result<(), RegistryError> {
    let document = std::fs::read_to_string(path)?;
    let definition = parse_document(&document, "cs")?;

    sink.reset_styles();
    if let Some(style) = definition.globals.iter().find(|s| s.name == "Default Style") {
        apply_entry(sink, style, apply_font);
    }
    if use_global_override {
        if let Some(style) = definition
            .globals
            .iter()
            .find(|s| s.name == "Global override")
        {
            // The override carries colors only; its style id is ignored.
            if let Some(fg) = style.fg {
                sink.set_style_fore(STYLE_DEFAULT, fg);
            }
            if let Some(bg) = style.bg {
                sink.set_style_back(STYLE_DEFAULT, bg);
            }
        }
    }

    sink.set_lexer(LanguageId::Cs.lexer_name());
    for style in &definition.lexer {
        apply_entry(sink, style, apply_font);
        if !style.words.is_empty() {
            if let Some(set) = keyword_set(style.keyword_class.as_deref()) {
                sink.set_keywords(set, style.words.trim());
            }
        }
    }

    folding::apply(sink, FoldProfile::CLike);
    Ok(())
}

fn apply_entry(sink: &mut dyn StyleSink, style: &StyleEntry, apply_font: bool) {
    if let Some(fg) = style.fg {
        sink.set_style_fore(style.style_id, fg);
    }
    if let Some(bg) = style.bg {
        sink.set_style_back(style.style_id, bg);
    }
    if apply_font {
        if let (Some(name), Some(size)) = (style.font_name.as_deref(), style.font_size) {
            if !name.is_empty() {
                sink.set_style_font(style.style_id, name, size);
            }
        }
    }
}

fn keyword_set(class: Option<&str>) -> Option<u8> {
    match class? {
        "instre1" => Some(0),
        "instre2" => Some(1),
        "type1" => Some(2),
        "type2" => Some(3),
        "type3" => Some(4),
        "type4" => Some(5),
        _ => None,
    }
}

fn parse_document(document: &str, lexer_name: &str) -> Result<Definition, RegistryError> {
    let mut reader = Reader::from_str(document);
    let mut definition = Definition::default();

    let mut in_globals = false;
    let mut in_target_lexer = false;
    let mut open_words_style: Option<StyleEntry> = None;

    loop {
        match reader.read_event()? {
            Event::Start(element) => match element.name().as_ref() {
                b"GlobalStyles" => in_globals = true,
                b"LexerType" => {
                    in_target_lexer =
                        attr_value(&element, "name")?.as_deref() == Some(lexer_name);
                }
                b"WidgetStyle" if in_globals => {
                    definition.globals.push(parse_entry(&element)?);
                }
                b"WordsStyle" if in_target_lexer => {
                    open_words_style = Some(parse_entry(&element)?);
                }
                _ => {}
            },
            Event::Empty(element) => match element.name().as_ref() {
                b"WidgetStyle" if in_globals => {
                    definition.globals.push(parse_entry(&element)?);
                }
                b"WordsStyle" if in_target_lexer => {
                    definition.lexer.push(parse_entry(&element)?);
                }
                _ => {}
            },
            Event::Text(text) => {
                if let Some(style) = open_words_style.as_mut() {
                    style.words.push_str(&text.unescape()?);
                }
            }
            Event::End(element) => match element.name().as_ref() {
                b"GlobalStyles" => in_globals = false,
                b"LexerType" => in_target_lexer = false,
                b"WordsStyle" => {
                    if let Some(style) = open_words_style.take() {
                        definition.lexer.push(style);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(definition)
}

fn parse_entry(element: &BytesStart<'_>) -> Result<StyleEntry, RegistryError> {
    let mut entry = StyleEntry {
        name: attr_value(element, "name")?.unwrap_or_default(),
        ..StyleEntry::default()
    };

    let style_id =
        attr_value(element, "styleID")?.ok_or(RegistryError::MissingAttr { attr: "styleID" })?;
    entry.style_id = style_id
        .parse()
        .map_err(|_| RegistryError::BadStyleId { value: style_id })?;

    if let Some(value) = attr_value(element, "fgColor")? {
        entry.fg = Some(parse_hex(&value).ok_or(RegistryError::BadColor { value })?);
    }
    if let Some(value) = attr_value(element, "bgColor")? {
        entry.bg = Some(parse_hex(&value).ok_or(RegistryError::BadColor { value })?);
    }
    entry.font_name = attr_value(element, "fontName")?;
    entry.font_size = attr_value(element, "fontSize")?.and_then(|v| v.parse().ok());
    entry.keyword_class = attr_value(element, "keywordClass")?;
    Ok(entry)
}

fn attr_value(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, RegistryError> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == name.as_bytes() {
            return Ok(Some(String::from_utf8_lossy(&attr.value).into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "../../tests/unit/notepad.rs"]
mod tests;
