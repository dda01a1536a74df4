//! XML persistence for color tables.
//!
//! Schema: a `Colors` root with a `Lexer` attribute, one `Color` child per
//! color value. Each child carries `Name` (`<Slot>Fore` / `<Slot>Back`),
//! per-channel `R`/`G`/`B`/`A` hex bytes, and the packed `HexARGB` value.
//! Only `HexARGB` is read back on import.

use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::color::Color;
use crate::error::RegistryError;
use crate::language::LanguageId;

use super::ColorRegistry;

/// How the per-channel `R`/`G`/`B`/`A` attributes are written.
///
/// The historical writer duplicated the red channel into all four attribute
/// slots; files produced that way exist, so `Legacy` keeps emitting them
/// byte-for-byte. `PerChannel` writes each channel correctly. Import reads
/// only `HexARGB`, so tables round-trip exactly in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelAttrs {
    #[default]
    Legacy,
    PerChannel,
}

impl ColorRegistry {
    /// Serializes the language's table. `NoTable` for unwired languages.
    pub fn export_xml(&self, language: LanguageId) -> Result<String, RegistryError> {
        self.export_xml_with(language, ChannelAttrs::default())
    }

    pub fn export_xml_with(
        &self,
        language: LanguageId,
        channel_attrs: ChannelAttrs,
    ) -> Result<String, RegistryError> {
        let slots = self
            .slots(language)
            .ok_or(RegistryError::NoTable { language })?;

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let mut root = BytesStart::new("Colors");
        root.push_attribute(("Lexer", language.display_name()));
        writer.write_event(Event::Start(root))?;

        for slot in slots {
            for (suffix, color) in [("Fore", slot.pair.fore), ("Back", slot.pair.back)] {
                let (g, b, a) = match channel_attrs {
                    ChannelAttrs::Legacy => (color.r, color.r, color.r),
                    ChannelAttrs::PerChannel => (color.g, color.b, color.a),
                };
                let mut element = BytesStart::new("Color");
                element.push_attribute(("Name", format!("{}{suffix}", slot.name).as_str()));
                element.push_attribute(("R", format!("{:02X}", color.r).as_str()));
                element.push_attribute(("G", format!("{g:02X}").as_str()));
                element.push_attribute(("B", format!("{b:02X}").as_str()));
                element.push_attribute(("A", format!("{a:02X}").as_str()));
                element.push_attribute(("HexARGB", format!("{:08X}", color.to_argb()).as_str()));
                writer.write_event(Event::Empty(element))?;
            }
        }

        writer.write_event(Event::End(BytesEnd::new("Colors")))?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    /// Applies every `Color` element in the document to the language's table.
    ///
    /// The whole document is parsed and every name resolved before anything
    /// is written, so a failed import leaves the registry untouched. Slots
    /// absent from the document keep their current colors.
    pub fn import_xml(
        &mut self,
        document: &str,
        language: LanguageId,
    ) -> Result<(), RegistryError> {
        if self.slots(language).is_none() {
            return Err(RegistryError::NoTable { language });
        }

        let mut reader = Reader::from_str(document);
        let mut entries = Vec::new();
        loop {
            match reader.read_event()? {
                Event::Start(element) | Event::Empty(element)
                    if element.name().as_ref() == b"Color" =>
                {
                    let name = attr_value(&element, "Name")?
                        .ok_or(RegistryError::MissingAttr { attr: "Name" })?;
                    let hex = attr_value(&element, "HexARGB")?
                        .ok_or(RegistryError::MissingAttr { attr: "HexARGB" })?;
                    entries.push((name, parse_argb(&hex)?));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        let mut resolved = Vec::with_capacity(entries.len());
        for (name, color) in entries {
            let (base, fore) = match name.strip_suffix("Fore") {
                Some(base) => (base, true),
                None => match name.strip_suffix("Back") {
                    Some(base) => (base, false),
                    None => {
                        return Err(RegistryError::UnknownSlot { language, name });
                    }
                },
            };
            let index =
                self.slot_index(base, language)
                    .ok_or_else(|| RegistryError::UnknownSlot {
                        language,
                        name: name.clone(),
                    })?;
            resolved.push((index, fore, color));
        }

        for (index, fore, color) in resolved {
            self.set_channel(language, index, fore, color);
        }
        Ok(())
    }

    /// Writes the exported document to `path`. `false` on any failure.
    pub fn save_xml_file(&self, language: LanguageId, path: &Path) -> bool {
        let result = self
            .export_xml(language)
            .and_then(|doc| std::fs::write(path, doc).map_err(RegistryError::from));
        match result {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "save color file failed");
                false
            }
        }
    }

    /// Loads and imports a color file. `false` on any failure; a missing
    /// file is checked before reading and is its own `false` path.
    pub fn load_xml_file(&mut self, language: LanguageId, path: &Path) -> bool {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "color file not found");
            return false;
        }
        let result = std::fs::read_to_string(path)
            .map_err(RegistryError::from)
            .and_then(|doc| self.import_xml(&doc, language));
        match result {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "load color file failed");
                false
            }
        }
    }
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

fn parse_argb(hex: &str) -> Result<Color, RegistryError> {
    if hex.len() != 8 {
        return Err(RegistryError::BadColor {
            value: hex.to_string(),
        });
    }
    u32::from_str_radix(hex, 16)
        .map(Color::from_argb)
        .map_err(|_| RegistryError::BadColor {
            value: hex.to_string(),
        })
}

#[cfg(test)]
#[path = "../../tests/unit/registry_xml.rs"]
mod tests;
