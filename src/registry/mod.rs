//! The color registry: one ordered slot table per wired language.
//!
//! A slot is a named (foreground, background) pair; slot count and order are
//! fixed when the registry is built. Bulk access flattens each table to
//! `[fore0, back0, fore1, back1, ..]` so callers can persist or replace a
//! whole palette at once.

mod defaults;
mod xml;

pub use xml::ChannelAttrs;

use rustc_hash::FxHashMap;

use crate::color::{Color, ColorPair};
use crate::error::RegistryError;
use crate::language::LanguageId;

#[derive(Debug, Clone)]
struct Slot {
    name: &'static str,
    pair: ColorPair,
}

#[derive(Debug, Clone)]
struct LanguageTable {
    slots: Vec<Slot>,
}

/// Owns the color tables. Built once with the default palettes and passed by
/// reference to whatever owns the widget; not a global. Callers serialize
/// access themselves, there is no interior locking.
#[derive(Debug, Clone)]
pub struct ColorRegistry {
    tables: FxHashMap<LanguageId, LanguageTable>,
}

impl ColorRegistry {
    pub fn new() -> Self {
        let mut tables = FxHashMap::default();
        for language in LanguageId::ALL {
            if let Some(defs) = defaults::language_defaults(language) {
                let slots = defs
                    .iter()
                    .map(|&(name, fore, back)| Slot {
                        name,
                        pair: ColorPair::new(fore, back),
                    })
                    .collect();
                tables.insert(language, LanguageTable { slots });
            }
        }
        Self { tables }
    }

    /// The language's table flattened to `[fore0, back0, fore1, back1, ..]`.
    /// Empty for languages without a table.
    pub fn table(&self, language: LanguageId) -> Vec<Color> {
        let Some(table) = self.tables.get(&language) else {
            return Vec::new();
        };
        table
            .slots
            .iter()
            .flat_map(|slot| [slot.pair.fore, slot.pair.back])
            .collect()
    }

    /// Replaces the table wholesale. The input must be non-empty and exactly
    /// the current flattened length; the registry is unchanged on failure.
    pub fn set_table(
        &mut self,
        language: LanguageId,
        values: &[Color],
    ) -> Result<(), RegistryError> {
        let table = self
            .tables
            .get_mut(&language)
            .ok_or(RegistryError::NoTable { language })?;
        let expected = table.slots.len() * 2;
        if values.is_empty() || values.len() != expected {
            return Err(RegistryError::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }
        for (slot, pair) in table.slots.iter_mut().zip(values.chunks_exact(2)) {
            slot.pair = ColorPair::new(pair[0], pair[1]);
        }
        Ok(())
    }

    /// Slot names in ordinal order; empty for languages without a table.
    pub fn slot_names(&self, language: LanguageId) -> Vec<&'static str> {
        self.tables
            .get(&language)
            .map(|table| table.slots.iter().map(|slot| slot.name).collect())
            .unwrap_or_default()
    }

    /// Ordinal of the first slot with this name. Linear scan in declaration
    /// order; case-sensitive exact match.
    pub fn slot_index(&self, name: &str, language: LanguageId) -> Option<usize> {
        self.tables
            .get(&language)?
            .slots
            .iter()
            .position(|slot| slot.name == name)
    }

    pub fn pair(&self, language: LanguageId, name: &str) -> Result<ColorPair, RegistryError> {
        let index = self
            .slot_index(name, language)
            .ok_or_else(|| RegistryError::UnknownSlot {
                language,
                name: name.to_string(),
            })?;
        Ok(self.tables[&language].slots[index].pair)
    }

    pub fn set_pair(
        &mut self,
        language: LanguageId,
        name: &str,
        pair: ColorPair,
    ) -> Result<(), RegistryError> {
        let index = self
            .slot_index(name, language)
            .ok_or_else(|| RegistryError::UnknownSlot {
                language,
                name: name.to_string(),
            })?;
        if let Some(table) = self.tables.get_mut(&language) {
            table.slots[index].pair = pair;
        }
        Ok(())
    }

    pub fn fore(&self, language: LanguageId, name: &str) -> Result<Color, RegistryError> {
        self.pair(language, name).map(|pair| pair.fore)
    }

    pub fn back(&self, language: LanguageId, name: &str) -> Result<Color, RegistryError> {
        self.pair(language, name).map(|pair| pair.back)
    }

    fn slots(&self, language: LanguageId) -> Option<&[Slot]> {
        self.tables.get(&language).map(|table| table.slots.as_slice())
    }

    fn set_channel(
        &mut self,
        language: LanguageId,
        index: usize,
        fore: bool,
        color: Color,
    ) {
        if let Some(table) = self.tables.get_mut(&language) {
            if let Some(slot) = table.slots.get_mut(index) {
                if fore {
                    slot.pair.fore = color;
                } else {
                    slot.pair.back = color;
                }
            }
        }
    }
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry.rs"]
mod tests;
