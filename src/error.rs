use std::fmt;
use std::io;

use crate::language::LanguageId;

/// Color registry operation errors.
///
/// Public file wrappers collapse these to a boolean result; the enum is kept
/// so failures stay distinguishable in tests and logs.
#[derive(Debug)]
pub enum RegistryError {
    /// Bulk replace with the wrong number of color values.
    LengthMismatch { expected: usize, actual: usize },
    /// Named slot access with a name the language does not declare.
    UnknownSlot {
        language: LanguageId,
        name: String,
    },
    /// The language has no color table wired.
    NoTable { language: LanguageId },
    /// A color attribute that does not parse as hex.
    BadColor { value: String },
    /// A `Color` element without a required attribute.
    MissingAttr { attr: &'static str },
    /// A style id attribute that does not parse as an integer.
    BadStyleId { value: String },
    /// Malformed XML document.
    Xml(quick_xml::Error),
    Io(io::Error),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} color values, got {actual}")
            }
            RegistryError::UnknownSlot { language, name } => {
                write!(f, "no color slot {name:?} for {}", language.display_name())
            }
            RegistryError::NoTable { language } => {
                write!(f, "no color table for {}", language.display_name())
            }
            RegistryError::BadColor { value } => write!(f, "bad color value {value:?}"),
            RegistryError::MissingAttr { attr } => {
                write!(f, "color element without a {attr} attribute")
            }
            RegistryError::BadStyleId { value } => write!(f, "bad style id {value:?}"),
            RegistryError::Xml(err) => write!(f, "xml error: {err}"),
            RegistryError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::Xml(err) => Some(err),
            RegistryError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<quick_xml::Error> for RegistryError {
    fn from(err: quick_xml::Error) -> Self {
        RegistryError::Xml(err)
    }
}

impl From<io::Error> for RegistryError {
    fn from(err: io::Error) -> Self {
        RegistryError::Io(err)
    }
}
