//! lexstyle - style and keyword configuration for Scintilla-like editing widgets
//!
//! Module structure:
//! - color: RGBA color value and hex parsing
//! - language: the closed set of supported lexer languages
//! - registry: per-language color tables with XML persistence
//! - keywords: static keyword-group data handed to the widget's lexer
//! - styler: pushes colors, keywords and folding setup into a widget

pub mod color;
pub mod error;
pub mod keywords;
pub mod language;
pub mod registry;
pub mod styler;

pub use color::{Color, ColorPair};
pub use error::RegistryError;
pub use language::LanguageId;
pub use registry::{ChannelAttrs, ColorRegistry};
pub use styler::{configure, FoldMargin, MarkerSymbol, StyleSink};
