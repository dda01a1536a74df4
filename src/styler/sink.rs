//! The widget surface: trait + data contracts.
//!
//! Style-slot indices, keyword-set indices and property names follow the
//! external lexer component's own numbering; the contract here is only
//! "assign color/string X to slot Y".

use rustc_hash::FxHashMap;

use crate::color::Color;

/// The widget's base style slot; resetting propagates it to all others.
pub const STYLE_DEFAULT: u32 = 32;

/// Folding margin setup: which margin, its pixel width, the marker mask and
/// whether it reacts to mouse clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldMargin {
    pub margin: u32,
    pub width: u32,
    pub mask: u32,
    pub sensitive: bool,
}

/// Marker glyphs the widget can draw in the folding margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSymbol {
    BoxPlus,
    BoxMinus,
    BoxPlusConnected,
    BoxMinusConnected,
    VLine,
    LCorner,
    TCorner,
}

/// Everything the configurator needs from an editing widget. Implemented by
/// the host over its widget handle; all methods are plain assignments that
/// do not fail.
pub trait StyleSink {
    /// Clears document styling and resets all style slots to the default.
    fn reset_styles(&mut self);
    /// Selects the lexer implementation by name.
    fn set_lexer(&mut self, name: &str);
    fn set_style_fore(&mut self, style: u32, color: Color);
    fn set_style_back(&mut self, style: u32, color: Color);
    fn set_style_font(&mut self, style: u32, family: &str, size: u16);
    fn set_keywords(&mut self, set: u8, words: &str);
    fn set_property(&mut self, name: &str, value: &str);
    fn set_fold_margin(&mut self, margin: FoldMargin);
    fn define_marker(&mut self, marker: u32, symbol: MarkerSymbol, fore: Color, back: Color);
}

/// An in-memory sink that records what a configuration routine assigned.
/// Used by this crate's tests; also handy for host-side tests that do not
/// want to spin up a real widget.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub resets: usize,
    pub lexer: Option<String>,
    pub fores: FxHashMap<u32, Color>,
    pub backs: FxHashMap<u32, Color>,
    pub fonts: FxHashMap<u32, (String, u16)>,
    pub keywords: FxHashMap<u8, String>,
    pub properties: Vec<(String, String)>,
    pub fold_margin: Option<FoldMargin>,
    pub markers: Vec<(u32, MarkerSymbol, Color, Color)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_untouched(&self) -> bool {
        self.resets == 0
            && self.lexer.is_none()
            && self.fores.is_empty()
            && self.backs.is_empty()
            && self.keywords.is_empty()
            && self.properties.is_empty()
            && self.fold_margin.is_none()
            && self.markers.is_empty()
    }
}

impl StyleSink for RecordingSink {
    fn reset_styles(&mut self) {
        self.resets += 1;
        self.fores.clear();
        self.backs.clear();
        self.fonts.clear();
    }

    fn set_lexer(&mut self, name: &str) {
        self.lexer = Some(name.to_string());
    }

    fn set_style_fore(&mut self, style: u32, color: Color) {
        self.fores.insert(style, color);
    }

    fn set_style_back(&mut self, style: u32, color: Color) {
        self.backs.insert(style, color);
    }

    fn set_style_font(&mut self, style: u32, family: &str, size: u16) {
        self.fonts.insert(style, (family.to_string(), size));
    }

    fn set_keywords(&mut self, set: u8, words: &str) {
        self.keywords.insert(set, words.to_string());
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.push((name.to_string(), value.to_string()));
    }

    fn set_fold_margin(&mut self, margin: FoldMargin) {
        self.fold_margin = Some(margin);
    }

    fn define_marker(&mut self, marker: u32, symbol: MarkerSymbol, fore: Color, back: Color) {
        self.markers.push((marker, symbol, fore, back));
    }
}
