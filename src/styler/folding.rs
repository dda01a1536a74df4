//! Folding margin and marker setup.
//!
//! Fold levels are computed by the external lexer; this module only turns
//! the lexer's folding on and gives the margin its markers.

use crate::color::Color;

use super::sink::{FoldMargin, MarkerSymbol, StyleSink};

/// Which fold properties a language's lexer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FoldProfile {
    CLike,
    Markup,
    Sql,
    Basic,
}

const FOLD_MARGIN: u32 = 2;
const FOLD_MARGIN_WIDTH: u32 = 16;
const FOLD_MASK: u32 = 0xFE00_0000;

const MARKER_FORE: Color = Color::rgb(255, 255, 255);
const MARKER_BACK: Color = Color::rgb(128, 128, 128);

const MARKERS: [(u32, MarkerSymbol); 7] = [
    (25, MarkerSymbol::BoxPlusConnected),
    (26, MarkerSymbol::BoxMinusConnected),
    (27, MarkerSymbol::TCorner),
    (28, MarkerSymbol::LCorner),
    (29, MarkerSymbol::VLine),
    (30, MarkerSymbol::BoxPlus),
    (31, MarkerSymbol::BoxMinus),
];

pub(super) fn apply(sink: &mut dyn StyleSink, profile: FoldProfile) {
    sink.set_property("fold", "1");
    sink.set_property("fold.compact", "1");
    match profile {
        FoldProfile::CLike => {
            sink.set_property("fold.comment", "1");
            sink.set_property("fold.preprocessor", "1");
        }
        FoldProfile::Markup => sink.set_property("fold.html", "1"),
        FoldProfile::Sql => sink.set_property("fold.comment", "1"),
        FoldProfile::Basic => {}
    }

    sink.set_fold_margin(FoldMargin {
        margin: FOLD_MARGIN,
        width: FOLD_MARGIN_WIDTH,
        mask: FOLD_MASK,
        sensitive: true,
    });
    for (marker, symbol) in MARKERS {
        sink.define_marker(marker, symbol, MARKER_FORE, MARKER_BACK);
    }
}
