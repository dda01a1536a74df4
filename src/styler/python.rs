use crate::language::LanguageId;
use crate::registry::ColorRegistry;

use super::folding::{self, FoldProfile};
use super::style_ids::python as py;
use super::StyleSink;

pub(super) const STYLES: &[(u32, &str)] = &[
    (py::DEFAULT, "Default"),
    (py::COMMENT_LINE, "CommentLine"),
    (py::NUMBER, "Number"),
    (py::STRING, "String"),
    (py::CHARACTER, "Character"),
    (py::WORD, "Word"),
    (py::TRIPLE, "Triple"),
    (py::TRIPLE_DOUBLE, "TripleDouble"),
    (py::CLASS_NAME, "ClassName"),
    (py::DEF_NAME, "DefName"),
    (py::OPERATOR, "Operator"),
    (py::IDENTIFIER, "Identifier"),
    (py::COMMENT_BLOCK, "CommentBlock"),
    (py::STRING_EOL, "StringEol"),
    (py::WORD2, "Word2"),
    (py::DECORATOR, "Decorator"),
];

pub(super) fn configure(sink: &mut dyn StyleSink, colors: &ColorRegistry) {
    super::begin(sink, colors, LanguageId::Python);
    super::apply_styles(sink, colors, LanguageId::Python, STYLES);
    super::install_keywords(sink, LanguageId::Python);
    // The Python lexer treats tab/space mixing strictly by default.
    sink.set_property("tab.timmy.whinge.level", "1");
    folding::apply(sink, FoldProfile::Basic);
}
