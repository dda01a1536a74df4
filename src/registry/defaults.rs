//! Built-in default palettes.
//!
//! Slot declaration order is the ordinal order of the table and must match
//! the style-id tables in the styler modules; the styler tests check the
//! alignment.

use crate::color::Color;
use crate::language::LanguageId;

pub(super) type SlotDef = (&'static str, Color, Color);

const WHITE: Color = Color::rgb(255, 255, 255);
const BLACK: Color = Color::rgb(0, 0, 0);
const COMMENT: Color = Color::rgb(0, 128, 0);
const DOC_COMMENT: Color = Color::rgb(128, 128, 128);
const KEYWORD: Color = Color::rgb(0, 0, 255);
const TYPE_NAME: Color = Color::rgb(43, 145, 175);
const STRING: Color = Color::rgb(163, 21, 21);
const NUMBER: Color = Color::rgb(255, 128, 0);
const OPERATOR: Color = Color::rgb(0, 0, 128);
const PREPROCESSOR: Color = Color::rgb(128, 64, 0);
const VARIABLE: Color = Color::rgb(0, 128, 128);
const MACRO: Color = Color::rgb(128, 0, 128);
const ERROR_RED: Color = Color::rgb(255, 0, 0);
const EOL_BACK: Color = Color::rgb(224, 192, 224);

const PLAIN_TEXT: &[SlotDef] = &[("Default", BLACK, WHITE)];

const CS: &[SlotDef] = &[
    ("Preprocessor", DOC_COMMENT, WHITE),
    ("Default", BLACK, WHITE),
    ("Word", KEYWORD, WHITE),
    ("Word2", TYPE_NAME, WHITE),
    ("Comment", COMMENT, WHITE),
    ("CommentLine", COMMENT, WHITE),
    ("CommentDoc", DOC_COMMENT, WHITE),
    ("Number", BLACK, WHITE),
    ("String", STRING, WHITE),
    ("Character", STRING, WHITE),
    ("Uuid", BLACK, WHITE),
    ("Operator", BLACK, WHITE),
    ("Identifier", BLACK, WHITE),
    ("StringEol", BLACK, EOL_BACK),
    ("Verbatim", STRING, WHITE),
    ("Regex", PREPROCESSOR, WHITE),
    ("CommentLineDoc", COMMENT, WHITE),
    ("CommentDocKeyword", DOC_COMMENT, WHITE),
    ("CommentDocKeywordError", ERROR_RED, WHITE),
    ("GlobalClass", TYPE_NAME, WHITE),
];

const CPP: &[SlotDef] = &[
    ("Preprocessor", PREPROCESSOR, WHITE),
    ("Default", BLACK, WHITE),
    ("Word", KEYWORD, WHITE),
    ("Word2", Color::rgb(128, 0, 255), WHITE),
    ("Comment", COMMENT, WHITE),
    ("CommentLine", COMMENT, WHITE),
    ("CommentDoc", Color::rgb(0, 128, 128), WHITE),
    ("Number", NUMBER, WHITE),
    ("String", DOC_COMMENT, WHITE),
    ("Character", DOC_COMMENT, WHITE),
    ("Uuid", BLACK, WHITE),
    ("Operator", OPERATOR, WHITE),
    ("Identifier", BLACK, WHITE),
    ("StringEol", BLACK, EOL_BACK),
    ("Verbatim", DOC_COMMENT, WHITE),
    ("Regex", Color::rgb(128, 0, 0), WHITE),
    ("CommentLineDoc", Color::rgb(0, 128, 128), WHITE),
    ("CommentDocKeyword", Color::rgb(0, 128, 128), WHITE),
    ("CommentDocKeywordError", ERROR_RED, WHITE),
    ("GlobalClass", Color::rgb(128, 0, 255), WHITE),
];

const XML: &[SlotDef] = &[
    ("Default", BLACK, WHITE),
    ("Tag", STRING, WHITE),
    ("TagUnknown", STRING, WHITE),
    ("Attribute", ERROR_RED, WHITE),
    ("AttributeUnknown", ERROR_RED, WHITE),
    ("Number", BLACK, WHITE),
    ("DoubleString", KEYWORD, WHITE),
    ("SingleString", KEYWORD, WHITE),
    ("Other", BLACK, WHITE),
    ("Comment", COMMENT, WHITE),
    ("Entity", DOC_COMMENT, WHITE),
    ("TagEnd", STRING, WHITE),
    ("XmlStart", KEYWORD, WHITE),
    ("XmlEnd", KEYWORD, WHITE),
    ("CData", DOC_COMMENT, WHITE),
    ("Question", KEYWORD, WHITE),
    ("Value", NUMBER, WHITE),
];

const HTML: &[SlotDef] = &[
    ("Default", BLACK, WHITE),
    ("Tag", STRING, WHITE),
    ("TagUnknown", STRING, WHITE),
    ("Attribute", ERROR_RED, WHITE),
    ("AttributeUnknown", ERROR_RED, WHITE),
    ("Number", NUMBER, WHITE),
    ("DoubleString", KEYWORD, WHITE),
    ("SingleString", KEYWORD, WHITE),
    ("Other", BLACK, WHITE),
    ("Comment", COMMENT, WHITE),
    ("Entity", DOC_COMMENT, WHITE),
    ("TagEnd", STRING, WHITE),
    ("XmlStart", KEYWORD, WHITE),
    ("XmlEnd", KEYWORD, WHITE),
    ("Script", OPERATOR, WHITE),
    ("Asp", BLACK, Color::rgb(255, 255, 0)),
    ("AspAt", BLACK, Color::rgb(255, 255, 0)),
    ("CData", DOC_COMMENT, WHITE),
    ("Question", KEYWORD, WHITE),
    ("Value", NUMBER, WHITE),
    ("JsStart", DOC_COMMENT, WHITE),
    ("JsDefault", BLACK, WHITE),
    ("JsComment", COMMENT, WHITE),
    ("JsCommentLine", COMMENT, WHITE),
    ("JsCommentDoc", Color::rgb(0, 128, 128), WHITE),
    ("JsNumber", NUMBER, WHITE),
    ("JsWord", BLACK, WHITE),
    ("JsKeyword", KEYWORD, WHITE),
    ("JsDoubleString", DOC_COMMENT, WHITE),
    ("JsSingleString", DOC_COMMENT, WHITE),
    ("JsSymbols", OPERATOR, WHITE),
    ("JsStringEol", BLACK, EOL_BACK),
    ("JsRegex", Color::rgb(128, 0, 0), WHITE),
];

const PHP: &[SlotDef] = &[
    ("Default", BLACK, WHITE),
    ("HString", DOC_COMMENT, WHITE),
    ("SimpleString", DOC_COMMENT, WHITE),
    ("Word", KEYWORD, WHITE),
    ("Number", NUMBER, WHITE),
    ("Variable", VARIABLE, WHITE),
    ("Comment", COMMENT, WHITE),
    ("CommentLine", COMMENT, WHITE),
    ("HStringVariable", VARIABLE, WHITE),
    ("Operator", OPERATOR, WHITE),
    ("ComplexVariable", VARIABLE, WHITE),
];

const SQL: &[SlotDef] = &[
    ("Default", BLACK, WHITE),
    ("Comment", COMMENT, WHITE),
    ("CommentLine", COMMENT, WHITE),
    ("CommentDoc", Color::rgb(0, 128, 128), WHITE),
    ("Number", NUMBER, WHITE),
    ("Word", KEYWORD, WHITE),
    ("String", STRING, WHITE),
    ("Character", STRING, WHITE),
    ("SqlPlus", PREPROCESSOR, WHITE),
    ("SqlPlusPrompt", PREPROCESSOR, WHITE),
    ("Operator", BLACK, WHITE),
    ("Identifier", BLACK, WHITE),
    ("SqlPlusComment", COMMENT, WHITE),
    ("CommentLineDoc", COMMENT, WHITE),
    ("Word2", TYPE_NAME, WHITE),
    ("CommentDocKeyword", DOC_COMMENT, WHITE),
    ("CommentDocKeywordError", ERROR_RED, WHITE),
    ("User1", MACRO, WHITE),
    ("User2", MACRO, WHITE),
    ("User3", MACRO, WHITE),
    ("User4", MACRO, WHITE),
    ("QuotedIdentifier", VARIABLE, WHITE),
];

const BATCH: &[SlotDef] = &[
    ("Default", BLACK, WHITE),
    ("Comment", COMMENT, WHITE),
    ("Word", KEYWORD, WHITE),
    ("Label", STRING, WHITE),
    ("Hide", DOC_COMMENT, WHITE),
    ("Command", BLACK, WHITE),
    ("Identifier", VARIABLE, WHITE),
    ("Operator", OPERATOR, WHITE),
];

const PASCAL: &[SlotDef] = &[
    ("Default", BLACK, WHITE),
    ("Identifier", BLACK, WHITE),
    ("Comment", COMMENT, WHITE),
    ("Comment2", COMMENT, WHITE),
    ("CommentLine", COMMENT, WHITE),
    ("Preprocessor", PREPROCESSOR, WHITE),
    ("Preprocessor2", PREPROCESSOR, WHITE),
    ("Number", NUMBER, WHITE),
    ("HexNumber", NUMBER, WHITE),
    ("Word", KEYWORD, WHITE),
    ("String", STRING, WHITE),
    ("StringEol", BLACK, EOL_BACK),
    ("Character", STRING, WHITE),
    ("Operator", BLACK, WHITE),
    ("Asm", MACRO, WHITE),
];

const POWERSHELL: &[SlotDef] = &[
    ("Default", BLACK, WHITE),
    ("Comment", COMMENT, WHITE),
    ("String", STRING, WHITE),
    ("Character", STRING, WHITE),
    ("Number", NUMBER, WHITE),
    ("Variable", VARIABLE, WHITE),
    ("Operator", OPERATOR, WHITE),
    ("Identifier", BLACK, WHITE),
    ("Keyword", KEYWORD, WHITE),
    ("Cmdlet", TYPE_NAME, WHITE),
    ("Alias", Color::rgb(128, 0, 255), WHITE),
    ("Function", PREPROCESSOR, WHITE),
    ("User1", MACRO, WHITE),
    ("CommentStream", COMMENT, WHITE),
    ("HereString", STRING, WHITE),
    ("HereCharacter", STRING, WHITE),
    ("CommentDocKeyword", DOC_COMMENT, WHITE),
];

const INI: &[SlotDef] = &[
    ("Default", BLACK, WHITE),
    ("Comment", COMMENT, WHITE),
    ("Section", MACRO, WHITE),
    ("Assignment", ERROR_RED, WHITE),
    ("DefVal", NUMBER, WHITE),
    ("Key", OPERATOR, WHITE),
];

const PYTHON: &[SlotDef] = &[
    ("Default", BLACK, WHITE),
    ("CommentLine", COMMENT, WHITE),
    ("Number", NUMBER, WHITE),
    ("String", STRING, WHITE),
    ("Character", STRING, WHITE),
    ("Word", KEYWORD, WHITE),
    ("Triple", DOC_COMMENT, WHITE),
    ("TripleDouble", DOC_COMMENT, WHITE),
    ("ClassName", TYPE_NAME, WHITE),
    ("DefName", VARIABLE, WHITE),
    ("Operator", BLACK, WHITE),
    ("Identifier", BLACK, WHITE),
    ("CommentBlock", DOC_COMMENT, WHITE),
    ("StringEol", BLACK, EOL_BACK),
    ("Word2", TYPE_NAME, WHITE),
    ("Decorator", PREPROCESSOR, WHITE),
];

const NSIS: &[SlotDef] = &[
    ("Default", BLACK, WHITE),
    ("Comment", COMMENT, WHITE),
    ("StringDq", STRING, WHITE),
    ("StringLq", STRING, WHITE),
    ("StringRq", STRING, WHITE),
    ("Function", KEYWORD, WHITE),
    ("Variable", VARIABLE, WHITE),
    ("Label", STRING, WHITE),
    ("UserDefined", MACRO, WHITE),
    ("SectionDef", OPERATOR, WHITE),
    ("SubSectionDef", OPERATOR, WHITE),
    ("IfDef", PREPROCESSOR, WHITE),
    ("MacroDef", MACRO, WHITE),
    ("StringVar", VARIABLE, WHITE),
    ("Number", NUMBER, WHITE),
    ("SectionGroup", OPERATOR, WHITE),
    ("PageEx", OPERATOR, WHITE),
    ("FunctionDef", KEYWORD, WHITE),
    ("CommentBox", COMMENT, WHITE),
];

/// The default slot table for a language, or `None` for languages without a
/// wired configuration (their registry table does not exist).
pub(super) fn language_defaults(language: LanguageId) -> Option<&'static [SlotDef]> {
    match language {
        LanguageId::PlainText => Some(PLAIN_TEXT),
        LanguageId::Cs => Some(CS),
        LanguageId::Cpp => Some(CPP),
        LanguageId::Xml => Some(XML),
        LanguageId::Html => Some(HTML),
        LanguageId::Sql => Some(SQL),
        LanguageId::Batch => Some(BATCH),
        LanguageId::Pascal => Some(PASCAL),
        LanguageId::Php => Some(PHP),
        LanguageId::PowerShell => Some(POWERSHELL),
        LanguageId::Ini => Some(INI),
        LanguageId::Python => Some(PYTHON),
        LanguageId::Nsis => Some(NSIS),
        LanguageId::InnoSetup | LanguageId::Yaml => None,
    }
}
