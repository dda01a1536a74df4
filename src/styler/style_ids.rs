//! Style-id numbering of the external lexer component, grouped per lexer.

pub(super) mod c {
    pub const DEFAULT: u32 = 0;
    pub const COMMENT: u32 = 1;
    pub const COMMENT_LINE: u32 = 2;
    pub const COMMENT_DOC: u32 = 3;
    pub const NUMBER: u32 = 4;
    pub const WORD: u32 = 5;
    pub const STRING: u32 = 6;
    pub const CHARACTER: u32 = 7;
    pub const UUID: u32 = 8;
    pub const PREPROCESSOR: u32 = 9;
    pub const OPERATOR: u32 = 10;
    pub const IDENTIFIER: u32 = 11;
    pub const STRING_EOL: u32 = 12;
    pub const VERBATIM: u32 = 13;
    pub const REGEX: u32 = 14;
    pub const COMMENT_LINE_DOC: u32 = 15;
    pub const WORD2: u32 = 16;
    pub const COMMENT_DOC_KEYWORD: u32 = 17;
    pub const COMMENT_DOC_KEYWORD_ERROR: u32 = 18;
    pub const GLOBAL_CLASS: u32 = 19;
}

pub(super) mod hypertext {
    pub const DEFAULT: u32 = 0;
    pub const TAG: u32 = 1;
    pub const TAG_UNKNOWN: u32 = 2;
    pub const ATTRIBUTE: u32 = 3;
    pub const ATTRIBUTE_UNKNOWN: u32 = 4;
    pub const NUMBER: u32 = 5;
    pub const DOUBLE_STRING: u32 = 6;
    pub const SINGLE_STRING: u32 = 7;
    pub const OTHER: u32 = 8;
    pub const COMMENT: u32 = 9;
    pub const ENTITY: u32 = 10;
    pub const TAG_END: u32 = 11;
    pub const XML_START: u32 = 12;
    pub const XML_END: u32 = 13;
    pub const SCRIPT: u32 = 14;
    pub const ASP: u32 = 15;
    pub const ASP_AT: u32 = 16;
    pub const CDATA: u32 = 17;
    pub const QUESTION: u32 = 18;
    pub const VALUE: u32 = 19;

    // Embedded JavaScript block.
    pub const J_START: u32 = 40;
    pub const J_DEFAULT: u32 = 41;
    pub const J_COMMENT: u32 = 42;
    pub const J_COMMENT_LINE: u32 = 43;
    pub const J_COMMENT_DOC: u32 = 44;
    pub const J_NUMBER: u32 = 45;
    pub const J_WORD: u32 = 46;
    pub const J_KEYWORD: u32 = 47;
    pub const J_DOUBLE_STRING: u32 = 48;
    pub const J_SINGLE_STRING: u32 = 49;
    pub const J_SYMBOLS: u32 = 50;
    pub const J_STRING_EOL: u32 = 51;
    pub const J_REGEX: u32 = 52;

    // PHP block.
    pub const PHP_COMPLEX_VARIABLE: u32 = 104;
    pub const PHP_DEFAULT: u32 = 118;
    pub const PHP_HSTRING: u32 = 119;
    pub const PHP_SIMPLE_STRING: u32 = 120;
    pub const PHP_WORD: u32 = 121;
    pub const PHP_NUMBER: u32 = 122;
    pub const PHP_VARIABLE: u32 = 123;
    pub const PHP_COMMENT: u32 = 124;
    pub const PHP_COMMENT_LINE: u32 = 125;
    pub const PHP_HSTRING_VARIABLE: u32 = 126;
    pub const PHP_OPERATOR: u32 = 127;
}

pub(super) mod sql {
    pub const DEFAULT: u32 = 0;
    pub const COMMENT: u32 = 1;
    pub const COMMENT_LINE: u32 = 2;
    pub const COMMENT_DOC: u32 = 3;
    pub const NUMBER: u32 = 4;
    pub const WORD: u32 = 5;
    pub const STRING: u32 = 6;
    pub const CHARACTER: u32 = 7;
    pub const SQLPLUS: u32 = 8;
    pub const SQLPLUS_PROMPT: u32 = 9;
    pub const OPERATOR: u32 = 10;
    pub const IDENTIFIER: u32 = 11;
    pub const SQLPLUS_COMMENT: u32 = 13;
    pub const COMMENT_LINE_DOC: u32 = 15;
    pub const WORD2: u32 = 16;
    pub const COMMENT_DOC_KEYWORD: u32 = 17;
    pub const COMMENT_DOC_KEYWORD_ERROR: u32 = 18;
    pub const USER1: u32 = 19;
    pub const USER2: u32 = 20;
    pub const USER3: u32 = 21;
    pub const USER4: u32 = 22;
    pub const QUOTED_IDENTIFIER: u32 = 23;
}

pub(super) mod batch {
    pub const DEFAULT: u32 = 0;
    pub const COMMENT: u32 = 1;
    pub const WORD: u32 = 2;
    pub const LABEL: u32 = 3;
    pub const HIDE: u32 = 4;
    pub const COMMAND: u32 = 5;
    pub const IDENTIFIER: u32 = 6;
    pub const OPERATOR: u32 = 7;
}

pub(super) mod pascal {
    pub const DEFAULT: u32 = 0;
    pub const IDENTIFIER: u32 = 1;
    pub const COMMENT: u32 = 2;
    pub const COMMENT2: u32 = 3;
    pub const COMMENT_LINE: u32 = 4;
    pub const PREPROCESSOR: u32 = 5;
    pub const PREPROCESSOR2: u32 = 6;
    pub const NUMBER: u32 = 7;
    pub const HEX_NUMBER: u32 = 8;
    pub const WORD: u32 = 9;
    pub const STRING: u32 = 10;
    pub const STRING_EOL: u32 = 11;
    pub const CHARACTER: u32 = 12;
    pub const OPERATOR: u32 = 13;
    pub const ASM: u32 = 14;
}

pub(super) mod powershell {
    pub const DEFAULT: u32 = 0;
    pub const COMMENT: u32 = 1;
    pub const STRING: u32 = 2;
    pub const CHARACTER: u32 = 3;
    pub const NUMBER: u32 = 4;
    pub const VARIABLE: u32 = 5;
    pub const OPERATOR: u32 = 6;
    pub const IDENTIFIER: u32 = 7;
    pub const KEYWORD: u32 = 8;
    pub const CMDLET: u32 = 9;
    pub const ALIAS: u32 = 10;
    pub const FUNCTION: u32 = 11;
    pub const USER1: u32 = 12;
    pub const COMMENT_STREAM: u32 = 13;
    pub const HERE_STRING: u32 = 14;
    pub const HERE_CHARACTER: u32 = 15;
    pub const COMMENT_DOC_KEYWORD: u32 = 16;
}

pub(super) mod props {
    pub const DEFAULT: u32 = 0;
    pub const COMMENT: u32 = 1;
    pub const SECTION: u32 = 2;
    pub const ASSIGNMENT: u32 = 3;
    pub const DEF_VAL: u32 = 4;
    pub const KEY: u32 = 5;
}

pub(super) mod python {
    pub const DEFAULT: u32 = 0;
    pub const COMMENT_LINE: u32 = 1;
    pub const NUMBER: u32 = 2;
    pub const STRING: u32 = 3;
    pub const CHARACTER: u32 = 4;
    pub const WORD: u32 = 5;
    pub const TRIPLE: u32 = 6;
    pub const TRIPLE_DOUBLE: u32 = 7;
    pub const CLASS_NAME: u32 = 8;
    pub const DEF_NAME: u32 = 9;
    pub const OPERATOR: u32 = 10;
    pub const IDENTIFIER: u32 = 11;
    pub const COMMENT_BLOCK: u32 = 12;
    pub const STRING_EOL: u32 = 13;
    pub const WORD2: u32 = 14;
    pub const DECORATOR: u32 = 15;
}

pub(super) mod nsis {
    pub const DEFAULT: u32 = 0;
    pub const COMMENT: u32 = 1;
    pub const STRING_DQ: u32 = 2;
    pub const STRING_LQ: u32 = 3;
    pub const STRING_RQ: u32 = 4;
    pub const FUNCTION: u32 = 5;
    pub const VARIABLE: u32 = 6;
    pub const LABEL: u32 = 7;
    pub const USER_DEFINED: u32 = 8;
    pub const SECTION_DEF: u32 = 9;
    pub const SUB_SECTION_DEF: u32 = 10;
    pub const IF_DEFINE_DEF: u32 = 11;
    pub const MACRO_DEF: u32 = 12;
    pub const STRING_VAR: u32 = 13;
    pub const NUMBER: u32 = 14;
    pub const SECTION_GROUP: u32 = 15;
    pub const PAGE_EX: u32 = 16;
    pub const FUNCTION_DEF: u32 = 17;
    pub const COMMENT_BOX: u32 = 18;
}
