use super::*;
use crate::color::Color;
use crate::language::LanguageId;
use crate::styler::sink::{RecordingSink, STYLE_DEFAULT};

const STYLERS: &str = r#"<NotepadPlus>
    <LexerStyles>
        <LexerType name="cs" desc="C#" ext="cs">
            <WordsStyle name="DEFAULT" styleID="11" fgColor="000000" bgColor="FFFFFF" fontName="" fontStyle="0" fontSize=""/>
            <WordsStyle name="INSTRUCTION WORD" styleID="5" fgColor="0000FF" bgColor="FFFFFF" fontName="" fontStyle="1" fontSize="" keywordClass="instre1">while for if else switch</WordsStyle>
            <WordsStyle name="COMMENT" styleID="1" fgColor="008000" bgColor="FFFFFF" fontName="Consolas" fontStyle="0" fontSize="10"/>
        </LexerType>
        <LexerType name="cpp" desc="C++" ext="cpp">
            <WordsStyle name="COMMENT" styleID="1" fgColor="FF0000" bgColor="FFFFFF"/>
        </LexerType>
    </LexerStyles>
    <GlobalStyles>
        <WidgetStyle name="Global override" styleID="0" fgColor="101010" bgColor="FEFEFE"/>
        <WidgetStyle name="Default Style" styleID="32" fgColor="202020" bgColor="FDFDFD" fontName="Courier New" fontStyle="0" fontSize="10"/>
    </GlobalStyles>
</NotepadPlus>"#;

fn write_stylers(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("stylers.xml");
    std::fs::write(&path, STYLERS).unwrap();
    path
}

#[test]
fn applies_global_default_and_lexer_styles() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_stylers(&dir);
    let mut sink = RecordingSink::new();

    assert!(apply_definition_file(&mut sink, LanguageId::Cs, &path, false, false));

    assert_eq!(sink.lexer.as_deref(), Some("cpp"));
    assert_eq!(
        sink.fores.get(&STYLE_DEFAULT),
        Some(&Color::rgb(0x20, 0x20, 0x20))
    );
    assert_eq!(sink.fores.get(&5), Some(&Color::rgb(0, 0, 0xFF)));
    // The cpp section must not bleed into the cs configuration.
    assert_eq!(sink.fores.get(&1), Some(&Color::rgb(0, 0x80, 0)));
    assert_eq!(sink.keywords.get(&0).map(String::as_str), Some("while for if else switch"));
    assert!(sink.fold_margin.is_some());
}

#[test]
fn global_override_replaces_the_default_colors_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_stylers(&dir);

    let mut sink = RecordingSink::new();
    assert!(apply_definition_file(&mut sink, LanguageId::Cs, &path, true, false));
    assert_eq!(
        sink.fores.get(&STYLE_DEFAULT),
        Some(&Color::rgb(0x10, 0x10, 0x10))
    );
    assert_eq!(
        sink.backs.get(&STYLE_DEFAULT),
        Some(&Color::rgb(0xFE, 0xFE, 0xFE))
    );
}

#[test]
fn fonts_are_applied_only_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_stylers(&dir);

    let mut sink = RecordingSink::new();
    assert!(apply_definition_file(&mut sink, LanguageId::Cs, &path, false, false));
    assert!(sink.fonts.is_empty());

    let mut sink = RecordingSink::new();
    assert!(apply_definition_file(&mut sink, LanguageId::Cs, &path, false, true));
    assert_eq!(
        sink.fonts.get(&1),
        Some(&("Consolas".to_string(), 10))
    );
    assert_eq!(
        sink.fonts.get(&STYLE_DEFAULT),
        Some(&("Courier New".to_string(), 10))
    );
}

#[test]
fn unmapped_languages_return_false_without_touching_the_sink() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_stylers(&dir);

    for language in [LanguageId::Cpp, LanguageId::Sql, LanguageId::Yaml] {
        let mut sink = RecordingSink::new();
        assert!(!apply_definition_file(&mut sink, language, &path, false, false));
        assert!(sink.is_untouched(), "{language:?}");
    }
}

#[test]
fn missing_and_malformed_files_return_false() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = RecordingSink::new();

    assert!(!apply_definition_file(
        &mut sink,
        LanguageId::Cs,
        &dir.path().join("absent.xml"),
        false,
        false
    ));

    let path = dir.path().join("broken.xml");
    std::fs::write(&path, "<NotepadPlus><LexerStyles></Wrong></NotepadPlus>").unwrap();
    assert!(!apply_definition_file(&mut sink, LanguageId::Cs, &path, false, false));

    let path = dir.path().join("badstyle.xml");
    std::fs::write(
        &path,
        r#"<NotepadPlus><GlobalStyles><WidgetStyle name="Default Style" styleID="nope"/></GlobalStyles></NotepadPlus>"#,
    )
    .unwrap();
    assert!(!apply_definition_file(&mut sink, LanguageId::Cs, &path, false, false));
}
