use super::*;
use std::path::Path;

#[test]
fn from_path_maps_all_supported_extensions() {
    let cases = [
        ("a.cs", Some(LanguageId::Cs)),
        ("a.cpp", Some(LanguageId::Cpp)),
        ("a.c", Some(LanguageId::Cpp)),
        ("a.cc", Some(LanguageId::Cpp)),
        ("a.h", Some(LanguageId::Cpp)),
        ("a.hpp", Some(LanguageId::Cpp)),
        ("a.xml", Some(LanguageId::Xml)),
        ("a.xsl", Some(LanguageId::Xml)),
        ("a.svg", Some(LanguageId::Xml)),
        ("a.csproj", Some(LanguageId::Xml)),
        ("a.html", Some(LanguageId::Html)),
        ("a.htm", Some(LanguageId::Html)),
        ("a.sql", Some(LanguageId::Sql)),
        ("a.bat", Some(LanguageId::Batch)),
        ("a.cmd", Some(LanguageId::Batch)),
        ("a.pas", Some(LanguageId::Pascal)),
        ("a.dpr", Some(LanguageId::Pascal)),
        ("a.php", Some(LanguageId::Php)),
        ("a.phtml", Some(LanguageId::Php)),
        ("a.ps1", Some(LanguageId::PowerShell)),
        ("a.psm1", Some(LanguageId::PowerShell)),
        ("a.ini", Some(LanguageId::Ini)),
        ("a.reg", Some(LanguageId::Ini)),
        ("a.py", Some(LanguageId::Python)),
        ("a.pyw", Some(LanguageId::Python)),
        ("a.nsi", Some(LanguageId::Nsis)),
        ("a.nsh", Some(LanguageId::Nsis)),
        ("a.iss", Some(LanguageId::InnoSetup)),
        ("a.yml", Some(LanguageId::Yaml)),
        ("a.yaml", Some(LanguageId::Yaml)),
        ("a.txt", Some(LanguageId::PlainText)),
        ("a.log", Some(LanguageId::PlainText)),
        ("a.unknownext", None),
        ("noextension", None),
    ];

    for (path, expected) in cases {
        assert_eq!(LanguageId::from_path(Path::new(path)), expected, "{path}");
    }
}

#[test]
fn from_path_is_case_insensitive() {
    for (upper, lower) in [("a.CS", "a.cs"), ("a.SQL", "a.sql"), ("a.Html", "a.html")] {
        assert_eq!(
            LanguageId::from_path(Path::new(upper)),
            LanguageId::from_path(Path::new(lower)),
        );
        assert!(LanguageId::from_path(Path::new(upper)).is_some());
    }
}

#[test]
fn every_language_has_a_lexer_name_and_display_name() {
    for language in LanguageId::ALL {
        assert!(!language.lexer_name().is_empty());
        assert!(!language.display_name().is_empty());
    }
}

#[test]
fn cs_runs_on_the_cpp_lexer() {
    assert_eq!(LanguageId::Cs.lexer_name(), "cpp");
    assert_eq!(LanguageId::PlainText.lexer_name(), "null");
    assert_eq!(LanguageId::Html.lexer_name(), "hypertext");
}
