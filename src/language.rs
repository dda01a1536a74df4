use std::path::Path;

/// A lexer language the widget can be configured for. Closed set.
///
/// `InnoSetup` and `Yaml` are recognized by the extension mapper but have no
/// configuration routine wired yet; `configure` reports them as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LanguageId {
    PlainText,
    Cs,
    Cpp,
    Xml,
    Html,
    Sql,
    Batch,
    Pascal,
    Php,
    PowerShell,
    Ini,
    Python,
    Nsis,
    InnoSetup,
    Yaml,
}

/// Extension lists per language. Declaration order is the match priority;
/// the first list containing the extension wins.
const EXTENSIONS: &[(LanguageId, &[&str])] = &[
    (LanguageId::Cs, &["cs"]),
    (
        LanguageId::Cpp,
        &["cpp", "c", "cc", "cxx", "c++", "h", "hh", "hpp", "hxx", "h++"],
    ),
    (
        LanguageId::Xml,
        &["xml", "xsl", "xslt", "xsd", "svg", "wsdl", "csproj", "config"],
    ),
    (LanguageId::Html, &["html", "htm", "xhtml", "shtml"]),
    (LanguageId::Sql, &["sql"]),
    (LanguageId::Batch, &["bat", "cmd", "nt"]),
    (LanguageId::Pascal, &["pas", "dpr", "dpk", "inc"]),
    (
        LanguageId::Php,
        &["php", "php3", "php4", "php5", "phtml"],
    ),
    (LanguageId::PowerShell, &["ps1", "psm1", "psd1"]),
    (LanguageId::Ini, &["ini", "inf", "reg", "url"]),
    (LanguageId::Python, &["py", "pyw"]),
    (LanguageId::Nsis, &["nsi", "nsh"]),
    (LanguageId::InnoSetup, &["iss"]),
    (LanguageId::Yaml, &["yml", "yaml"]),
    (LanguageId::PlainText, &["txt", "log"]),
];

impl LanguageId {
    pub const ALL: [Self; 15] = [
        Self::PlainText,
        Self::Cs,
        Self::Cpp,
        Self::Xml,
        Self::Html,
        Self::Sql,
        Self::Batch,
        Self::Pascal,
        Self::Php,
        Self::PowerShell,
        Self::Ini,
        Self::Python,
        Self::Nsis,
        Self::InnoSetup,
        Self::Yaml,
    ];

    /// Maps a file extension to a language, case-insensitively.
    /// `None` means no language claims the extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        EXTENSIONS
            .iter()
            .find(|(_, exts)| exts.contains(&ext.as_str()))
            .map(|(language, _)| *language)
    }

    /// The lexer identifier string handed to the widget.
    pub fn lexer_name(self) -> &'static str {
        match self {
            Self::PlainText => "null",
            Self::Cs => "cpp",
            Self::Cpp => "cpp",
            Self::Xml => "xml",
            Self::Html => "hypertext",
            Self::Sql => "sql",
            Self::Batch => "batch",
            Self::Pascal => "pascal",
            Self::Php => "phpscript",
            Self::PowerShell => "powershell",
            Self::Ini => "props",
            Self::Python => "python",
            Self::Nsis => "nsis",
            Self::InnoSetup => "inno",
            Self::Yaml => "yaml",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::PlainText => "Plain text",
            Self::Cs => "C#",
            Self::Cpp => "C/C++",
            Self::Xml => "XML",
            Self::Html => "HTML",
            Self::Sql => "SQL",
            Self::Batch => "Batch file",
            Self::Pascal => "Pascal",
            Self::Php => "PHP",
            Self::PowerShell => "Windows PowerShell",
            Self::Ini => "INI settings",
            Self::Python => "Python",
            Self::Nsis => "NSIS",
            Self::InnoSetup => "Inno Setup",
            Self::Yaml => "YAML",
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/language.rs"]
mod tests;
