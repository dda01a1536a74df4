use crate::color::{Color, ColorPair};
use crate::error::RegistryError;
use crate::language::LanguageId;
use crate::registry::{ChannelAttrs, ColorRegistry};

fn registry_with_marker_color() -> ColorRegistry {
    let mut registry = ColorRegistry::new();
    registry
        .set_pair(
            LanguageId::Cs,
            "Comment",
            ColorPair::new(Color::rgba(10, 20, 30, 40), Color::rgb(250, 240, 230)),
        )
        .unwrap();
    registry
}

#[test]
fn export_writes_root_and_one_element_per_color_value() {
    let registry = ColorRegistry::new();
    let doc = registry.export_xml(LanguageId::Ini).unwrap();

    assert!(doc.contains(r#"<Colors Lexer="INI settings">"#));
    for name in registry.slot_names(LanguageId::Ini) {
        assert!(doc.contains(&format!(r#"Name="{name}Fore""#)), "{name}");
        assert!(doc.contains(&format!(r#"Name="{name}Back""#)), "{name}");
    }
}

#[test]
fn legacy_export_duplicates_the_red_channel_into_g_b_a() {
    let registry = registry_with_marker_color();
    let doc = registry
        .export_xml_with(LanguageId::Cs, ChannelAttrs::Legacy)
        .unwrap();

    assert!(doc.contains(
        r#"<Color Name="CommentFore" R="0A" G="0A" B="0A" A="0A" HexARGB="280A141E"/>"#
    ));
}

#[test]
fn per_channel_export_writes_each_channel() {
    let registry = registry_with_marker_color();
    let doc = registry
        .export_xml_with(LanguageId::Cs, ChannelAttrs::PerChannel)
        .unwrap();

    assert!(doc.contains(
        r#"<Color Name="CommentFore" R="0A" G="14" B="1E" A="28" HexARGB="280A141E"/>"#
    ));
}

#[test]
fn round_trip_restores_the_table_in_both_modes() {
    for mode in [ChannelAttrs::Legacy, ChannelAttrs::PerChannel] {
        let mut source = ColorRegistry::new();
        let len = source.table(LanguageId::Xml).len();
        let values: Vec<Color> = (0..len as u8)
            .map(|i| Color::rgba(i, i.wrapping_mul(3), i.wrapping_mul(7), 255 - i))
            .collect();
        source.set_table(LanguageId::Xml, &values).unwrap();

        let doc = source.export_xml_with(LanguageId::Xml, mode).unwrap();
        let mut target = ColorRegistry::new();
        target.import_xml(&doc, LanguageId::Xml).unwrap();

        assert_eq!(target.table(LanguageId::Xml), values, "{mode:?}");
    }
}

#[test]
fn import_reads_hex_argb_and_ignores_channel_attrs() {
    let doc = r#"<Colors Lexer="C#">
  <Color Name="WordFore" R="FF" G="FF" B="FF" A="FF" HexARGB="FF102030"/>
</Colors>"#;

    let mut registry = ColorRegistry::new();
    registry.import_xml(doc, LanguageId::Cs).unwrap();
    assert_eq!(
        registry.fore(LanguageId::Cs, "Word").unwrap(),
        Color::rgb(0x10, 0x20, 0x30)
    );
}

#[test]
fn import_leaves_unlisted_slots_alone() {
    let mut registry = ColorRegistry::new();
    let number_before = registry.pair(LanguageId::Cs, "Number").unwrap();

    let doc = r#"<Colors Lexer="C#"><Color Name="WordBack" HexARGB="FF111111"/></Colors>"#;
    registry.import_xml(doc, LanguageId::Cs).unwrap();

    assert_eq!(registry.pair(LanguageId::Cs, "Number").unwrap(), number_before);
    assert_eq!(
        registry.back(LanguageId::Cs, "Word").unwrap(),
        Color::rgb(0x11, 0x11, 0x11)
    );
}

#[test]
fn failed_import_leaves_the_registry_untouched() {
    let mut registry = ColorRegistry::new();
    let before = registry.table(LanguageId::Cs);

    // The first element parses fine; the second aborts the import.
    let doc = r#"<Colors Lexer="C#">
  <Color Name="WordFore" HexARGB="FF112233"/>
  <Color Name="CommentFore" HexARGB="nothex!!"/>
</Colors>"#;

    let err = registry.import_xml(doc, LanguageId::Cs).unwrap_err();
    assert!(matches!(err, RegistryError::BadColor { .. }), "{err}");
    assert_eq!(registry.table(LanguageId::Cs), before);
}

#[test]
fn import_rejects_unknown_slot_names() {
    let mut registry = ColorRegistry::new();
    for doc in [
        r#"<Colors><Color Name="NoSuchSlotFore" HexARGB="FF000000"/></Colors>"#,
        r#"<Colors><Color Name="Word" HexARGB="FF000000"/></Colors>"#,
    ] {
        let err = registry.import_xml(doc, LanguageId::Cs).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownSlot { .. }), "{err}");
    }
}

#[test]
fn import_rejects_missing_attributes_and_short_hex() {
    let mut registry = ColorRegistry::new();

    let err = registry
        .import_xml(r#"<Colors><Color Name="WordFore"/></Colors>"#, LanguageId::Cs)
        .unwrap_err();
    assert!(matches!(err, RegistryError::MissingAttr { attr: "HexARGB" }), "{err}");

    let err = registry
        .import_xml(
            r#"<Colors><Color Name="WordFore" HexARGB="112233"/></Colors>"#,
            LanguageId::Cs,
        )
        .unwrap_err();
    assert!(matches!(err, RegistryError::BadColor { .. }), "{err}");
}

#[test]
fn xml_operations_fail_for_unwired_languages() {
    let mut registry = ColorRegistry::new();
    let err = registry.export_xml(LanguageId::Yaml).unwrap_err();
    assert!(matches!(err, RegistryError::NoTable { .. }), "{err}");

    let err = registry
        .import_xml("<Colors/>", LanguageId::InnoSetup)
        .unwrap_err();
    assert!(matches!(err, RegistryError::NoTable { .. }), "{err}");
}

#[test]
fn file_round_trip_through_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colors.xml");

    let mut source = ColorRegistry::new();
    source
        .set_pair(
            LanguageId::Sql,
            "Word",
            ColorPair::new(Color::rgb(9, 8, 7), Color::rgb(6, 5, 4)),
        )
        .unwrap();
    assert!(source.save_xml_file(LanguageId::Sql, &path));

    let mut target = ColorRegistry::new();
    assert!(target.load_xml_file(LanguageId::Sql, &path));
    assert_eq!(target.table(LanguageId::Sql), source.table(LanguageId::Sql));
}

#[test]
fn load_returns_false_for_missing_or_malformed_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = ColorRegistry::new();

    assert!(!registry.load_xml_file(LanguageId::Cs, &dir.path().join("absent.xml")));

    let path = dir.path().join("broken.xml");
    std::fs::write(&path, "<Colors><Color Name=").unwrap();
    assert!(!registry.load_xml_file(LanguageId::Cs, &path));
}
