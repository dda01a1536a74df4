use super::sink::{RecordingSink, STYLE_DEFAULT};
use super::*;
use crate::color::{Color, ColorPair};
use crate::registry::ColorRegistry;

fn wired() -> Vec<LanguageId> {
    LanguageId::ALL
        .into_iter()
        .filter(|language| routine(*language).is_some())
        .collect()
}

#[test]
fn configure_supports_every_wired_language() {
    let colors = ColorRegistry::new();
    for language in wired() {
        let mut sink = RecordingSink::new();
        assert!(configure(&mut sink, &colors, language), "{language:?}");
        assert_eq!(sink.resets, 1, "{language:?}");
        assert_eq!(sink.lexer.as_deref(), Some(language.lexer_name()));
        assert!(!sink.fores.is_empty(), "{language:?}");
    }
}

#[test]
fn configure_reports_unwired_languages_and_leaves_the_sink_alone() {
    let colors = ColorRegistry::new();
    for language in [LanguageId::InnoSetup, LanguageId::Yaml] {
        let mut sink = RecordingSink::new();
        assert!(!configure(&mut sink, &colors, language));
        assert!(sink.is_untouched(), "{language:?}");
    }
}

#[test]
fn style_tables_stay_aligned_with_registry_slots() {
    let colors = ColorRegistry::new();
    for language in wired() {
        let mut table_names: Vec<&str> =
            style_table(language).iter().map(|&(_, name)| name).collect();
        let mut slot_names = colors.slot_names(language);
        table_names.sort_unstable();
        slot_names.sort_unstable();
        assert_eq!(table_names, slot_names, "{language:?}");
    }
}

#[test]
fn style_ids_are_unique_within_a_table() {
    for language in wired() {
        let table = style_table(language);
        for (i, &(style, _)) in table.iter().enumerate() {
            for &(other, _) in &table[i + 1..] {
                assert_ne!(style, other, "{language:?} reuses style id {style}");
            }
        }
    }
}

#[test]
fn markup_styles_carry_registry_colors_in_ordinal_order() {
    let colors = ColorRegistry::new();
    let mut sink = RecordingSink::new();
    assert!(configure(&mut sink, &colors, LanguageId::Xml));

    for &(style, slot) in style_table(LanguageId::Xml) {
        let pair = colors.pair(LanguageId::Xml, slot).unwrap();
        assert_eq!(sink.fores.get(&style), Some(&pair.fore), "{slot}");
        assert_eq!(sink.backs.get(&style), Some(&pair.back), "{slot}");
    }
}

#[test]
fn configure_reflects_registry_mutations() {
    let mut colors = ColorRegistry::new();
    let loud = ColorPair::new(Color::rgb(1, 2, 3), Color::rgb(4, 5, 6));
    colors.set_pair(LanguageId::Sql, "Word", loud).unwrap();

    let mut sink = RecordingSink::new();
    assert!(configure(&mut sink, &colors, LanguageId::Sql));

    let style = style_table(LanguageId::Sql)
        .iter()
        .find(|&&(_, name)| name == "Word")
        .map(|&(style, _)| style)
        .unwrap();
    assert_eq!(sink.fores.get(&style), Some(&loud.fore));
    assert_eq!(sink.backs.get(&style), Some(&loud.back));
}

#[test]
fn configure_is_idempotent() {
    let colors = ColorRegistry::new();
    let mut first = RecordingSink::new();
    configure(&mut first, &colors, LanguageId::Cpp);

    let mut second = RecordingSink::new();
    configure(&mut second, &colors, LanguageId::Cpp);
    configure(&mut second, &colors, LanguageId::Cpp);

    assert_eq!(first.fores, second.fores);
    assert_eq!(first.backs, second.backs);
    assert_eq!(first.keywords, second.keywords);
    assert_eq!(first.lexer, second.lexer);
    assert_eq!(first.fold_margin, second.fold_margin);
}

#[test]
fn default_style_is_seeded_from_the_default_slot() {
    let colors = ColorRegistry::new();
    for language in wired() {
        let mut sink = RecordingSink::new();
        configure(&mut sink, &colors, language);
        let pair = colors.pair(language, "Default").unwrap();
        assert_eq!(sink.fores.get(&STYLE_DEFAULT), Some(&pair.fore), "{language:?}");
    }
}

#[test]
fn keyword_groups_are_installed() {
    let colors = ColorRegistry::new();
    let mut sink = RecordingSink::new();
    configure(&mut sink, &colors, LanguageId::Cpp);

    assert!(sink.keywords[&0].contains("constexpr"));
    assert!(sink.keywords[&1].contains("size_t"));

    let mut sink = RecordingSink::new();
    configure(&mut sink, &colors, LanguageId::Xml);
    assert!(sink.keywords.is_empty());
}

#[test]
fn php_layers_markup_base_over_its_own_styles() {
    let colors = ColorRegistry::new();
    let mut sink = RecordingSink::new();
    assert!(configure(&mut sink, &colors, LanguageId::Php));

    // Host styles from the PHP table.
    let word = colors.fore(LanguageId::Php, "Word").unwrap();
    assert_eq!(sink.fores.get(&style_ids::hypertext::PHP_WORD), Some(&word));

    // Markup base re-applied from the HTML table.
    let tag = colors.fore(LanguageId::Html, "Tag").unwrap();
    assert_eq!(sink.fores.get(&style_ids::hypertext::TAG), Some(&tag));

    // The embedded keyword list lands in the PHP set.
    assert!(sink.keywords[&4].contains("elseif"));
    assert!(sink.keywords[&0].contains("body"));
}

#[test]
fn html_applies_the_embedded_script_styles() {
    let colors = ColorRegistry::new();
    let mut sink = RecordingSink::new();
    assert!(configure(&mut sink, &colors, LanguageId::Html));

    let keyword = colors.fore(LanguageId::Html, "JsKeyword").unwrap();
    assert_eq!(
        sink.fores.get(&style_ids::hypertext::J_KEYWORD),
        Some(&keyword)
    );
    assert!(sink.keywords[&1].contains("typeof"));
}

#[test]
fn folding_margin_and_markers_are_configured() {
    let colors = ColorRegistry::new();
    let mut sink = RecordingSink::new();
    configure(&mut sink, &colors, LanguageId::Cpp);

    let margin = sink.fold_margin.unwrap();
    assert_eq!(margin.width, 16);
    assert_eq!(margin.mask, 0xFE00_0000);
    assert!(margin.sensitive);
    assert_eq!(sink.markers.len(), 7);
    assert!(sink
        .properties
        .iter()
        .any(|(name, value)| name == "fold" && value == "1"));
    assert!(sink
        .properties
        .iter()
        .any(|(name, _)| name == "fold.preprocessor"));
}

#[test]
fn plain_text_gets_the_null_lexer_without_folding() {
    let colors = ColorRegistry::new();
    let mut sink = RecordingSink::new();
    assert!(configure(&mut sink, &colors, LanguageId::PlainText));

    assert_eq!(sink.lexer.as_deref(), Some("null"));
    assert!(sink.fold_margin.is_none());
    assert!(sink.keywords.is_empty());
}
