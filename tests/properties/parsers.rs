//! Property tests for option set and config parsing.

use proptest::prelude::*;

use tree_multiselect::{parse_option_set, OptionSetFormat, PickerConfig, TreeMultiselect};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_option_set` never panics on arbitrary TOML input.
    #[test]
    fn property_parse_toml_never_panics(content in "(?s).{0,256}") {
        let _ = parse_option_set(&content, OptionSetFormat::Toml);
    }

    /// PROPERTY: `parse_option_set` never panics on arbitrary JSON input.
    #[test]
    fn property_parse_json_never_panics(content in "(?s).{0,256}") {
        let _ = parse_option_set(&content, OptionSetFormat::Json);
    }

    /// PROPERTY: Config parsing never panics.
    #[test]
    fn property_parse_config_never_panics(content in "(?s).{0,256}") {
        let _ = toml::from_str::<PickerConfig>(&content);
    }

    /// PROPERTY: Any delimiter builds a picker from any section string.
    #[test]
    fn property_any_delimiter_builds(
        sections in proptest::collection::vec("[a-c/.:]{0,8}", 0..=8),
        delimiter in "[/.:]{0,2}",
    ) {
        let json = serde_json::json!({
            "options": sections
                .iter()
                .enumerate()
                .map(|(i, s)| serde_json::json!({ "section": s, "value": i.to_string() }))
                .collect::<Vec<_>>(),
        });
        let set = parse_option_set(&json.to_string(), OptionSetFormat::Json).unwrap();
        let picker = TreeMultiselect::new(
            &set,
            PickerConfig::default().with_section_delimiter(delimiter),
        );

        prop_assert_eq!(picker.tree().leaf_count(), sections.len());
    }
}
