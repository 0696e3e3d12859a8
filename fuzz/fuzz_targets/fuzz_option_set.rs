#![no_main]

use libfuzzer_sys::fuzz_target;
use tree_multiselect::{parse_option_set, OptionSetFormat, PickerConfig, TreeMultiselect};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    for format in [OptionSetFormat::Toml, OptionSetFormat::Json] {
        // Whatever parses must also build a picker
        if let Ok(set) = parse_option_set(content, format) {
            let picker = TreeMultiselect::new(&set, PickerConfig::default());
            assert_eq!(picker.tree().leaf_count(), set.options.len());
            assert_eq!(
                picker.canonical().selected_values(),
                picker.selected().keys()
            );
        }
    }
});
