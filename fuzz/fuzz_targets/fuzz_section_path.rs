#![no_main]

use libfuzzer_sys::fuzz_target;
use tree_multiselect::models::split_section_path;

fuzz_target!(|input: (&str, &str)| {
    let (section, delimiter) = input;
    let segments = split_section_path(section, delimiter);

    assert!(!segments.is_empty());
    if !delimiter.is_empty() {
        assert_eq!(segments.join(delimiter), section);
    }
});
