//! Terminal capability detection for rendered output.

/// Whether the current terminal can draw the unicode state icons
pub fn supports_unicode() -> bool {
    supports_unicode_impl(|key| std::env::var(key).ok())
}

fn supports_unicode_impl(get_env: impl Fn(&str) -> Option<String>) -> bool {
    if get_env("TREE_MULTISELECT_ASCII").is_some() {
        return false;
    }

    let term = get_env("TERM").unwrap_or_default();
    if term.eq_ignore_ascii_case("dumb") {
        return false;
    }

    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Some(val) = get_env(key) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
            // first locale variable set wins
            if !v.is_empty() {
                return v != "c" && v != "posix";
            }
        }
    }

    true
}
