//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::reconcile::IdentityKey;
use crate::error::{PickerError, PickerResult};

use super::types::PickerConfig;

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = ".tree-multiselect.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PickerResult<(PickerConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used for messages
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> PickerResult<(PickerConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: PickerConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PickerError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve project config, user config, or defaults, keeping the warnings
/// and the path of whichever file was loaded.
///
/// A config file that exists but fails to parse is an error.
pub fn load_or_default_with_warnings(
    project_root: Option<&Path>,
) -> PickerResult<(PickerConfig, Option<PathBuf>, Vec<ConfigWarning>)> {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if path.exists() {
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), Some(path), warnings));
        }
    }

    Ok((with_env_overrides(PickerConfig::default()), None, Vec::new()))
}

/// Location of the user-level config file
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tree-multiselect").join("config.toml"))
}

/// Apply environment variable overrides (TREE_MULTISELECT_* prefix)
pub fn with_env_overrides(config: PickerConfig) -> PickerConfig {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_overrides(
    mut config: PickerConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> PickerConfig {
    if let Some(val) = lookup("TREE_MULTISELECT_SORTABLE") {
        config.sortable = parse_flag(&val);
    }

    if let Some(val) = lookup("TREE_MULTISELECT_COLLAPSIBLE") {
        config.collapsible = parse_flag(&val);
    }

    if let Some(val) = lookup("TREE_MULTISELECT_START_COLLAPSED") {
        config.start_collapsed = parse_flag(&val);
    }

    // Taken verbatim; an empty value disables splitting
    if let Some(val) = lookup("TREE_MULTISELECT_SECTION_DELIMITER") {
        config.section_delimiter = val;
    }

    if let Some(val) = lookup("TREE_MULTISELECT_IDENTITY") {
        config.identity = match val.to_lowercase().as_str() {
            "value" => IdentityKey::Value,
            _ => IdentityKey::Label,
        };
    }

    config
}

fn parse_flag(val: &str) -> bool {
    !matches!(val.to_lowercase().as_str(), "false" | "0" | "no" | "off" | "")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "sortable",
        "collapsible",
        "start_collapsed",
        "section_delimiter",
        "identity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
