//! Option set parser
//!
//! Reads the host's option records from TOML or JSON.
//!
//! # Example
//! ```text
//! selected = ["lemon"]
//!
//! [[option]]
//! section = "Fruit/Citrus"
//! value = "lemon"
//! label = "Lemon"
//! description = "sour"
//! ```

use std::fs;
use std::path::Path;

use crate::error::{PickerError, PickerResult};
use crate::models::OptionSet;

/// Document format of an option set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSetFormat {
    Toml,
    Json,
}

impl OptionSetFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> PickerResult<Self> {
        match path.extension().and_then(|s| s.to_str()).unwrap_or("") {
            "toml" | "tml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(PickerError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Parse an option set document
pub fn parse_option_set(content: &str, format: OptionSetFormat) -> PickerResult<OptionSet> {
    let set = match format {
        OptionSetFormat::Toml => toml::from_str(content)?,
        OptionSetFormat::Json => serde_json::from_str(content)?,
    };
    Ok(set)
}

/// Load an option set, choosing the format by extension
pub fn load_option_set(path: &Path) -> PickerResult<OptionSet> {
    let format = OptionSetFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    parse_option_set(&content, format).map_err(|e| PickerError::InvalidOptionSet {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}
