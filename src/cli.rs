use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};

use tree_multiselect::IdentityKey;

/// Tree Multiselect - hierarchical multi-select picker
#[derive(Parser, Debug)]
#[command(name = "tree-multiselect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to .tree-multiselect.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Allow reordering the selected list
    #[arg(long, global = true)]
    pub sortable: bool,

    /// Disable collapsing sections
    #[arg(long, global = true)]
    pub no_collapse: bool,

    /// Start with every section collapsed
    #[arg(long, global = true)]
    pub start_collapsed: bool,

    /// Section path delimiter
    #[arg(long, global = true)]
    pub delimiter: Option<String>,

    /// Key used to match selected entries to leaves
    #[arg(long, global = true, value_enum)]
    pub identity: Option<IdentityArg>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the tree, the selected list and the canonical value
    Show {
        /// Option set file (.toml or .json)
        options: PathBuf,
    },

    /// Run triggers in order and print the canonical value
    ///
    /// +PATH checks, -PATH unchecks, =K1,K2 reorders, ^PATH collapses.
    /// PATH#N picks the Nth option when several share the same path.
    Apply {
        /// Option set file (.toml or .json)
        options: PathBuf,

        /// Triggers to run
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        triggers: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdentityArg {
    Label,
    Value,
}

impl From<IdentityArg> for IdentityKey {
    fn from(arg: IdentityArg) -> Self {
        match arg {
            IdentityArg::Label => IdentityKey::Label,
            IdentityArg::Value => IdentityKey::Value,
        }
    }
}

/// A node path, with an optional 1-based occurrence among same-path options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRef {
    pub path: String,
    pub occurrence: Option<usize>,
}

impl PathRef {
    /// Split a trailing `#N`; anything else after `#` stays part of the path
    pub fn parse(raw: &str) -> Result<Self> {
        if let Some((path, suffix)) = raw.rsplit_once('#') {
            let numeric = !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit());
            if numeric && !path.is_empty() {
                let occurrence: usize = suffix.parse()?;
                if occurrence == 0 {
                    bail!("occurrence in '{raw}' starts at 1");
                }
                return Ok(Self {
                    path: path.to_string(),
                    occurrence: Some(occurrence),
                });
            }
        }
        Ok(Self {
            path: raw.to_string(),
            occurrence: None,
        })
    }
}

/// One trigger from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliTrigger {
    Check(PathRef),
    Uncheck(PathRef),
    Reorder(Vec<String>),
    Collapse(PathRef),
}

/// Parse `+PATH`, `-PATH`, `=K1,K2` or `^PATH`; paths accept a `#N` suffix
pub fn parse_trigger(raw: &str) -> Result<CliTrigger> {
    let mut chars = raw.chars();
    let Some(prefix) = chars.next() else {
        bail!("empty trigger");
    };
    let rest = chars.as_str();

    let trigger = match prefix {
        '+' => CliTrigger::Check(PathRef::parse(rest)?),
        '-' => CliTrigger::Uncheck(PathRef::parse(rest)?),
        '^' => CliTrigger::Collapse(PathRef::parse(rest)?),
        '=' if rest.is_empty() => CliTrigger::Reorder(Vec::new()),
        '=' => CliTrigger::Reorder(rest.split(',').map(str::to_string).collect()),
        _ => bail!("invalid trigger '{raw}' (expected +PATH, -PATH, =K1,K2 or ^PATH)"),
    };
    Ok(trigger)
}
