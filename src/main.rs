//! Tree Multiselect CLI
//!
//! Usage: tree-multiselect [OPTIONS] <COMMAND>
//!
//! Commands:
//!   show   Render the tree, the selected list and the canonical value
//!   apply  Run triggers in order and print the canonical value

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use tree_multiselect::config::{ConfigWarning, PickerConfig};
use tree_multiselect::domain::ports::{NoopEventSink, PickerEventSink};
use tree_multiselect::infrastructure::JsonEventSink;
use tree_multiselect::parser::load_option_set;
use tree_multiselect::render::{render_selected, render_tree};
use tree_multiselect::terminal::supports_unicode;
use tree_multiselect::{NodeId, TreeMultiselect};

mod cli;

use cli::{parse_trigger, Cli, CliTrigger, Commands, PathRef};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Show { ref options } => cmd_show(options, config, cli.json),
        Commands::Apply {
            ref options,
            ref triggers,
        } => cmd_apply(options, triggers, config, cli.json),
    }
}

fn resolve_config(cli: &Cli) -> Result<PickerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let (config, warnings) = PickerConfig::load_with_warnings(path)?;
            print_config_warnings(&warnings);
            config.with_env_overrides()
        }
        None => {
            let cwd = std::env::current_dir().ok();
            let (config, _path, warnings) =
                PickerConfig::load_or_default_with_warnings(cwd.as_deref())?;
            print_config_warnings(&warnings);
            config
        }
    };

    // Flags override every other source
    if cli.sortable {
        config = config.with_sortable(true);
    }
    if cli.no_collapse {
        config = config.with_collapsible(false);
    }
    if cli.start_collapsed {
        config = config.with_start_collapsed(true);
    }
    if let Some(delimiter) = &cli.delimiter {
        config = config.with_section_delimiter(delimiter.clone());
    }
    if let Some(identity) = cli.identity {
        config = config.with_identity(identity.into());
    }

    Ok(config)
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => eprintln!(
                "warning: unknown config key '{}' at {} (did you mean '{}'?)",
                warning.key, location, suggestion
            ),
            None => eprintln!(
                "warning: unknown config key '{}' at {}",
                warning.key, location
            ),
        }
    }
}

fn build_picker(options: &Path, config: PickerConfig, json: bool) -> Result<TreeMultiselect> {
    let set = load_option_set(options)?;
    let sink: Arc<dyn PickerEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(NoopEventSink)
    };
    Ok(TreeMultiselect::with_event_sink(&set, config, sink))
}

fn cmd_show(options: &Path, config: PickerConfig, json: bool) -> Result<()> {
    let picker = build_picker(options, config, json)?;

    if json {
        let complete = serde_json::json!({
            "event": "complete",
            "command": "show",
            "selected": picker.selected().keys(),
            "value": picker.canonical(),
        });
        println!("{}", complete);
        return Ok(());
    }

    println!("{}", render_tree(&picker, supports_unicode()));
    println!();
    println!("Selected:");
    println!("{}", render_selected(&picker));
    println!();
    println!("Value: {}", serde_json::to_string(&picker.canonical().selected_values())?);
    Ok(())
}

fn cmd_apply(
    options: &Path,
    triggers: &[String],
    config: PickerConfig,
    json: bool,
) -> Result<()> {
    let mut picker = build_picker(options, config, json)?;

    for raw in triggers {
        match parse_trigger(raw)? {
            CliTrigger::Check(path) => set_path(&mut picker, path, true),
            CliTrigger::Uncheck(path) => set_path(&mut picker, path, false),
            CliTrigger::Reorder(order) => picker.reorder(&order).map(|_| ()).map_err(Into::into),
            CliTrigger::Collapse(path) => {
                let section = resolve(&picker, path)?;
                picker.toggle_collapsed(section).map(|_| ()).map_err(Into::into)
            }
        }
        .with_context(|| format!("trigger '{raw}' failed"))?;
    }

    if json {
        let complete = serde_json::json!({
            "event": "complete",
            "command": "apply",
            "value": picker.canonical(),
        });
        println!("{}", complete);
    } else {
        println!("{}", serde_json::to_string_pretty(picker.canonical())?);
    }
    Ok(())
}

fn set_path(picker: &mut TreeMultiselect, path: PathRef, checked: bool) -> Result<()> {
    let id = resolve(picker, path)?;
    if picker.tree().node(id)?.is_leaf() {
        picker.set_leaf(id, checked)?;
    } else {
        picker.set_section(id, checked)?;
    }
    Ok(())
}

fn resolve(picker: &TreeMultiselect, path: PathRef) -> Result<NodeId> {
    match path.occurrence {
        Some(n) => picker
            .find_occurrence(&path.path, n)
            .ok_or_else(|| anyhow!("no option #{n} at '{}'", path.path)),
        None => picker
            .find(&path.path)
            .ok_or_else(|| anyhow!("no section or option at '{}'", path.path)),
    }
}
