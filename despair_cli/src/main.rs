//! despair: command-line front end for Despair Space character trajectories.
//!
//! Reads and writes a JSON workspace, prints trees and paths, and renders the
//! history and prompt documents for a point.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use despair_model::{presets, Character, Config, Workspace, WorkspaceStore};
use trajectory_core::{
    flatten_tree_with_depth, history_document, path_detail, trajectory_prompt, English, FlatNode,
    TrajectoryExt,
};

#[derive(Parser)]
#[command(name = "despair")]
#[command(about = "Model character trajectories through Kierkegaard's despair space")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "despair.toml", env = "DESPAIR_CONFIG")]
    config: PathBuf,

    /// Workspace file (overrides config file)
    #[arg(short, long, env = "DESPAIR_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List characters in the workspace
    List,
    /// Print a character's history tree
    Tree { character: String },
    /// Print the path from the root to a point
    Path { character: String, point: String },
    /// Print the history document up to a point
    History { character: String, point: String },
    /// Print the LLM prompt for the path to a point
    Prompt { character: String, point: String },
    /// Print the path to a point as JSON
    Detail { character: String, point: String },
    /// Import a character record from a JSON file
    Import { file: PathBuf },
    /// Export a character record as JSON
    Export {
        character: String,
        /// Output file (defaults to the export directory, or stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Add a built-in example character to the workspace
    Preset {
        #[arg(default_value = "raskolnikov")]
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    let filter = std::env::var("DESPAIR_LOG")
        .map(tracing_subscriber::EnvFilter::new)
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
        });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("reading {}", cli.config.display()))?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    debug!(store = %config.store_path.display(), "using workspace");

    let store = WorkspaceStore::new(&config.store_path);
    let mut workspace = store
        .load_or_default()?
        .with_palette(config.effective_palette());

    match cli.command {
        Command::List => {
            if workspace.is_empty() {
                println!("No characters");
            }
            for character in workspace.characters() {
                println!(
                    "{}  {} ({} points, {} connections)",
                    character.id,
                    character.name,
                    character.points.len(),
                    character.connections.len()
                );
            }
        }
        Command::Tree { character } => {
            let character = find_character(&workspace, &character)?;
            match character.history_tree() {
                Some(tree) => print!("{}", render_tree(&flatten_tree_with_depth(&tree))),
                None => println!("{} has no root point", character.name),
            }
        }
        Command::Path { character, point } => {
            let character = find_character(&workspace, &character)?;
            let target = find_point(character, &point)?;
            let path = character.path_to(&target);
            if path.is_empty() {
                println!("No path (not connected to root)");
            }
            for (i, point) in path.iter().enumerate() {
                println!("{}. {}", i + 1, point.label);
            }
        }
        Command::History { character, point } => {
            let character = find_character(&workspace, &character)?;
            let target = find_point(character, &point)?;
            print!("{}", history_document(character, &target, &English));
        }
        Command::Prompt { character, point } => {
            let character = find_character(&workspace, &character)?;
            let target = find_point(character, &point)?;
            println!("{}", trajectory_prompt(character, &target, &English));
        }
        Command::Detail { character, point } => {
            let character = find_character(&workspace, &character)?;
            let target = find_point(character, &point)?;
            match path_detail(character, &target, &English) {
                Some(detail) => println!("{}", serde_json::to_string_pretty(&detail)?),
                None => bail!("{} is not connected to the root of {}", point, character.name),
            }
        }
        Command::Import { file } => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let id = workspace.import_json(&json)?;
            store.save(&workspace)?;
            println!("Imported as {}", id);
        }
        Command::Export { character, out } => {
            let character = find_character(&workspace, &character)?;
            let json = workspace.export_json(&character.id)?;
            let out = out.or_else(|| {
                config
                    .export_dir
                    .as_ref()
                    .map(|dir| dir.join(export_file_name(character)))
            });
            match out {
                Some(path) => {
                    write_export(&path, &json)?;
                    info!(path = %path.display(), "exported character");
                    println!("Exported to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        Command::Preset { name } => {
            let Some(character) = presets::preset(&name) else {
                bail!(
                    "unknown preset '{}' (available: {})",
                    name,
                    presets::PRESET_IDS.join(", ")
                );
            };
            let id = workspace.import_character(character);
            store.save(&workspace)?;
            println!("Added preset {} as {}", name, id);
        }
    }

    Ok(())
}

fn find_character<'a>(workspace: &'a Workspace, query: &str) -> anyhow::Result<&'a Character> {
    workspace
        .find_character(query)
        .with_context(|| format!("no character matches '{}'", query))
}

fn find_point(character: &Character, query: &str) -> anyhow::Result<despair_model::PointId> {
    character
        .find_point(query)
        .map(|point| point.id.clone())
        .with_context(|| format!("{} has no point matching '{}'", character.name, query))
}

fn export_file_name(character: &Character) -> String {
    let slug: String = character
        .name
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("{}.json", slug.trim_matches('-'))
}

fn write_export(path: &Path, json: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

/// Indented tree listing with branch glyphs.
fn render_tree(nodes: &[FlatNode<'_>]) -> String {
    let mut out = String::new();
    for node in nodes {
        if node.depth > 0 {
            out.push_str(&"   ".repeat(node.depth - 1));
            out.push_str(if node.is_last_child { "└─ " } else { "├─ " });
        }
        out.push_str(&node.point.label);
        if let Some(connection) = node.connection {
            out.push_str(&format!(" [{}", connection.transition_type.key()));
            if let Some(trigger) = connection.crisis_trigger() {
                out.push_str(&format!(": {}", trigger));
            }
            out.push(']');
        }
        out.push('\n');
    }
    out
}
