//! Command-line inspector for syntax trees stored as JSON event streams.
//!
//! ```text
//! heartwood dot tree.json > tree.dot
//! heartwood outline - < tree.json
//! heartwood stats tree.json
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use heartwood::{DotConfig, Event, Tree};

#[derive(Parser)]
#[command(name = "heartwood", version, about = "Inspect syntax trees built from event streams")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tree as a Graphviz DOT graph
    Dot {
        /// JSON event stream, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Name of the emitted digraph
        #[arg(long, default_value = "ast")]
        graph_name: String,
    },

    /// Print the tree as an indented outline
    Outline {
        /// JSON event stream, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },

    /// Print node, leaf and depth counts
    Stats {
        /// JSON event stream, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Dot { input, graph_name } => {
            let tree = load_tree(&input)?;
            let config = DotConfig::with_graph_name(graph_name);
            print!("{}", heartwood::to_dot_with(&tree, &config));
        }
        Command::Outline { input } => {
            let tree = load_tree(&input)?;
            print!("{tree}");
        }
        Command::Stats { input } => {
            let tree = load_tree(&input)?;
            let depth = tree
                .leaves()
                .map(|leaf| tree.depth_of(leaf.id()))
                .max()
                .unwrap_or(0);
            println!("nodes:  {}", tree.len());
            println!("leaves: {}", tree.leaves().count());
            println!("depth:  {depth}");
        }
    }
    Ok(())
}

fn load_tree(path: &Path) -> Result<Tree> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read event stream from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    parse_tree(&text)
}

fn parse_tree(text: &str) -> Result<Tree> {
    let events: Vec<Event> =
        serde_json::from_str(text).context("event stream is not valid JSON")?;
    tracing::debug!(events = events.len(), "loaded event stream");

    let tree = Tree::from_events(events).context("event stream does not form a tree")?;
    Ok(tree)
}
