//! unveil - subslide specs and content tree rendering

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;

use unveil::{Config, Dialect, Node, Visibility, serialize};

#[derive(Parser)]
#[command(name = "unveil")]
#[command(version, about = "Subslide reveal specs and content tree rendering", long_about = None)]
#[command(after_help = "EXAMPLES:
    unveil visible '-2,4,6-8,10-' 7     Is subslide 7 shown?
    unveil steps '1,3-5'                How many subslides does a spec need?
    unveil render slide.json -d markdown Render a content tree as Markdown")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print whether a subslide satisfies a range spec
    Visible {
        #[arg(value_name = "SPEC", allow_hyphen_values = true)]
        spec: String,
        #[arg(value_name = "INDEX")]
        index: u32,
    },

    /// Print the number of subslides a range spec requires
    Steps {
        #[arg(value_name = "SPEC", allow_hyphen_values = true)]
        spec: String,
    },

    /// Serialize a JSON content tree to markup
    Render {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output dialect (defaults to the configured one)
        #[arg(short, long, value_enum)]
        dialect: Option<Dialect>,

        /// Indentation of continuation lines
        #[arg(short, long)]
        indent: Option<usize>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(format!("unveil={log_level}")))
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> unveil::Result<()> {
    match cli.command {
        Command::Visible { spec, index } => {
            let spec = Visibility::parse(&spec)?;
            println!("{}", spec.is_visible(index));
        }
        Command::Steps { spec } => {
            let spec = Visibility::parse(&spec)?;
            println!("{}", spec.max_required_index());
        }
        Command::Render {
            input,
            dialect,
            indent,
        } => {
            let config = match cli.config {
                Some(path) => Config::load(path)?,
                None => Config::default(),
            };
            let dialect = dialect.unwrap_or(config.dialect);
            let indent = indent.unwrap_or(config.indent);
            debug!(path = %input.display(), ?dialect, indent, "rendering content tree");

            let text = std::fs::read_to_string(&input)?;
            let node: Node = serde_json::from_str(&text)?;
            println!("{}", serialize(&node, dialect, indent));
        }
    }
    Ok(())
}
