mod app;
mod commands;
#[cfg(feature = "tui")]
mod tui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "atlas-cli", about = "Countries and capitals study tool", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<String>,

    /// Load a catalog JSON file instead of the built-in dataset
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Seed the shuffles for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Answer adaptive quiz questions at the prompt
    Practice,

    /// Show per-country progress
    Stats,

    /// Render the learning statistics report as Markdown
    Report {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },

    /// Render a printable matching worksheet as Markdown
    Worksheet {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<String>,

        /// Append the answer key
        #[arg(long)]
        key: bool,
    },

    /// Clear all mastery data
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Launch interactive TUI
    #[cfg(feature = "tui")]
    Tui,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.data_dir.as_deref(), cli.catalog.as_deref(), cli.seed)?;

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(app)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::Practice) => {
            commands::practice::run(app)?;
        }
        Some(Command::Stats) => {
            commands::stats::run(&app, &cli.format)?;
        }
        Some(Command::Report { output }) => {
            commands::report::run(&app, output.as_deref())?;
        }
        Some(Command::Worksheet { output, key }) => {
            commands::worksheet::run(&app, output.as_deref(), key)?;
        }
        Some(Command::Reset { yes }) => {
            commands::reset::run(&app, yes)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            tui::run(app)?;
        }
    }

    Ok(())
}
