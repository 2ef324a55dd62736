mod cmd;
mod completions;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "propadd", version, about = "Batch link properties into Markdown front matter")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a link property to a markdown file, or to every markdown file in a folder
    Add(AddArgs),

    /// Validate configuration and print resolved paths
    Doctor,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Target markdown file or folder
    pub path: PathBuf,

    /// Descend into subfolders of a folder target
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// Property to fill (defaults to the configured name, then related_notes)
    #[arg(long)]
    pub property: Option<String>,

    /// Link token to insert, e.g. "[[Projects]]"; omitted derives [[<folder>]] per file
    #[arg(long)]
    pub value: Option<String>,

    /// Print the batch summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add(args) => {
            cmd::add::run(cli.config.as_deref(), cli.profile.as_deref(), args);
        }
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref());
        }
        Commands::Completions(args) => completions::run(args.shell),
    }
}
