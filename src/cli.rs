use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "madlib",
    about = "Fill in the blanks of a story template and see what you made",
    version,
    after_help = "Logs are written to: ~/.local/share/madlib/logs/madlib.log"
)]
pub struct Cli {
    /// Path to config file (overrides default locations)
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Defaults to `play` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a madlib interactively
    Play(PlayArgs),

    /// List available templates
    List,

    /// Write the effective config to .madlib/ in current directory
    Init,
}

#[derive(Parser, Default)]
pub struct PlayArgs {
    /// Where to save the finished madlib (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
