use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "A command-driven contact book for the terminal", long_about = None)]
pub struct Cli {
    /// Path to the book file (defaults to the user data directory)
    #[arg(short, long)]
    pub book: Option<PathBuf>,

    /// Contacts per page for `show all` (overrides config)
    #[arg(short, long)]
    pub page_size: Option<usize>,
}
