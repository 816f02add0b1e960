use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flashdeck")]
#[command(about = "Swipe-deck flashcards from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding cards.json and settings.json (or set FLASHDECK_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR", env = "FLASHDECK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the cards in view
    List(ListArgs),
    /// List the tag filters, "All" first
    Tags,
    /// Create a card
    Add(AddArgs),
    /// Edit a card
    Edit(EditArgs),
    /// Delete a card
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Shuffle the whole collection
    Shuffle {
        /// Seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Append cards from a row export (JSON array of rows)
    Import(ImportArgs),
    /// Feed a pointer-event script through the swipe engine
    Replay(ReplayArgs),
    /// Card appearance settings
    Settings(SettingsCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show cards with this tag ("All" shows every card)
    #[arg(long)]
    pub tag: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub front: String,
    #[arg(long)]
    pub back: String,
    #[arg(long)]
    pub tag: Option<String>,
    /// Card background, e.g. #fef3c7
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub front: Option<String>,
    #[arg(long)]
    pub back: Option<String>,
    #[arg(long)]
    pub tag: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Args)]
pub struct ImportArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// JSON array of timed pointer events
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,
    /// Tag filter to select before replaying
    #[arg(long)]
    pub tag: Option<String>,
    /// Write the resulting collection back to the data directory
    #[arg(long)]
    pub save: bool,
}

#[derive(Args)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show current settings
    Show,
    /// Change one or more settings
    Set(SettingsSetArgs),
}

#[derive(Args)]
pub struct SettingsSetArgs {
    #[arg(long)]
    pub font_family: Option<String>,
    #[arg(long)]
    pub font_size: Option<u32>,
    /// Also picks a matching text color
    #[arg(long)]
    pub panel_color: Option<String>,
    #[arg(long)]
    pub panel_opacity: Option<f32>,
    #[arg(long)]
    pub text_color: Option<String>,
}
