pub mod completions;
pub mod convert;
pub mod generate;
pub mod list;

use clap::{Parser, Subcommand};

/// Default sprite root, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "assets/sprites";

/// cauldron-sprites - Pixel-art sprite generator for The Cozy Cauldron
#[derive(Parser, Debug)]
#[command(name = "cauldron-sprites")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cut a floor photo into the two-tile floor atlas
    ConvertFloor(convert::ConvertArgs),

    /// Draw the full sprite set
    GenerateSprites(generate::GenerateArgs),

    /// List every sprite the generator writes
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
