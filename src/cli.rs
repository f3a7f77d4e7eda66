use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gfamem",
    about = "Inspect GFA sequence graphs and their packed memory layout",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a GFA file: record counts, header version, path lengths
    Inspect {
        /// Path to the .gfa file
        file: String,

        /// Emit the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List segments with their packed handle geometry
    Segments {
        /// Path to the .gfa file
        file: String,

        /// Show at most this many segments
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
