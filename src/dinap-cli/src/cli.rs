//! CLI argument definitions for dinap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;

#[derive(Parser)]
#[command(name = "dinap")]
#[command(about = "Dump DINAP save files in a human readable format", long_about = None)]
pub struct Cli {
    /// Path to app.yaml
    #[arg(short, long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dump a save file as a decoded resource table plus a hex view
    #[command(visible_alias = "d")]
    Dump {
        /// Path to a save file (bypasses profile resolution)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Profile directory name, required when several profiles exist
        /// and stdin is not available for the selection prompt
        #[arg(short, long)]
        profile: Option<String>,

        /// Write the dump to a file instead of stdout
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,

        /// Bytes per hex dump row
        #[arg(short, long, default_value_t = dinap::DEFAULT_ROW_WIDTH)]
        width: usize,
    },

    /// List save profiles and the save files inside them
    #[command(visible_alias = "p")]
    Profiles,

    /// List known save format versions and their field layouts
    #[command(visible_alias = "f")]
    Schemas,
}
