//! Command-line interface for the renju binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::rules::HighlightRule;
use crate::session::PlayerNames;

/// Renju - five in a row on a 15x15 board
#[derive(Parser, Debug)]
#[command(name = "renju")]
#[command(about = "Two-player five-in-a-row on a 15x15 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of the player with crosses (moves first)
    #[arg(long, default_value = "")]
    pub cross_name: String,

    /// Name of the player with noughts
    #[arg(long, default_value = "")]
    pub nought_name: String,

    /// Which cells of a winning run to highlight
    #[arg(long, value_enum, default_value_t = Highlight::LeadingFive)]
    pub highlight: Highlight,

    /// Directory holding click.wav, win.wav and background.wav
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Skip the welcome and name-entry dialog
    #[arg(long)]
    pub skip_intro: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Command-line spelling of [`HighlightRule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Highlight {
    /// First five cells of the run
    LeadingFive,
    /// Every cell of the run
    FullRun,
}

impl From<Highlight> for HighlightRule {
    fn from(h: Highlight) -> Self {
        match h {
            Highlight::LeadingFive => HighlightRule::LeadingFive,
            Highlight::FullRun => HighlightRule::FullRun,
        }
    }
}

impl Cli {
    pub fn player_names(&self) -> PlayerNames {
        PlayerNames::new(&self.cross_name, &self.nought_name)
    }
}
