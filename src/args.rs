use std::path::PathBuf;

use clap::{ArgGroup, Parser};

#[derive(Parser, Debug)]
#[command(name = "padel-counter", about = "Keep the score of a padel match")]
#[command(group(ArgGroup::new("scoring").args(["play", "simulate"]).multiple(false)))]
pub struct Args {
    /// Scripted sequence of points and undos, e.g. "AABAU" (U = undo)
    #[arg(long, value_name = "SEQ")]
    pub play: Option<String>,

    /// Award N random points and print the final score
    #[arg(long, value_name = "N")]
    pub simulate: Option<usize>,

    /// Seed for --simulate
    #[arg(long, requires = "simulate")]
    pub seed: Option<u64>,

    /// Print the final score as JSON (needs --play or --simulate)
    #[arg(long, requires = "scoring")]
    pub json: bool,

    /// Name shown for side A
    #[arg(long, default_value = "MY TEAM")]
    pub team_a: String,

    /// Name shown for side B
    #[arg(long, default_value = "RIVALS")]
    pub team_b: String,

    /// Directory for the log file
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    /// True when a scoring flag was given and the terminal UI should not start.
    pub fn is_scripted(&self) -> bool {
        self.play.is_some() || self.simulate.is_some()
    }
}
