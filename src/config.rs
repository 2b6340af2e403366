use anyhow::Result;
use std::path::PathBuf;

use crate::{args::Args, logging, score::PerSide};

/// Runtime settings derived from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub team_names: PerSide<String>,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            team_names: PerSide::new(args.team_a.clone(), args.team_b.clone()),
            log_dir: logging::resolve_log_dir(args.log_dir.as_deref())?,
        })
    }
}
