use clap::Parser;
use std::path::PathBuf;

use friends_core::config::CoreConfig;

/// Directory under the platform config dir used when no --data-dir is given
const APP_DIR_NAME: &str = "friends-tui";

#[derive(Parser, Debug)]
#[command(name = "friends-tui")]
#[command(about = "Terminal friends list with tag groups, requests and presence")]
pub struct Args {
    /// Snapshot file describing the social graph (overrides --data-dir)
    #[arg(long, short)]
    pub snapshot: Option<PathBuf>,

    /// Directory holding friends.json
    #[arg(long, short)]
    pub data_dir: Option<PathBuf>,

    /// How often to check the snapshot for changes, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub poll_ms: u64,
}

impl Args {
    pub fn core_config(&self) -> CoreConfig {
        let data_dir = self
            .data_dir
            .clone()
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME)))
            .unwrap_or_else(|| CoreConfig::default().data_dir);

        let config = CoreConfig::new(data_dir);
        match &self.snapshot {
            Some(path) => config.with_snapshot(path),
            None => config,
        }
    }
}
