use std::path::{Path, PathBuf};

use crate::constants::SNAPSHOT_FILE_NAME;

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
    pub snapshot_path: PathBuf,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        let snapshot_path = data_dir.join(SNAPSHOT_FILE_NAME);
        Self {
            data_dir,
            snapshot_path,
        }
    }

    /// Point at a snapshot file outside the data directory.
    pub fn with_snapshot<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.snapshot_path = path.as_ref().to_path_buf();
        self
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new("friends_data")
    }
}
