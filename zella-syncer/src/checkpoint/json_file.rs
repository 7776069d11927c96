use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{error, warn};

use super::{CheckpointError, CheckpointMap, CheckpointStore};

/*----- */
// Json File Checkpoint Store
/*----- */
#[derive(Debug, Clone)]
pub struct JsonFileCheckpointStore {
    path: PathBuf,
}

impl JsonFileCheckpointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<CheckpointMap, CheckpointError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(CheckpointMap::default()),
            Err(error) => Err(error.into()),
        }
    }
}

impl CheckpointStore for JsonFileCheckpointStore {
    fn read(&self) -> CheckpointMap {
        match self.load() {
            Ok(checkpoints) => checkpoints,
            Err(CheckpointError::Json(error)) => {
                warn!(path = %self.path.display(), %error, "unparseable latest trade times, starting without checkpoint");
                CheckpointMap::default()
            }
            Err(error) => {
                error!(path = %self.path.display(), %error, "failed to read latest trade times");
                CheckpointMap::default()
            }
        }
    }

    fn persist(&self, checkpoints: &CheckpointMap) -> Result<(), CheckpointError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let contents = serde_json::to_string_pretty(checkpoints)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/*----- */
// Tests
/*----- */
#[cfg(test)]
mod test {
    use super::*;
    use crate::{fetcher::SymbolTrades, test_utils::trade};

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileCheckpointStore::new(dir.path().join("data/latest-trade-times.json"));

        assert!(store.read().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_read_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latest-trade-times.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileCheckpointStore::new(&path);

        assert!(store.read().is_empty());
    }

    #[test]
    fn test_write_creates_directory_and_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/latest-trade-times.json");
        let store = JsonFileCheckpointStore::new(&path);

        store.write(&[
            SymbolTrades::fetched("BTCUSDT", vec![trade("BTCUSDT", 1700000000000)]),
            SymbolTrades::fetched("ETHUSDT", vec![trade("ETHUSDT", 1699999999999)]),
        ]);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "{\n  \"BTCUSDT\": 1700000000000,\n  \"ETHUSDT\": 1699999999999\n}"
        );
        assert_eq!(store.read().get("BTCUSDT"), Some(1700000000000));
    }

    #[test]
    fn test_write_never_moves_backwards() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileCheckpointStore::new(dir.path().join("latest-trade-times.json"));

        store.write(&[SymbolTrades::fetched("BTCUSDT", vec![trade("BTCUSDT", 200)])]);
        store.write(&[SymbolTrades::fetched(
            "BTCUSDT",
            vec![trade("BTCUSDT", 150), trade("BTCUSDT", 200)],
        )]);

        assert_eq!(store.read().get("BTCUSDT"), Some(200));
    }

    #[test]
    fn test_write_without_trades_leaves_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileCheckpointStore::new(dir.path().join("latest-trade-times.json"));

        store.write(&[SymbolTrades::fetched("BTCUSDT", vec![])]);

        assert!(!store.path().exists());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // The target path is a directory, so the write itself fails
        let store = JsonFileCheckpointStore::new(dir.path());

        store.write(&[SymbolTrades::fetched("BTCUSDT", vec![trade("BTCUSDT", 1)])]);

        assert!(store.read().is_empty());
    }
}
