//! Best-score persistence collaborators
//!
//! The core treats storage as always-succeeding: `load_best` is called once
//! at startup, `save_best` once per qualifying run end, and failures are
//! logged and swallowed rather than propagated into the simulation.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::highscores::BestScore;

/// Key-value storage for the single persisted scalar
pub trait BestStore {
    fn load_best(&self) -> u32;
    fn save_best(&mut self, best: u32);
}

/// JSON file under the platform data directory
pub struct JsonFileStore {
    path: Option<PathBuf>,
}

impl JsonFileStore {
    const FILE_NAME: &'static str = "best_score.json";

    pub fn new() -> Self {
        let path = ProjectDirs::from("", "", "skyflap").map(|dirs| {
            dirs.data_dir().join(Self::FILE_NAME)
        });
        if path.is_none() {
            log::warn!("no data directory available - best score will not persist");
        }
        Self { path }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BestStore for JsonFileStore {
    fn load_best(&self) -> u32 {
        let Some(path) = &self.path else {
            return 0;
        };
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<BestScore>(&json) {
                Ok(record) => {
                    log::info!("loaded best score {}", record.best);
                    record.best
                }
                Err(err) => {
                    log::warn!("corrupt best-score file, starting fresh: {err}");
                    0
                }
            },
            Err(_) => {
                log::info!("no best score recorded yet");
                0
            }
        }
    }

    fn save_best(&mut self, best: u32) {
        let Some(path) = &self.path else {
            return;
        };
        if let Some(dir) = path.parent()
            && let Err(err) = fs::create_dir_all(dir)
        {
            log::warn!("could not create save directory: {err}");
            return;
        }
        match serde_json::to_string(&BestScore::new(best)) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("could not save best score: {err}");
                } else {
                    log::info!("best score {best} saved");
                }
            }
            Err(err) => log::warn!("could not serialize best score: {err}"),
        }
    }
}

/// In-memory store for tests and demo runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub best: u32,
    pub saves: u32,
}

impl BestStore for MemoryStore {
    fn load_best(&self) -> u32 {
        self.best
    }

    fn save_best(&mut self, best: u32) {
        self.best = best;
        self.saves += 1;
    }
}
