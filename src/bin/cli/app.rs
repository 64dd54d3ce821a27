use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use atlas_lib::catalog::Catalog;
use atlas_lib::quiz::{ProgressStorage, QuizSession};
use atlas_lib::report::summary::{self, ProgressSummary};

/// Shared wiring for CLI commands: the catalog to study, where progress
/// lives, and how to seed the shuffles.
pub struct App {
    pub catalog: Catalog,
    data_dir: PathBuf,
    seed: Option<u64>,
}

impl App {
    pub fn new(
        data_dir: Option<&str>,
        catalog_path: Option<&str>,
        seed: Option<u64>,
    ) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => PathBuf::from(dir),
            None => ProgressStorage::default_data_dir()
                .context("Failed to get data directory")?,
        };

        let catalog = match catalog_path {
            Some(path) => Catalog::from_file(Path::new(path))
                .with_context(|| format!("Failed to load catalog from {}", path))?,
            None => Catalog::builtin().context("Failed to load built-in catalog")?,
        };

        Ok(Self {
            catalog,
            data_dir,
            seed,
        })
    }

    pub fn storage(&self) -> ProgressStorage {
        ProgressStorage::new(self.data_dir.clone())
    }

    /// Seeded when `--seed` was given, otherwise from entropy
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Start a quiz session over this app's catalog and storage
    pub fn session(&self) -> Result<QuizSession<StdRng>> {
        QuizSession::new(self.catalog.clone(), self.storage(), self.rng())
            .context("Failed to start quiz session")
    }

    /// Snapshot of current progress
    pub fn summary(&self) -> ProgressSummary {
        summary::summarize(&self.catalog, &self.storage().load())
    }
}
