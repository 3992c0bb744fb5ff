use crate::draw::{sort_chronologically, DrawRecord};
use crate::error::{LfResult, LotoError};
use crate::loader;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

/// An immutable, validated set of historical draws, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    draws: Vec<DrawRecord>,
}

impl Dataset {
    pub fn new(mut draws: Vec<DrawRecord>) -> Self {
        sort_chronologically(&mut draws);
        Self { draws }
    }

    pub fn draws(&self) -> &[DrawRecord] {
        &self.draws
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    pub fn latest(&self) -> Option<&DrawRecord> {
        self.draws.last()
    }

    /// The `n` most recent draws, newest first.
    pub fn recent(&self, n: usize) -> Vec<DrawRecord> {
        self.draws.iter().rev().take(n).cloned().collect()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.draws.iter().any(|d| d.id() == id)
    }
}

/// Process-wide holder of the current dataset.
///
/// Readers take an `Arc` snapshot and never see a half-built dataset; writers
/// build the replacement completely, persist it, then swap the pointer.
pub struct DrawStore {
    path: Option<PathBuf>,
    current: RwLock<Arc<Dataset>>,
}

impl DrawStore {
    /// A store with no backing file. `save` is a no-op.
    pub fn in_memory(draws: Vec<DrawRecord>) -> Self {
        Self {
            path: None,
            current: RwLock::new(Arc::new(Dataset::new(draws))),
        }
    }

    /// Loads the snapshot at `path`. A missing file yields an empty dataset.
    pub fn open<P: AsRef<Path>>(path: P) -> LfResult<Self> {
        let path = path.as_ref().to_path_buf();
        let draws = if path.exists() {
            loader::load_json_file(&path)?
        } else {
            warn!("Snapshot {} not found, starting with an empty dataset", path.display());
            Vec::new()
        };
        Ok(Self {
            path: Some(path),
            current: RwLock::new(Arc::new(Dataset::new(draws))),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn snapshot(&self) -> Arc<Dataset> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Swaps in a whole new dataset and persists it.
    pub fn replace(&self, draws: Vec<DrawRecord>) -> LfResult<Arc<Dataset>> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(Dataset::new(draws));
        self.persist(&next)?;
        *guard = Arc::clone(&next);
        info!("Dataset replaced: {} draws", next.len());
        Ok(next)
    }

    /// Inserts one new draw. Rejects an id that is already present.
    pub fn add_draw(&self, draw: DrawRecord) -> LfResult<Arc<Dataset>> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if guard.contains_id(draw.id()) {
            return Err(LotoError::DuplicateDraw(draw.id().to_string()));
        }
        let id = draw.id().to_string();
        let mut draws = guard.draws().to_vec();
        draws.push(draw);
        let next = Arc::new(Dataset::new(draws));
        self.persist(&next)?;
        *guard = Arc::clone(&next);
        info!("Added draw {} ({} total)", id, next.len());
        Ok(next)
    }

    pub fn save(&self) -> LfResult<()> {
        let current = self.snapshot();
        self.persist(&current)
    }

    /// Writes to a sibling temp file first so the snapshot is never truncated.
    fn persist(&self, dataset: &Dataset) -> LfResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = loader::to_snapshot_json(dataset.draws())?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}
