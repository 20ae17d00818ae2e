//! [`JsonStore`] — the flat-file implementation of [`LeadStore`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use tokio::sync::Mutex;
use uuid::Uuid;

use leadbook_core::{
  lead::{Lead, LeadPatch},
  store::LeadStore,
};

use crate::{Error, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A lead store backed by a single pretty-printed JSON file.
///
/// Mutations run behind an internal writer lock, so concurrent appends and
/// updates cannot interleave their read-modify-write cycles. Reads take no
/// lock; they see the last snapshot that was renamed into place.
///
/// Cloning is cheap — clones share the writer lock.
#[derive(Clone)]
pub struct JsonStore {
  path:   PathBuf,
  writer: Arc<Mutex<()>>,
}

impl JsonStore {
  /// Create a store over the file at `path`. The file need not exist yet;
  /// a missing file reads as an empty collection and is created on first
  /// write.
  pub fn new(path: impl AsRef<Path>) -> Self {
    Self {
      path:   path.as_ref().to_path_buf(),
      writer: Arc::new(Mutex::new(())),
    }
  }

  /// The path of the backing file.
  pub fn path(&self) -> &Path {
    &self.path
  }

  async fn read_leads(&self) -> Result<Vec<Lead>> {
    let raw = match tokio::fs::read(&self.path).await {
      Ok(bytes) => bytes,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        return Ok(Vec::new());
      }
      Err(e) => return Err(e.into()),
    };

    serde_json::from_slice(&raw).map_err(|source| Error::Corrupt {
      path: self.path.clone(),
      source,
    })
  }

  /// Serialize the full collection to a uniquely-named temp file next to
  /// the store and rename it into place. Callers mutating the store must
  /// hold the writer lock.
  async fn persist(&self, leads: &[Lead]) -> Result<()> {
    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }

    let payload = serde_json::to_vec_pretty(leads)?;

    let tmp = self
      .path
      .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
    tokio::fs::write(&tmp, payload).await?;
    tokio::fs::rename(&tmp, &self.path).await?;

    Ok(())
  }
}

// ─── LeadStore impl ──────────────────────────────────────────────────────────

impl LeadStore for JsonStore {
  type Error = Error;

  async fn load_all(&self) -> Result<Vec<Lead>> {
    self.read_leads().await
  }

  async fn save_all(&self, leads: Vec<Lead>) -> Result<()> {
    let _guard = self.writer.lock().await;
    self.persist(&leads).await
  }

  async fn append(&self, lead: Lead) -> Result<()> {
    let _guard = self.writer.lock().await;
    let mut leads = self.read_leads().await?;
    leads.push(lead);
    self.persist(&leads).await
  }

  async fn update_by_id(&self, id: &str, patch: LeadPatch) -> Result<Option<Lead>> {
    let _guard = self.writer.lock().await;
    let mut leads = self.read_leads().await?;

    let Some(lead) = leads.iter_mut().find(|l| l.id == id) else {
      return Ok(None);
    };

    lead.apply_patch(&patch);
    let updated = lead.clone();

    self.persist(&leads).await?;
    Ok(Some(updated))
  }
}
