//! Revocable preview references.
//!
//! A [`PreviewRegistry`] hands out [`PreviewLease`]s: short-lived
//! `preview:<uuid>` references that resolve to the selected file for local
//! playback. A lease revokes its reference when dropped, so a preview is
//! released exactly once no matter how the owning payload goes away
//! (replacement, explicit clear, or teardown).

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

/// URL scheme used for preview references.
pub const PREVIEW_SCHEME: &str = "preview";

/// Issues and tracks preview references.
///
/// Shared as `Arc<PreviewRegistry>` between the front end and the tasks
/// that encode selected files.
#[derive(Default)]
pub struct PreviewRegistry {
    /// Live references mapped to what they preview (a path or a label).
    entries: Mutex<HashMap<Uuid, String>>,
    released: AtomicU64,
}

impl PreviewRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Allocate a new preview reference for `target`.
    pub fn acquire(self: &Arc<Self>, target: impl Into<String>) -> PreviewLease {
        let id = Uuid::new_v4();
        let target = target.into();
        tracing::debug!(%id, target = %target, "Preview reference allocated");
        self.entries().insert(id, target);
        PreviewLease {
            id,
            registry: Arc::clone(self),
        }
    }

    /// Resolve a `preview:<uuid>` reference to its target, if still live.
    pub fn resolve(&self, url: &str) -> Option<String> {
        let id = parse_preview_url(url)?;
        self.entries().get(&id).cloned()
    }

    /// Number of references currently live.
    pub fn active_count(&self) -> usize {
        self.entries().len()
    }

    /// Total number of references released since the registry was created.
    pub fn released_count(&self) -> u64 {
        self.released.load(Ordering::SeqCst)
    }

    fn release(&self, id: Uuid) {
        if self.entries().remove(&id).is_some() {
            self.released.fetch_add(1, Ordering::SeqCst);
            tracing::debug!(%id, "Preview reference released");
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<Uuid, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for PreviewRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewRegistry")
            .field("active", &self.active_count())
            .field("released", &self.released_count())
            .finish()
    }
}

/// Owned handle to one live preview reference.
///
/// Not `Clone`: there is exactly one owner, and dropping it is the release.
pub struct PreviewLease {
    id: Uuid,
    registry: Arc<PreviewRegistry>,
}

impl PreviewLease {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The reference in URL form, e.g. `preview:6f1c...`.
    pub fn url(&self) -> String {
        format!("{PREVIEW_SCHEME}:{}", self.id)
    }

    /// What this reference previews.
    pub fn target(&self) -> Option<String> {
        self.registry.entries().get(&self.id).cloned()
    }
}

impl Drop for PreviewLease {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}

impl fmt::Debug for PreviewLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreviewLease").field(&self.url()).finish()
    }
}

fn parse_preview_url(url: &str) -> Option<Uuid> {
    let rest = url.strip_prefix(PREVIEW_SCHEME)?.strip_prefix(':')?;
    Uuid::parse_str(rest).ok()
}
