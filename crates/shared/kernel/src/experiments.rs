//! Process-wide active feature set.
//!
//! The catalog itself is immutable; what varies at runtime is which features
//! are currently on. Readers load a snapshot without locking. Updates (e.g.,
//! from a remote configuration refresh) replace the whole mask in one store,
//! so a reader can never observe a torn intermediate state between two
//! related flags.

use std::sync::atomic::{AtomicU32, Ordering};
use tracing::info;
use velo_domain::features::FeatureSet;

static ACTIVE: AtomicU32 = AtomicU32::new(0);

/// Replaces the active feature set atomically.
pub fn activate(set: FeatureSet) {
    ACTIVE.store(set.bits(), Ordering::Release);
    info!(features = ?set.names(), "experimental features activated");
}

/// Loads the current active set. Lock-free, safe on any thread.
#[must_use]
pub fn snapshot() -> FeatureSet {
    FeatureSet::from(ACTIVE.load(Ordering::Acquire))
}

/// Fast membership check for hot paths.
#[must_use]
pub fn is_enabled(flag: FeatureSet) -> bool {
    snapshot().contains(flag)
}
