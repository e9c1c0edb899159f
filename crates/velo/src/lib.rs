//! Facade crate for the VeloKit runtime experiments subsystem.
//! Re-exports domain/kernel primitives and aggregates startup wiring.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] early in startup to load `configuration.json` and activate
//!   the configured experimental features process-wide.
//! - Guard optional code paths with `velo::kernel::experiments::is_enabled`.

pub use velo_domain as domain;
pub use velo_kernel as kernel;
pub use velo_logger as logger;

use std::path::Path;
use tracing::info;
use velo_domain::features::FeatureSet;
use velo_kernel::config::{ConfigError, ExperimentsConfig, load_config};
use velo_kernel::experiments;

/// Loads the experiments configuration and activates it process-wide.
///
/// `path` is the configuration file stem (extension resolved by format);
/// `None` falls back to `configuration` in the working directory. The
/// resulting mask is also returned for callers that want to keep a local
/// copy instead of going through the atomic snapshot.
///
/// # Errors
/// Returns [`ConfigError`] if the file is missing or malformed. Unknown
/// feature names inside a well-formed file are not an error; they resolve
/// to no bits.
pub fn init(path: Option<impl AsRef<Path>>) -> Result<FeatureSet, ConfigError> {
    let cfg: ExperimentsConfig = load_config(path)?;
    let set = cfg.feature_set();
    experiments::activate(set);
    info!(count = set.names().len(), "experiments initialized");
    Ok(set)
}
