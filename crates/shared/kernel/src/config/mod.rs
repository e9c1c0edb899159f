use config::{Config, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;
use velo_domain::features::FeatureSet;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// The declarative shape of `configuration.json`.
///
/// The `experimental_features` entries are wire names; the authoritative
/// name↔bit mapping lives in `velo-domain`. Names this binary does not know
/// are dropped by [`ExperimentsConfig::feature_set`], never reported — a
/// config written for a newer or older release must not break startup.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExperimentsConfig {
    pub experimental_features: Vec<String>,
}

impl ExperimentsConfig {
    /// Resolves the configured names into a bitmask.
    #[must_use]
    pub fn feature_set(&self) -> FeatureSet {
        FeatureSet::from_names(&self.experimental_features)
    }
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `configuration.json`). If no path is
///    provided, it defaults to the `configuration` stem in the current working directory.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `VELO__`. Nested structures are accessed using double underscores.
///
/// # Errors
/// Returns [`ConfigError`] if the file cannot be found, the environment variables are
/// malformed, or the content does not match the structure of type `T`. Note that feature
/// *name resolution* is deliberately not an error path; see [`ExperimentsConfig::feature_set`].
///
/// # Example
/// ```rust,ignore
/// use velo_kernel::config::{ExperimentsConfig, load_config};
///
/// let cfg: ExperimentsConfig = load_config(Some("config/configuration")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from("configuration"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("VELO")
                .separator("__")
                .convert_case(config::Case::Snake),  // Env var overrides (e.g., VELO__EXPERIMENTAL_FEATURES)
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}
