//! Kernel utilities shared across the toolkit.
//! Keep this crate lightweight; it provides config loading and the runtime
//! activation point for experimental features.
//!
//! ## Config loading
//! ```rust,ignore
//! use velo_kernel::config::{ExperimentsConfig, load_config};
//! let cfg: ExperimentsConfig = load_config(Some("configuration")).unwrap_or_default();
//! ```
//!
//! ## Feature checks on hot paths
//! ```rust
//! use velo_domain::features::FeatureSet;
//! use velo_kernel::experiments;
//!
//! experiments::activate(FeatureSet::TEXT_NODE);
//! assert!(experiments::is_enabled(FeatureSet::TEXT_NODE));
//! ```

pub mod config;
pub mod experiments;

pub use velo_domain as domain;
