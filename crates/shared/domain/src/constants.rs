//! Wire names for experimental features.
//! These are the exact strings used by `configuration.json` and remote config
//! payloads. Update `configuration.json` when you add entries.

pub const GRAPHICS_CONTEXTS: &str = "exp_graphics_contexts";
pub const TEXT_NODE: &str = "exp_text_node";
pub const INTERFACE_STATE_COALESCING: &str = "exp_interface_state_coalesce";
pub const UNFAIR_LOCK: &str = "exp_unfair_lock";
pub const LAYER_DEFAULTS: &str = "exp_infer_layer_defaults";
pub const COLLECTION_TEARDOWN: &str = "exp_collection_teardown";
pub const FRAMESETTER_CACHE: &str = "exp_framesetter_cache";
pub const SKIP_CLEAR_DATA: &str = "exp_skip_clear_data";
pub const DID_ENTER_PRELOAD_SKIP_LAYOUT: &str = "exp_did_enter_preload_skip_asm_layout";
pub const DISABLE_A11Y_CACHE: &str = "exp_disable_a11y_cache";
pub const SKIP_A11Y_WAIT: &str = "exp_skip_a11y_wait";
pub const NEW_DEFAULT_CELL_LAYOUT_MODE: &str = "exp_new_default_cell_layout_mode";
pub const DISPATCH_APPLY: &str = "exp_dispatch_apply";
pub const IMAGE_DOWNLOADER_PRIORITY: &str = "exp_image_downloader_priority";
pub const TEXT_DRAWING: &str = "exp_text_drawing";
