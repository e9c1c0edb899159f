use crate::constants::{
    COLLECTION_TEARDOWN, DID_ENTER_PRELOAD_SKIP_LAYOUT, DISABLE_A11Y_CACHE, DISPATCH_APPLY,
    FRAMESETTER_CACHE, GRAPHICS_CONTEXTS, IMAGE_DOWNLOADER_PRIORITY, INTERFACE_STATE_COALESCING,
    LAYER_DEFAULTS, NEW_DEFAULT_CELL_LAYOUT_MODE, SKIP_A11Y_WAIT, SKIP_CLEAR_DATA, TEXT_DRAWING,
    TEXT_NODE, UNFAIR_LOCK,
};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// A set of experimental rendering features packed into a bitmask.
    ///
    /// Membership checks sit on hot paths (every node walk consults the
    /// active set), so the representation stays a plain `u32`. The mapping
    /// to wire names lives in [`FeatureSet::names`] and
    /// [`FeatureSet::from_names`]; both are total and tolerate unknown
    /// input, so a stale or newer `configuration.json` can never fail here.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureSet: u32 {
        const GRAPHICS_CONTEXTS = 1 << 0;
        const TEXT_NODE = 1 << 1;
        const INTERFACE_STATE_COALESCING = 1 << 2;
        const UNFAIR_LOCK = 1 << 3;
        const LAYER_DEFAULTS = 1 << 4;
        const COLLECTION_TEARDOWN = 1 << 5;
        const FRAMESETTER_CACHE = 1 << 6;
        const SKIP_CLEAR_DATA = 1 << 7;
        const DID_ENTER_PRELOAD_SKIP_LAYOUT = 1 << 8;
        const DISABLE_A11Y_CACHE = 1 << 9;
        const SKIP_A11Y_WAIT = 1 << 10;
        const NEW_DEFAULT_CELL_LAYOUT_MODE = 1 << 11;
        const DISPATCH_APPLY = 1 << 12;
        const IMAGE_DOWNLOADER_PRIORITY = 1 << 13;
        const TEXT_DRAWING = 1 << 14;

        /// All-enabled sentinel. Deliberately wider than the catalog so a
        /// mask written by a newer binary still means "everything" here.
        const ALL = !0;
    }
}

/// The catalog: every known feature with its wire name, in declaration order.
///
/// Bit positions are unique and the catalog never exceeds the mask width;
/// both are asserted by tests. The catalog is immutable at runtime.
pub const CATALOG: &[(FeatureSet, &str)] = &[
    (FeatureSet::GRAPHICS_CONTEXTS, GRAPHICS_CONTEXTS),
    (FeatureSet::TEXT_NODE, TEXT_NODE),
    (FeatureSet::INTERFACE_STATE_COALESCING, INTERFACE_STATE_COALESCING),
    (FeatureSet::UNFAIR_LOCK, UNFAIR_LOCK),
    (FeatureSet::LAYER_DEFAULTS, LAYER_DEFAULTS),
    (FeatureSet::COLLECTION_TEARDOWN, COLLECTION_TEARDOWN),
    (FeatureSet::FRAMESETTER_CACHE, FRAMESETTER_CACHE),
    (FeatureSet::SKIP_CLEAR_DATA, SKIP_CLEAR_DATA),
    (FeatureSet::DID_ENTER_PRELOAD_SKIP_LAYOUT, DID_ENTER_PRELOAD_SKIP_LAYOUT),
    (FeatureSet::DISABLE_A11Y_CACHE, DISABLE_A11Y_CACHE),
    (FeatureSet::SKIP_A11Y_WAIT, SKIP_A11Y_WAIT),
    (FeatureSet::NEW_DEFAULT_CELL_LAYOUT_MODE, NEW_DEFAULT_CELL_LAYOUT_MODE),
    (FeatureSet::DISPATCH_APPLY, DISPATCH_APPLY),
    (FeatureSet::IMAGE_DOWNLOADER_PRIORITY, IMAGE_DOWNLOADER_PRIORITY),
    (FeatureSet::TEXT_DRAWING, TEXT_DRAWING),
];

impl FeatureSet {
    /// Returns the wire names of every cataloged feature set in `self`,
    /// in catalog order. Bits outside the catalog are silently skipped.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        CATALOG.iter().filter(|(flag, _)| self.contains(*flag)).map(|(_, name)| *name).collect()
    }

    /// Builds a set from a sequence of wire names.
    ///
    /// Unknown names are ignored rather than reported: configuration files
    /// referencing newer or removed flags must not break older binaries.
    /// Duplicates are harmless; an empty sequence yields an empty set.
    #[must_use = "building a set has no effect unless the result is used"]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().fold(Self::empty(), |acc, name| acc | Self::from(name.as_ref()))
    }

    /// The union of all cataloged bits (excludes the sentinel's extra bits).
    #[must_use]
    pub fn cataloged() -> Self {
        CATALOG.iter().fold(Self::empty(), |acc, (flag, _)| acc | *flag)
    }
}

impl From<&str> for FeatureSet {
    fn from(s: &str) -> Self {
        match s {
            GRAPHICS_CONTEXTS => Self::GRAPHICS_CONTEXTS,
            TEXT_NODE => Self::TEXT_NODE,
            INTERFACE_STATE_COALESCING => Self::INTERFACE_STATE_COALESCING,
            UNFAIR_LOCK => Self::UNFAIR_LOCK,
            LAYER_DEFAULTS => Self::LAYER_DEFAULTS,
            COLLECTION_TEARDOWN => Self::COLLECTION_TEARDOWN,
            FRAMESETTER_CACHE => Self::FRAMESETTER_CACHE,
            SKIP_CLEAR_DATA => Self::SKIP_CLEAR_DATA,
            DID_ENTER_PRELOAD_SKIP_LAYOUT => Self::DID_ENTER_PRELOAD_SKIP_LAYOUT,
            DISABLE_A11Y_CACHE => Self::DISABLE_A11Y_CACHE,
            SKIP_A11Y_WAIT => Self::SKIP_A11Y_WAIT,
            NEW_DEFAULT_CELL_LAYOUT_MODE => Self::NEW_DEFAULT_CELL_LAYOUT_MODE,
            DISPATCH_APPLY => Self::DISPATCH_APPLY,
            IMAGE_DOWNLOADER_PRIORITY => Self::IMAGE_DOWNLOADER_PRIORITY,
            TEXT_DRAWING => Self::TEXT_DRAWING,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for FeatureSet {
    fn from(bits: u32) -> Self {
        // Retain rather than truncate: unknown bits are tolerated on lookup
        // and must survive a load/store round-trip of the raw mask.
        Self::from_bits_retain(bits)
    }
}

impl Serialize for FeatureSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.names())
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_names(&names))
    }
}
