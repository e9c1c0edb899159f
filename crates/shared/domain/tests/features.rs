use proptest::prelude::*;
use velo_domain::constants::{GRAPHICS_CONTEXTS, TEXT_DRAWING, TEXT_NODE};
use velo_domain::features::{CATALOG, FeatureSet};

#[test]
fn catalog_bits_are_unique_and_fit_the_mask() {
    let mut seen = FeatureSet::empty();
    for (flag, name) in CATALOG {
        assert_eq!(flag.bits().count_ones(), 1, "{name} must map to a single bit");
        assert!(!seen.intersects(*flag), "{name} reuses an already assigned bit");
        seen |= *flag;
    }
    assert_eq!(seen, FeatureSet::cataloged());
}

#[test]
fn names_follow_catalog_order() {
    let set = FeatureSet::TEXT_DRAWING | FeatureSet::GRAPHICS_CONTEXTS;
    assert_eq!(set.names(), vec![GRAPHICS_CONTEXTS, TEXT_DRAWING]);
}

#[test]
fn single_flag_maps_both_ways() {
    assert_eq!(FeatureSet::from_names([TEXT_NODE]).bits(), 0b10);
    assert_eq!(FeatureSet::from(0b10).names(), vec![TEXT_NODE]);
    assert_eq!(FeatureSet::from(0b11).names(), vec![GRAPHICS_CONTEXTS, TEXT_NODE]);
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(FeatureSet::empty().names().is_empty());
    assert_eq!(FeatureSet::from_names(Vec::<String>::new()), FeatureSet::empty());
}

#[test]
fn unknown_names_are_ignored() {
    assert_eq!(FeatureSet::from_names(["not_a_real_flag"]), FeatureSet::empty());
    assert_eq!(
        FeatureSet::from_names(["not_a_real_flag", TEXT_NODE, "also_unknown"]),
        FeatureSet::TEXT_NODE
    );
}

#[test]
fn duplicate_names_set_the_bit_once() {
    assert_eq!(FeatureSet::from_names([TEXT_NODE, TEXT_NODE]), FeatureSet::TEXT_NODE);
}

#[test]
fn unknown_bits_are_skipped_on_lookup() {
    let mask = FeatureSet::from(FeatureSet::TEXT_NODE.bits() | (1 << 27) | (1 << 31));
    assert_eq!(mask.names(), vec![TEXT_NODE]);
}

#[test]
fn all_sentinel_yields_every_name_once_in_order() {
    let names = FeatureSet::ALL.names();
    assert_eq!(names.len(), CATALOG.len());
    for (got, (_, expected)) in names.iter().zip(CATALOG) {
        assert_eq!(got, expected);
    }
}

#[test]
fn wildcard_names_mean_all() {
    assert_eq!(FeatureSet::from("all"), FeatureSet::ALL);
    assert_eq!(FeatureSet::from("*"), FeatureSet::ALL);
}

#[test]
fn serde_uses_the_wire_name_array() {
    let set = FeatureSet::GRAPHICS_CONTEXTS | FeatureSet::TEXT_NODE;
    let json = serde_json::to_string(&set).expect("serialize feature set");
    assert_eq!(json, r#"["exp_graphics_contexts","exp_text_node"]"#);

    let back: FeatureSet = serde_json::from_str(&json).expect("deserialize feature set");
    assert_eq!(back, set);

    let tolerant: FeatureSet =
        serde_json::from_str(r#"["exp_text_node","exp_from_the_future"]"#).expect("deserialize");
    assert_eq!(tolerant, FeatureSet::TEXT_NODE);
}

proptest! {
    #[test]
    fn names_round_trip_for_any_cataloged_subset(bits in any::<u32>()) {
        let subset = FeatureSet::from(bits) & FeatureSet::cataloged();
        prop_assert_eq!(FeatureSet::from_names(subset.names()), subset);
    }

    #[test]
    fn lookup_never_panics_on_arbitrary_masks(bits in any::<u32>()) {
        let names = FeatureSet::from(bits).names();
        prop_assert!(names.len() <= CATALOG.len());
    }
}
