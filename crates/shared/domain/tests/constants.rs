use velo_domain::constants::{GRAPHICS_CONTEXTS, TEXT_DRAWING, TEXT_NODE, UNFAIR_LOCK};

#[test]
fn constants_match_wire_strings() {
    assert_eq!(GRAPHICS_CONTEXTS, "exp_graphics_contexts");
    assert_eq!(TEXT_NODE, "exp_text_node");
    assert_eq!(UNFAIR_LOCK, "exp_unfair_lock");
    assert_eq!(TEXT_DRAWING, "exp_text_drawing");
}
