//! Action head registry for the multi-embodiment policy

/// Action dimensionality for a named head, when the head is known.
///
/// Each head decodes the shared trunk into one embodiment's action vector,
/// and its dimensionality fixes the expected normalization mask length.
/// Unknown names are permitted (custom heads) and return `None`, which
/// skips the mask length check.
pub fn action_dim_for_head(head_name: &str) -> Option<usize> {
    match head_name {
        // 6-DoF end effector delta plus gripper
        "single_arm" => Some(7),
        "bimanual" => Some(14),
        "nav" => Some(2),
        "quadruped" => Some(12),
        _ => None,
    }
}
