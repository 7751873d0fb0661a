//! RNG seed derivation for deterministic replays.
//!
//! A seeded game derives one dealing seed per hand from its base seed, so the
//! same base seed always reproduces the same sequence of deals.

/// Derive the seed used to shuffle the deck for a 0-based hand number.
///
/// # Arguments
///
/// * `game_seed` - Base RNG seed configured for the game
/// * `hand_no` - Hand index within the game (0 for the first hand)
pub fn derive_dealing_seed(game_seed: u64, hand_no: u32) -> u64 {
    // Large odd multiplier keeps consecutive hands far apart in seed space
    game_seed
        .wrapping_add((hand_no as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(2)
}
