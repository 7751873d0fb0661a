pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 32;

/// Cards each player holds before trump is chosen.
pub const CARDS_BEFORE_TRUMP: usize = 5;
/// Cards each player holds once trump is locked; also the tricks per hand.
pub const CARDS_PER_PLAYER: usize = 8;

/// Points available in one hand: three plain suits at 30 and trump at 62.
pub const HAND_POINTS: u16 = 152;

pub const DEFAULT_TARGET_SCORE: u32 = 1000;
