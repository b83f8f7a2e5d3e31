use crate::cards::Rank;

/// The only rank set that makes a royal flush when suited.
const ROYAL_RANKS: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Whether five ranks form a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    /// Ranks are exactly Ten through Ace.
    pub is_royal_run: bool,
}

impl StraightInfo {
    /// Detect a straight from five ranks in any order.
    /// Ace is always high: A-2-3-4-5 is not a straight.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort();

        // Distinct ranks stepping by one; a repeated rank breaks the run.
        let is_straight = sorted.windows(2).all(|w| w[1].strength() == w[0].strength() + 1);
        let is_royal_run = sorted == ROYAL_RANKS;

        StraightInfo { is_straight, is_royal_run }
    }
}
