use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a 5-card hand.
/// Built once per hand and shared by the category detectors and tie-breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandAnalysis {
    /// Cards sorted ascending by rank; equal ranks keep their input order.
    pub sorted_cards: [Card; 5],
    /// Ranks of `sorted_cards`, ascending.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by_key(|c| c.rank());

        let ranks = sorted_cards.map(Card::rank);

        let rank_groups = RankGroups::from_cards(&sorted_cards);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { sorted_cards, ranks, rank_groups, suit_info, straight_info }
    }

    /// Ranks from strongest to weakest, the order used by high-card comparisons.
    pub fn ranks_desc(&self) -> [Rank; 5] {
        let mut desc = self.ranks;
        desc.reverse();
        desc
    }
}
