use crate::cards::{Card, Rank};

/// The cards of a hand that share one rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroup {
    rank: Rank,
    cards: Vec<Card>,
}

impl RankGroup {
    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in this group.
    pub fn size(&self) -> usize {
        self.cards.len()
    }
}

/// Cards of a hand grouped by rank, sorted by (size desc, rank desc).
///
/// Example: KKK75 groups as [(King, 3), (Seven, 1), (Five, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<RankGroup>,
}

impl RankGroups {
    /// Group cards by rank. Each rank appears as at most one key.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut groups: Vec<RankGroup> = Vec::with_capacity(cards.len());
        for &card in cards {
            match groups.iter_mut().find(|g| g.rank == card.rank()) {
                Some(group) => group.cards.push(card),
                None => groups.push(RankGroup { rank: card.rank(), cards: vec![card] }),
            }
        }

        groups.sort_by(|a, b| b.size().cmp(&a.size()).then(b.rank.cmp(&a.rank)));

        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankGroup> {
        self.groups.iter()
    }

    /// Cards with the given rank, if any.
    pub fn get(&self, rank: Rank) -> Option<&[Card]> {
        self.groups.iter().find(|g| g.rank == rank).map(RankGroup::cards)
    }

    /// Number of distinct ranks.
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    /// Number of ranks holding exactly `size` cards.
    pub fn count_of_size(&self, size: usize) -> usize {
        self.groups.iter().filter(|g| g.size() == size).count()
    }

    /// Highest rank holding exactly `size` cards.
    pub fn rank_of_size(&self, size: usize) -> Option<Rank> {
        self.groups.iter().find(|g| g.size() == size).map(RankGroup::rank)
    }

    /// All ranks holding exactly `size` cards, in descending order.
    pub fn ranks_of_size(&self, size: usize) -> Vec<Rank> {
        self.groups.iter().filter(|g| g.size() == size).map(RankGroup::rank).collect()
    }

    /// Highest rank among the cards that are not in a group of exactly `size` cards.
    /// This is the kicker lookup for pair-based categories.
    pub fn max_rank_outside(&self, size: usize) -> Option<Rank> {
        self.groups.iter().filter(|g| g.size() != size).map(RankGroup::rank).max()
    }
}
