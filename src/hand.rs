use crate::cards::{Card, CardParseError};
use crate::evaluator::hand_analysis::HandAnalysis;
use crate::evaluator::{self, Category, RankGroups};
use core::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a hand must contain exactly 5 cards, got {0}")]
    CardCount(usize),
    #[error(transparent)]
    Card(#[from] CardParseError),
}

/// Five cards sorted ascending by rank, with their category computed once at construction.
///
/// Duplicate cards are accepted: a hand is not checked against a real deck.
///
/// Equality and ordering compare hand *strength*: two hands are equal when neither beats the
/// other, even if their cards differ. Compare [`Hand::cards`] for card identity.
///
/// ```
/// use poker_hands::evaluator::Category;
/// use poker_hands::hand::Hand;
///
/// let straight_flush: Hand = "2S 3S 4S 5S 6S".parse().unwrap();
/// let royal: Hand = "TS JS QS KS AS".parse().unwrap();
/// assert_eq!(straight_flush.category(), Category::StraightFlush);
/// assert_eq!(royal.category(), Category::RoyalFlush);
/// assert!(royal > straight_flush);
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    analysis: HandAnalysis,
    category: Category,
}

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        let analysis = HandAnalysis::new(&cards);
        let category = evaluator::classify_analysis(&analysis);
        let hand = Self { analysis, category };
        log::trace!("classified {hand} as {category}");
        hand
    }

    /// Build a hand from a slice that must hold exactly five cards.
    pub fn try_from_cards(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| HandError::CardCount(cards.len()))?;
        Ok(Self::new(cards))
    }

    /// The cards, weakest rank first.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.analysis.sorted_cards
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The hand's cards grouped by rank.
    pub fn rank_groups(&self) -> &RankGroups {
        &self.analysis.rank_groups
    }

    pub(crate) fn analysis(&self) -> &HandAnalysis {
        &self.analysis
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self::new(cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::try_from_cards(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_from_cards(&cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parse five whitespace-separated cards such as `"KC KH 7D 2C 5S"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != HAND_SIZE {
            log::debug!("rejected hand {s:?}: {} cards", tokens.len());
            return Err(HandError::CardCount(tokens.len()));
        }
        let cards = tokens
            .into_iter()
            .map(Card::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                log::debug!("rejected hand {s:?}: {e}");
                e
            })?;
        Self::try_from_cards(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        evaluator::compare(self, other)
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

/// Sort hands from weakest to strongest. Equally strong hands keep their relative order.
///
/// ```
/// use poker_hands::hand::{sort_hands, Hand};
///
/// let mut hands: Vec<Hand> = ["2S 3S 4S 5S 6S", "TC 4H 7D KC 2S"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// sort_hands(&mut hands);
/// assert_eq!(hands[0].to_string(), "2S 4H 7D TC KC");
/// ```
pub fn sort_hands(hands: &mut [Hand]) {
    hands.sort_by(evaluator::compare);
}
