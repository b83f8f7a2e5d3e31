pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;
pub(crate) mod tiebreak;

pub use rank_groups::{RankGroup, RankGroups};

use crate::cards::Card;
use crate::hand::Hand;
use core::cmp::Ordering;
use core::fmt;
use detector::DETECTORS;
use hand_analysis::HandAnalysis;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    /// All categories, weakest first.
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Primary sort key in `1..=10`.
    pub const fn strength(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify exactly five cards.
///
/// ```
/// use poker_hands::cards::parse_cards;
/// use poker_hands::evaluator::{classify, Category};
///
/// let cards: [_; 5] = parse_cards("KC KH 7D 2C 5S").unwrap().try_into().unwrap();
/// assert_eq!(classify(&cards), Category::Pair);
/// ```
pub fn classify(cards: &[Card; 5]) -> Category {
    classify_analysis(&HandAnalysis::new(cards))
}

/// Check categories in priority order (highest to lowest) and return the first match.
pub(crate) fn classify_analysis(analysis: &HandAnalysis) -> Category {
    DETECTORS
        .iter()
        .find(|detector| detector.detect(analysis))
        .map_or(Category::HighCard, |detector| detector.category())
}

/// Total order over hands: category first, then the category's tie-break rules.
///
/// ```
/// use poker_hands::evaluator::compare;
/// use poker_hands::hand::Hand;
/// use std::cmp::Ordering;
///
/// let kings: Hand = "KC KH 7D 2C 5S".parse().unwrap();
/// let queens: Hand = "QC QH 7D 2C 5S".parse().unwrap();
/// assert_eq!(compare(&kings, &queens), Ordering::Greater);
/// ```
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    match a.category().cmp(&b.category()) {
        Ordering::Equal => tiebreak::compare(a.category(), a.analysis(), b.analysis()),
        unequal => unequal,
    }
}

/// Tie-break two hands of the same category.
///
/// Both hands must share a category; [`compare`] is the entry point that guarantees it.
/// Debug builds assert the precondition. Release builds apply the first hand's rules.
pub fn compare_same_category(a: &Hand, b: &Hand) -> Ordering {
    debug_assert_eq!(
        a.category(),
        b.category(),
        "tie-break requires hands of the same category: {a} vs {b}"
    );
    tiebreak::compare(a.category(), a.analysis(), b.analysis())
}
