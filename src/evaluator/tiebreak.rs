use super::hand_analysis::HandAnalysis;
use crate::evaluator::Category;
use core::cmp::Ordering;

/// Order two analyses that were both classified as `category`.
pub(crate) fn compare(category: Category, a: &HandAnalysis, b: &HandAnalysis) -> Ordering {
    match category {
        Category::RoyalFlush => Ordering::Equal,
        Category::StraightFlush | Category::Flush | Category::Straight | Category::HighCard => {
            compare_high_cards(a, b)
        }
        Category::FourOfAKind => compare_group(a, b, 4),
        Category::FullHouse => compare_group(a, b, 3).then_with(|| compare_group(a, b, 2)),
        // The triple is compared again by the high-card pass; the result is unchanged.
        Category::ThreeOfAKind => compare_group(a, b, 3).then_with(|| compare_high_cards(a, b)),
        Category::TwoPair => compare_pairs(a, b).then_with(|| compare_kicker(a, b, 2)),
        Category::Pair => compare_group(a, b, 2).then_with(|| compare_kicker(a, b, 2)),
    }
}

/// Lexicographic comparison of all five ranks, highest first.
fn compare_high_cards(a: &HandAnalysis, b: &HandAnalysis) -> Ordering {
    a.ranks_desc().cmp(&b.ranks_desc())
}

/// Compare the ranks holding exactly `size` cards.
fn compare_group(a: &HandAnalysis, b: &HandAnalysis, size: usize) -> Ordering {
    a.rank_groups.rank_of_size(size).cmp(&b.rank_groups.rank_of_size(size))
}

/// Compare both paired ranks, higher pair first.
fn compare_pairs(a: &HandAnalysis, b: &HandAnalysis) -> Ordering {
    a.rank_groups.ranks_of_size(2).cmp(&b.rank_groups.ranks_of_size(2))
}

/// Compare the highest rank outside the groups of exactly `size` cards.
fn compare_kicker(a: &HandAnalysis, b: &HandAnalysis, size: usize) -> Ordering {
    a.rank_groups.max_rank_outside(size).cmp(&b.rank_groups.max_rank_outside(size))
}
