use poker_hands::evaluator::{compare, Category};
use poker_hands::hand::Hand;
use std::cmp::Ordering;

fn hand(input: &str) -> Hand {
    input.parse().expect("valid hand")
}

fn cmp(a: &str, b: &str) -> Ordering {
    compare(&hand(a), &hand(b))
}

#[test]
fn high_card_compares_every_card() {
    assert_eq!(cmp("TC 4H 7D KC 2S", "TC 4H 7D KC 2S"), Ordering::Equal);
    assert_eq!(cmp("TC 4H 7D KC 2S", "TC 3H 8C KD 6H"), Ordering::Less);
    assert_eq!(cmp("TC 3H 8C KD 6H", "TC 4H 7D KC 2S"), Ordering::Greater);
}

#[test]
fn pair_beats_lower_pair() {
    assert_eq!(cmp("KC KH 7D 2C 5S", "QC QH 7D 2C 5S"), Ordering::Greater);
}

#[test]
fn pair_kicker_breaks_ties() {
    assert_eq!(cmp("KC KH 7D 2C 5S", "KC KH 8D 2C 5S"), Ordering::Less);
    assert_eq!(cmp("KC KH 8D 2C 5S", "KC KH 8S 2C 5S"), Ordering::Equal);
}

#[test]
fn pair_ignores_kickers_below_the_highest() {
    assert_eq!(cmp("KC KH 8D 2C 3S", "KC KH 8S 6C 5S"), Ordering::Equal);
}

#[test]
fn two_pair_ordering_pairs_then_kicker() {
    let lower = hand("KC KH 7D 7C 5S");
    let higher = hand("KC KH 8D 8C 5S");
    assert_eq!(lower.category(), Category::TwoPair);
    assert_eq!(higher.category(), Category::TwoPair);
    assert_eq!(compare(&lower, &higher), Ordering::Less);
    assert_eq!(compare(&higher, &lower), Ordering::Greater);

    assert_eq!(cmp("KC KH 7D 7C 5S", "KC KH 7S 7D 5S"), Ordering::Equal);
    assert_eq!(cmp("KC KH 7D 7C 5S", "KC KH 7S 7D 6S"), Ordering::Less);
    assert_eq!(cmp("KC KH 8D 8C 5S", "KC KH 7S 7D 5S"), Ordering::Greater);
}

#[test]
fn two_pair_high_pair_decides_before_low_pair() {
    assert_eq!(cmp("AC AH 2D 2C 3S", "KC KH QD QC JS"), Ordering::Greater);
}

#[test]
fn trips_order_by_trip_rank_then_all_cards() {
    let first = hand("KC KH KD 7C 5S");
    let same = hand("KS KH KD 7C 5S");
    let queens = hand("QC QH QD 7H 5D");
    let better_kicker = hand("KS KH KD 7D 6H");

    assert_eq!(compare(&first, &same), Ordering::Equal);
    assert_eq!(compare(&first, &queens), Ordering::Greater);
    assert_eq!(compare(&queens, &same), Ordering::Less);
    assert_eq!(compare(&better_kicker, &first), Ordering::Greater);
}

#[test]
fn straights_order_by_top_card() {
    assert_eq!(cmp("3C 4H 5D 6C 7S", "3D 4C 5H 6S 7H"), Ordering::Equal);
    assert_eq!(cmp("3C 4H 5D 6C 7S", "4C 5H 6D 7C 8S"), Ordering::Less);
    assert_eq!(cmp("4C 5H 6D 7C 8S", "3C 4H 5D 6C 7S"), Ordering::Greater);
}

#[test]
fn flushes_order_by_high_cards() {
    assert_eq!(cmp("KC QC 9C 8C 2C", "KD QD 9D 8D 2D"), Ordering::Equal);
    assert_eq!(cmp("KC QC 9C 8C 2C", "KH QH 9H 8H 3H"), Ordering::Less);
}

#[test]
fn full_house_trips_then_pair() {
    assert_eq!(cmp("KC KH KD 7C 7C", "QC QH QD 7C 7C"), Ordering::Greater);
    assert_eq!(cmp("KC KH KD 7C 7C", "KC KH KD 8C 8C"), Ordering::Less);
    assert_eq!(cmp("KC KH KD 7C 7C", "KC KH KD 7D 7H"), Ordering::Equal);
    assert_eq!(cmp("KC KH KD 8C 8C", "KC KH KD 7C 7C"), Ordering::Greater);
}

#[test]
fn four_of_a_kind_by_quad_rank() {
    assert_eq!(cmp("6S 6D 6H 6C KS", "4S 4D 4H 4C KD"), Ordering::Greater);
    assert_eq!(cmp("4S 4D 4H 4C KD", "6S 6D 6H 6C KS"), Ordering::Less);
}

#[test]
fn straight_flush_by_top_card() {
    assert_eq!(cmp("2S 3S 4S 5S 6S", "3S 4S 5S 6S 7S"), Ordering::Less);
    assert_eq!(cmp("2S 3S 4S 5S 6S", "2D 3D 4D 5D 6D"), Ordering::Equal);
    assert_eq!(cmp("3S 4S 5S 6S 7S", "2S 3S 4S 5S 6S"), Ordering::Greater);
}

#[test]
fn royal_flush_beats_straight_flush_and_ties_itself() {
    assert_eq!(cmp("TS JS QS KS AS", "9H TH JH QH KH"), Ordering::Greater);
    assert_eq!(cmp("TS JS QS KS AS", "TD JD QD KD AD"), Ordering::Equal);
}
