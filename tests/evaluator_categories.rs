use poker_hands::cards::{Card, Rank, Suit};
use poker_hands::evaluator::{classify, Category};
use poker_hands::hand::Hand;

fn hand(input: &str) -> Hand {
    input.parse().expect("valid hand")
}

#[test]
fn category_royal_flush() {
    let royal = [
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Ace, Suit::Spades),
    ];
    assert_eq!(classify(&royal), Category::RoyalFlush);
    assert_eq!(hand("AH KH QH JH TH").category(), Category::RoyalFlush);
}

#[test]
fn category_straight_flush() {
    assert_eq!(hand("2S 3S 4S 5S 6S").category(), Category::StraightFlush);
    assert_eq!(hand("9D KD TD QD JD").category(), Category::StraightFlush);
}

#[test]
fn category_four_of_a_kind() {
    assert_eq!(hand("6S 6D 6H 6C KS").category(), Category::FourOfAKind);
}

#[test]
fn category_full_house() {
    assert_eq!(hand("KC KH KD 7C 7C").category(), Category::FullHouse);
    assert_eq!(hand("3C JS 3D JC 3H").category(), Category::FullHouse);
}

#[test]
fn category_flush() {
    assert_eq!(hand("KC QC 9C 8C 2C").category(), Category::Flush);
}

#[test]
fn category_straight() {
    assert_eq!(hand("3C 4H 5D 6C 7S").category(), Category::Straight);
    assert_eq!(hand("TC JH QD KC AS").category(), Category::Straight);
}

#[test]
fn ace_is_never_low() {
    assert_eq!(hand("AC 2H 3D 4C 5S").category(), Category::HighCard);
}

#[test]
fn category_three_of_a_kind() {
    assert_eq!(hand("KC KH KD 7C 5S").category(), Category::ThreeOfAKind);
}

#[test]
fn category_two_pair() {
    assert_eq!(hand("KC KH 7D 7C 5S").category(), Category::TwoPair);
}

#[test]
fn category_pair() {
    assert_eq!(hand("KC KH 7D 2C 5S").category(), Category::Pair);
}

#[test]
fn category_high_card() {
    assert_eq!(hand("TC 4H 7D KC 2S").category(), Category::HighCard);
}

#[test]
fn category_is_stable_for_the_same_input() {
    let a = hand("KC KH 7D 2C 5S");
    let b = hand("KC KH 7D 2C 5S");
    assert_eq!(a.category(), b.category());
    assert_eq!(a.cards(), b.cards());
    assert_eq!(classify(a.cards()), a.category());
}
