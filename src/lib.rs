//! poker-hands: five-card poker hand classification and ranking
//!
//! Goals:
//! - Classify any five cards into one of ten categories, High Card to Royal Flush
//! - Total ordering between hands so collections sort weakest to strongest
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: rank a few hands
//! ```
//! use poker_hands::evaluator::Category;
//! use poker_hands::hand::{sort_hands, Hand};
//!
//! let mut hands: Vec<Hand> = ["KC KH 7D 7C 5S", "TS JS QS KS AS", "KC KH 8D 8C 5S"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! sort_hands(&mut hands);
//!
//! assert_eq!(hands[0].to_string(), "5S 7D 7C KC KH");
//! assert_eq!(hands[2].category(), Category::RoyalFlush);
//! ```
//!
//! ## CLI
//! Rank hands from the command line with:
//! ```sh
//! cargo run --bin poker-hands -- "KC KH 7D 2C 5S" "QC QH 7D 2C 5S"
//! ```

pub mod cards;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
