//! Card piles.
//!
//! ## Key Types
//!
//! - `Piles`: draw, hand, discard, and exhaust piles of one combat
//! - `Pile`: names a pile for counts and inspection

pub mod piles;

pub use piles::{Pile, Piles};
