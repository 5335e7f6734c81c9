//! One scoring function per game format.
//!
//! Every public scorer has the same shape:
//!
//! ```ignore
//! pub fn score(round: &Round, game: &Game) -> <Format>Result
//! ```
//!
//! Scorers read nothing but their arguments, never fail, and return a fresh
//! result on every call. The engine reaches them through its lookup table in
//! `engine.rs`.

pub mod best_ball;
pub mod match_play;
pub mod nassau;
pub mod skins;
pub mod stableford;
pub mod three_point;
pub mod unimplemented;
pub mod wolf;
