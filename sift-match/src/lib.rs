//! # sift-match
//!
//! Pure candidate-vs-job scoring. No I/O, no randomness, no shared state:
//! any number of candidate/job pairs may be scored concurrently.

mod factors;
mod recommendations;
mod scorer;

pub use scorer::{score, score_with_weights, ScoreWeights};
