//! Weighted drawing without replacement.
//!
//! Every candidate holds a number of tickets equal to its referral count, with a floor of
//! one ticket so that candidates without referrals are still in the game. Each round draws
//! a single winner with probability proportional to its tickets, and the winner leaves the
//! pool before the next round.

mod session;

use rand::{Rng, SeedableRng};
use rand_chacha::{ChaCha8Rng, ChaChaRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub use session::Session;

pub type Seed = <ChaChaRng as SeedableRng>::Seed;
pub type CandidateId = String;
pub type Weight = u64;
/// 1-based index of a draw within a session
pub type Round = usize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("cannot draw from an empty pool")]
    EmptyPool,
    #[error("a drawing session needs at least one round")]
    NoRounds,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub id: CandidateId,
    pub weight: Weight,
}

impl Candidate {
    pub fn new(id: impl Into<CandidateId>, weight: Weight) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }

    /// Tickets actually held in the draw, never less than one.
    #[inline]
    pub fn effective_weight(&self) -> Weight {
        self.weight.max(1)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DrawResult {
    pub candidate_id: CandidateId,
    pub round: Round,
}

/// Sum of the effective weights of the pool.
pub fn total_weight(pool: &[Candidate]) -> f64 {
    pool.iter()
        .map(|candidate| candidate.effective_weight() as f64)
        .sum()
}

/// Picks the candidate owning the ticket at `target`.
///
/// The pool is walked in order, subtracting each effective weight from `target`; the
/// first candidate bringing the remainder to zero or below wins. A target past the total
/// weight, which only floating point drift can produce, falls back to the last candidate.
pub fn select(pool: &[Candidate], target: f64) -> Result<&Candidate, Error> {
    if pool.is_empty() {
        return Err(Error::EmptyPool);
    }
    Ok(&pool[walk(pool, target)])
}

/// Draws one winner from `pool`, which is left untouched: removing the winner before the
/// next round is up to the caller.
pub fn draw_one<'a, R: Rng + ?Sized>(
    pool: &'a [Candidate],
    rng: &mut R,
) -> Result<&'a Candidate, Error> {
    if pool.is_empty() {
        return Err(Error::EmptyPool);
    }
    Ok(&pool[pick(pool, rng)])
}

/// Runs a full session over `pool`, drawing up to `rounds` distinct winners.
///
/// Fewer than `rounds` results are returned if the pool runs out first.
pub fn run_session<R: Rng + ?Sized>(
    pool: Vec<Candidate>,
    rounds: usize,
    rng: &mut R,
) -> Result<Vec<DrawResult>, Error> {
    let pool_size = pool.len();
    let mut session = Session::new(pool, rounds)?;
    while session.draw_next(rng).is_some() {}

    let results = session.into_results();
    info!(
        pool_size,
        rounds,
        drawn = results.len(),
        "drawing session completed"
    );
    Ok(results)
}

/// Same as [`run_session`], with the random stream fully determined by `seed`.
pub fn draw_with_seed(
    pool: Vec<Candidate>,
    rounds: usize,
    seed: Seed,
) -> Result<Vec<DrawResult>, Error> {
    let mut rng = ChaCha8Rng::from_seed(seed);
    run_session(pool, rounds, &mut rng)
}

// `pool` must not be empty
fn pick<R: Rng + ?Sized>(pool: &[Candidate], rng: &mut R) -> usize {
    let target = rng.gen::<f64>() * total_weight(pool);
    walk(pool, target)
}

fn walk(pool: &[Candidate], target: f64) -> usize {
    let mut remainder = target;
    for (index, candidate) in pool.iter().enumerate() {
        remainder -= candidate.effective_weight() as f64;
        if remainder <= 0.0 {
            return index;
        }
    }
    pool.len().saturating_sub(1)
}
