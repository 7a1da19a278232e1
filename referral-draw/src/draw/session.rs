use super::{pick, Candidate, DrawResult, Error, Round};
use rand::Rng;
use tracing::debug;

/// A drawing session advanced one round at a time.
///
/// The session owns its copy of the pool, so drawing never affects the pool the caller
/// started from. Starting over is a matter of creating a new session.
#[derive(Clone, Debug)]
pub struct Session {
    pool: Vec<Candidate>,
    rounds: usize,
    results: Vec<DrawResult>,
}

impl Session {
    pub fn new(pool: Vec<Candidate>, rounds: usize) -> Result<Self, Error> {
        if rounds == 0 {
            return Err(Error::NoRounds);
        }
        Ok(Self {
            results: Vec::with_capacity(rounds.min(pool.len())),
            pool,
            rounds,
        })
    }

    /// Candidates still in the game, in their original order.
    pub fn remaining(&self) -> &[Candidate] {
        &self.pool
    }

    pub fn results(&self) -> &[DrawResult] {
        &self.results
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn next_round(&self) -> Round {
        self.results.len() + 1
    }

    pub fn is_finished(&self) -> bool {
        self.results.len() >= self.rounds || self.pool.is_empty()
    }

    /// Draws the winner of the next round and takes it out of the pool.
    ///
    /// Returns `None` once every round has been drawn or nobody is left.
    pub fn draw_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&DrawResult> {
        if self.is_finished() {
            return None;
        }

        let round = self.next_round();
        let index = pick(&self.pool, rng);
        let winner = self.pool.remove(index);
        debug!(
            round,
            candidate = %winner.id,
            weight = winner.weight,
            remaining = self.pool.len(),
            "round drawn"
        );

        self.results.push(DrawResult {
            candidate_id: winner.id,
            round,
        });
        self.results.last()
    }

    pub fn into_results(self) -> Vec<DrawResult> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{draw_with_seed, total_weight};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pool() -> Vec<Candidate> {
        vec![
            Candidate::new("a", 4),
            Candidate::new("b", 0),
            Candidate::new("c", 12),
            Candidate::new("d", 1),
            Candidate::new("e", 7),
        ]
    }

    #[test]
    fn stepping_matches_a_full_run() {
        let seed = [17u8; 32];
        let mut rng = ChaCha8Rng::from_seed(seed);
        let mut session = Session::new(pool(), 3).unwrap();
        let mut stepped = Vec::new();
        while let Some(result) = session.draw_next(&mut rng) {
            stepped.push(result.clone());
        }
        assert_eq!(stepped, draw_with_seed(pool(), 3, seed).unwrap());
        assert_eq!(session.results(), stepped.as_slice());
    }

    #[test]
    fn winners_leave_the_pool() {
        let mut rng = ChaCha8Rng::from_seed([2u8; 32]);
        let mut session = Session::new(pool(), 5).unwrap();
        let mut previous_weight = total_weight(session.remaining());

        while let Some(result) = session.draw_next(&mut rng) {
            let winner = result.candidate_id.clone();
            assert!(session.remaining().iter().all(|c| c.id != winner));
            let weight = total_weight(session.remaining());
            assert!(weight < previous_weight);
            previous_weight = weight;
        }
        assert!(session.remaining().is_empty());
        assert_eq!(session.into_results().len(), 5);
    }

    #[test]
    fn remaining_keeps_pool_order() {
        let mut rng = ChaCha8Rng::from_seed([8u8; 32]);
        let mut session = Session::new(pool(), 2).unwrap();
        session.draw_next(&mut rng).unwrap();
        session.draw_next(&mut rng).unwrap();

        let order = ["a", "b", "c", "d", "e"];
        let positions = session
            .remaining()
            .iter()
            .map(|c| order.iter().position(|id| *id == c.id).unwrap())
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn finished_sessions_stop_drawing() {
        let mut rng = ChaCha8Rng::from_seed([0u8; 32]);
        let mut session = Session::new(pool(), 1).unwrap();
        assert!(!session.is_finished());
        assert_eq!(session.next_round(), 1);
        assert_eq!(session.draw_next(&mut rng).map(|r| r.round), Some(1));
        assert!(session.is_finished());
        assert!(session.draw_next(&mut rng).is_none());
        assert_eq!(session.remaining().len(), 4);
        assert_eq!(session.rounds(), 1);
    }

    #[test]
    fn zero_rounds_are_rejected() {
        assert!(matches!(Session::new(pool(), 0), Err(Error::NoRounds)));
    }
}
