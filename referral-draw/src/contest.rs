use crate::draw::{self, Candidate, Round, Seed};
use crate::prizes::{Energy, Place, PrizeTiers};
use leaderboard_lib::{Leaderboard, Participant, ProfileId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Draw(#[from] draw::Error),

    #[error("drawn candidate {0} is not on the leaderboard")]
    UnknownWinner(ProfileId),
}

/// A prize awarded to a contest participant.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Winner {
    pub round: Round,
    pub place: Place,
    pub prize: Energy,
    pub profile_id: ProfileId,
    pub full_name: String,
    pub claimed_referrals: u64,
}

impl From<&Participant> for Candidate {
    fn from(participant: &Participant) -> Self {
        Candidate::new(participant.profile_id.clone(), participant.claimed_referrals)
    }
}

/// Drawing pool of the contest: one candidate per participant, weighted by claimed
/// referrals, in leaderboard order.
pub fn candidates(leaderboard: &Leaderboard) -> Vec<Candidate> {
    leaderboard
        .participants()
        .iter()
        .map(Candidate::from)
        .collect()
}

/// Awards every prize tier to a distinct participant, starting from first place.
///
/// When there are fewer participants than tiers the lowest tiers are left unawarded.
pub fn draw_winners<R: Rng + ?Sized>(
    leaderboard: &Leaderboard,
    prizes: &PrizeTiers,
    rng: &mut R,
) -> Result<Vec<Winner>, Error> {
    if leaderboard.len() < prizes.len() {
        warn!(
            participants = leaderboard.len(),
            prizes = prizes.len(),
            "not enough participants to award every prize"
        );
    }

    let results = draw::run_session(candidates(leaderboard), prizes.len(), rng)?;

    results
        .into_iter()
        .zip(prizes.tiers())
        .map(|(result, tier)| {
            let participant = leaderboard
                .get(&result.candidate_id)
                .ok_or_else(|| Error::UnknownWinner(result.candidate_id.clone()))?;
            Ok(Winner {
                round: result.round,
                place: tier.place,
                prize: tier.energy,
                profile_id: participant.profile_id.clone(),
                full_name: participant.full_name.clone(),
                claimed_referrals: participant.claimed_referrals,
            })
        })
        .collect()
}

pub fn draw_winners_with_seed(
    leaderboard: &Leaderboard,
    prizes: &PrizeTiers,
    seed: Seed,
) -> Result<Vec<Winner>, Error> {
    let mut rng = ChaCha8Rng::from_seed(seed);
    draw_winners(leaderboard, prizes, &mut rng)
}
