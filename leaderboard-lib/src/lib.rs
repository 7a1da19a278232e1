mod participant;
#[cfg(any(test, feature = "proptest"))]
mod arbitrary;

use std::collections::HashSet;
use thiserror::Error;

pub use participant::{Participant, ProfileId, RawLeaderboard};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("participant {0} appears more than once in the leaderboard")]
    DuplicateParticipant(ProfileId),
}

/// Validated contest leaderboard.
///
/// Participants are kept in the order the contest API returned them: that is the
/// order the draw walks when accumulating weights, so it must not be altered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaderboard {
    participants: Vec<Participant>,
}

/// A participant together with its position on the displayed leaderboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub participant: &'a Participant,
}

impl Leaderboard {
    pub fn from_raw(raw: RawLeaderboard) -> Result<Self, Error> {
        let mut seen = HashSet::with_capacity(raw.0.len());
        for participant in &raw.0 {
            if !seen.insert(participant.profile_id.as_str()) {
                return Err(Error::DuplicateParticipant(participant.profile_id.clone()));
            }
        }
        Ok(Self { participants: raw.0 })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, profile_id: &str) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|participant| participant.profile_id == profile_id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn total_claimed_referrals(&self) -> u64 {
        self.participants
            .iter()
            .map(|participant| participant.claimed_referrals)
            .sum()
    }

    /// Leaderboard in display order: most claimed referrals first, then most total
    /// referrals, then API order.
    ///
    /// Ranks are 1-based and participants with the same counters share a rank,
    /// the next distinct entry skipping the shared positions (1, 2, 2, 4).
    pub fn ranked(&self) -> Vec<RankedEntry<'_>> {
        let mut sorted = self.participants.iter().collect::<Vec<_>>();
        // sort_by is stable, ties keep API order
        sorted.sort_by(|a, b| {
            b.claimed_referrals
                .cmp(&a.claimed_referrals)
                .then(b.total_referrals.cmp(&a.total_referrals))
        });

        let mut ranked: Vec<RankedEntry<'_>> = Vec::with_capacity(sorted.len());
        for (position, participant) in sorted.into_iter().enumerate() {
            let rank = match ranked.last() {
                Some(prev)
                    if prev.participant.claimed_referrals == participant.claimed_referrals
                        && prev.participant.total_referrals == participant.total_referrals =>
                {
                    prev.rank
                }
                _ => position + 1,
            };
            ranked.push(RankedEntry { rank, participant });
        }
        ranked
    }
}

impl TryFrom<RawLeaderboard> for Leaderboard {
    type Error = Error;

    fn try_from(raw: RawLeaderboard) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}
