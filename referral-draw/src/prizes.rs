use crate::draw::Round;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Place = u32;
/// In-app energy, the contest currency
pub type Energy = u64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("at least one prize tier is required")]
    NoPrizes,
    #[error("prize place {0} is defined more than once")]
    DuplicatePlace(Place),
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PrizeTier {
    pub place: Place,
    pub energy: Energy,
    #[serde(default)]
    pub label: String,
}

impl PrizeTier {
    pub fn new(place: Place, energy: Energy, label: impl Into<String>) -> Self {
        Self {
            place,
            energy,
            label: label.into(),
        }
    }
}

/// Prize table of a contest, ordered by place.
///
/// The n-th round of a drawing session awards the n-th tier.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "Vec<PrizeTier>", into = "Vec<PrizeTier>")]
pub struct PrizeTiers(Vec<PrizeTier>);

impl PrizeTiers {
    pub fn new(mut tiers: Vec<PrizeTier>) -> Result<Self, Error> {
        if tiers.is_empty() {
            return Err(Error::NoPrizes);
        }
        tiers.sort_by_key(|tier| tier.place);
        if let Some(place) = tiers.iter().map(|tier| tier.place).duplicates().next() {
            return Err(Error::DuplicatePlace(place));
        }
        Ok(Self(tiers))
    }

    pub fn tiers(&self) -> &[PrizeTier] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tier_for_round(&self, round: Round) -> Option<&PrizeTier> {
        round.checked_sub(1).and_then(|index| self.0.get(index))
    }

    pub fn total_energy(&self) -> Energy {
        self.0.iter().map(|tier| tier.energy).sum()
    }
}

impl Default for PrizeTiers {
    fn default() -> Self {
        Self(vec![
            PrizeTier::new(1, 10_000, "1st place"),
            PrizeTier::new(2, 3_000, "2nd place"),
            PrizeTier::new(3, 2_000, "3rd place"),
        ])
    }
}

impl TryFrom<Vec<PrizeTier>> for PrizeTiers {
    type Error = Error;

    fn try_from(tiers: Vec<PrizeTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<PrizeTiers> for Vec<PrizeTier> {
    fn from(tiers: PrizeTiers) -> Self {
        tiers.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let prizes = PrizeTiers::default();
        assert_eq!(prizes.len(), 3);
        assert_eq!(prizes.total_energy(), 15_000);
        assert_eq!(prizes.tier_for_round(1).unwrap().energy, 10_000);
        assert_eq!(prizes.tier_for_round(3).unwrap().energy, 2_000);
        assert!(prizes.tier_for_round(0).is_none());
        assert!(prizes.tier_for_round(4).is_none());
    }

    #[test]
    fn tiers_are_ordered_by_place() {
        let prizes: PrizeTiers = serde_json::from_str(
            r#"[
                {"place": 2, "energy": 500, "label": "runner-up"},
                {"place": 1, "energy": 1000},
                {"place": 3, "energy": 100, "label": "third"}
            ]"#,
        )
        .unwrap();
        let places = prizes.tiers().iter().map(|t| t.place).collect::<Vec<_>>();
        assert_eq!(places, [1, 2, 3]);
        assert_eq!(prizes.tier_for_round(1).unwrap().label, "");
        assert_eq!(prizes.tier_for_round(2).unwrap().label, "runner-up");
    }

    #[test]
    fn invalid_tables_are_rejected() {
        assert_eq!(PrizeTiers::new(Vec::new()), Err(Error::NoPrizes));
        assert_eq!(
            PrizeTiers::new(vec![
                PrizeTier::new(1, 10, "a"),
                PrizeTier::new(2, 5, "b"),
                PrizeTier::new(1, 1, "c"),
            ]),
            Err(Error::DuplicatePlace(1))
        );
        assert!(serde_json::from_str::<PrizeTiers>("[]").is_err());
    }
}
