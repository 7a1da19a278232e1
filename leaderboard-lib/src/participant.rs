use serde::{Deserialize, Serialize};

pub type ProfileId = String;

/// A single row of the referral contest leaderboard, as returned by the contest API.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub profile_id: ProfileId,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub username: Option<String>,
    /// Every referral the participant brought in, accepted or not
    #[serde(default)]
    pub total_referrals: u64,
    /// Referrals that were accepted. This is what counts for the draw.
    #[serde(default)]
    pub claimed_referrals: u64,
}

/// Leaderboard rows exactly as exported, in API order and without any validation.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RawLeaderboard(pub(crate) Vec<Participant>);

impl From<Vec<Participant>> for RawLeaderboard {
    fn from(from: Vec<Participant>) -> Self {
        Self(from)
    }
}

impl RawLeaderboard {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing() {
        let raw: RawLeaderboard = serde_json::from_str(
            r#"[
            {
                "profile_id": "7f3c2a10",
                "full_name": "Anna Petrova",
                "username": "anna_p",
                "total_referrals": 14,
                "claimed_referrals": 9
            },
            {
                "profile_id": "0b91de44",
                "full_name": "Ivan",
                "username": null,
                "total_referrals": 3,
                "claimed_referrals": 0
            },
            {
                "profile_id": "c2e8f001",
                "full_name": "Maria"
            }
        ]"#,
        )
        .unwrap();

        assert_eq!(raw.len(), 3);
        assert_eq!(
            raw.0[0],
            Participant {
                profile_id: "7f3c2a10".to_string(),
                full_name: "Anna Petrova".to_string(),
                username: Some("anna_p".to_string()),
                total_referrals: 14,
                claimed_referrals: 9,
            }
        );
        assert_eq!(raw.0[1].username, None);
        assert_eq!(raw.0[1].claimed_referrals, 0);
        // counters missing from the payload read as zero
        assert_eq!(raw.0[2].total_referrals, 0);
        assert_eq!(raw.0[2].claimed_referrals, 0);
    }

    #[test]
    fn missing_profile_id_is_rejected() {
        let res = serde_json::from_str::<RawLeaderboard>(r#"[{"full_name": "Nobody"}]"#);
        assert!(res.is_err());
    }
}
