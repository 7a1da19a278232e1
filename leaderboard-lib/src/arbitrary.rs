use crate::{Leaderboard, Participant, RawLeaderboard};
use proptest::prelude::*;

impl Arbitrary for Participant {
    type Parameters = ();
    type Strategy = BoxedStrategy<Participant>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (
            "[a-f0-9]{8}",
            "[A-Za-z]{1,12}",
            proptest::option::of("[a-z_]{3,12}"),
            0..500u64,
        )
            .prop_flat_map(|(profile_id, full_name, username, total)| {
                (0..=total).prop_map(move |claimed| Participant {
                    profile_id: profile_id.clone(),
                    full_name: full_name.clone(),
                    username: username.clone(),
                    total_referrals: total,
                    claimed_referrals: claimed,
                })
            })
            .boxed()
    }
}

impl Arbitrary for RawLeaderboard {
    type Parameters = ();
    type Strategy = BoxedStrategy<RawLeaderboard>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<Vec<Participant>>().prop_map(Self).boxed()
    }
}

impl Arbitrary for Leaderboard {
    type Parameters = ();
    type Strategy = BoxedStrategy<Leaderboard>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        // random hex ids may collide, suffix them with their position to keep them unique
        proptest::collection::vec(any::<Participant>(), 0..64)
            .prop_map(|participants| Leaderboard {
                participants: participants
                    .into_iter()
                    .enumerate()
                    .map(|(i, mut participant)| {
                        participant.profile_id = format!("{}-{}", participant.profile_id, i);
                        participant
                    })
                    .collect(),
            })
            .boxed()
    }
}
