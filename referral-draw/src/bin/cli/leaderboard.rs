use super::Common;
use color_eyre::Report;
use referral_draw::utils::csv;
use serde::Serialize;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Ranking {
    #[structopt(flatten)]
    common: Common,
}

#[derive(Serialize)]
struct RankingRow<'a> {
    rank: usize,
    profile_id: &'a str,
    full_name: &'a str,
    username: Option<&'a str>,
    claimed_referrals: u64,
    total_referrals: u64,
}

impl Ranking {
    pub fn exec(self) -> Result<(), Report> {
        let leaderboard = self.common.load_leaderboard()?;
        let rows = leaderboard
            .ranked()
            .into_iter()
            .map(|entry| RankingRow {
                rank: entry.rank,
                profile_id: &entry.participant.profile_id,
                full_name: &entry.participant.full_name,
                username: entry.participant.username.as_deref(),
                claimed_referrals: entry.participant.claimed_referrals,
                total_referrals: entry.participant.total_referrals,
            })
            .collect::<Vec<_>>();

        csv::dump_data_to_csv(&rows, self.common.open_output()?)?;
        Ok(())
    }
}
