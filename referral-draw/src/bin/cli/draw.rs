use super::Common;
use color_eyre::Report;
use referral_draw::contest::draw_winners_with_seed;
use referral_draw::draw::Seed;
use referral_draw::prizes::PrizeTiers;
use referral_draw::utils::{csv, io::open_file_read};
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::info;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Draw {
    #[structopt(flatten)]
    common: Common,

    /// Path to a json-encoded list of prize tiers.
    /// Defaults to 10000, 3000 and 2000 energy for the first three places.
    #[structopt(long)]
    prizes: Option<PathBuf>,

    /// Hex-encoded 32 bytes seed for the draw. A random one is generated,
    /// and logged, if not provided.
    #[structopt(long, parse(try_from_str = parse_seed))]
    seed: Option<Seed>,
}

fn parse_seed(hex_seed: &str) -> Result<Seed, hex::FromHexError> {
    let mut seed = Seed::default();
    hex::decode_to_slice(hex_seed.trim_start_matches("0x"), &mut seed)?;
    Ok(seed)
}

impl Draw {
    pub fn exec(self) -> Result<(), Report> {
        let Draw {
            common,
            prizes,
            seed,
        } = self;

        let leaderboard = common.load_leaderboard()?;
        let prizes: PrizeTiers = match prizes {
            Some(path) => serde_json::from_reader(open_file_read(&Some(path))?)?,
            None => PrizeTiers::default(),
        };
        let seed = seed.unwrap_or_else(rand::random);

        info!(
            seed = %hex::encode(seed),
            participants = leaderboard.len(),
            prizes = prizes.len(),
            "drawing winners"
        );
        let winners = draw_winners_with_seed(&leaderboard, &prizes, seed)?;
        for winner in &winners {
            info!(
                place = winner.place,
                prize = winner.prize,
                winner = %winner.profile_id,
                "prize awarded"
            );
        }

        csv::dump_data_to_csv(&winners, common.open_output()?)?;
        Ok(())
    }
}
