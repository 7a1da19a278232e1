mod draw;
mod leaderboard;

use color_eyre::Report;
use leaderboard_lib::{Leaderboard, RawLeaderboard};
use referral_draw::utils::io::{open_file_read, open_file_write};
use std::io::Write;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub enum Cli {
    /// Draw the contest winners, one per prize tier
    Draw(draw::Draw),
    /// Rank the leaderboard by claimed referrals
    Leaderboard(leaderboard::Ranking),
}

impl Cli {
    pub fn exec(self) -> Result<(), Report> {
        match self {
            Self::Draw(cmd) => cmd.exec(),
            Self::Leaderboard(cmd) => cmd.exec(),
        }
    }
}

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Common {
    /// Path to the json-encoded leaderboard, as served by the contest API.
    /// Read from stdin if not provided.
    #[structopt(long)]
    leaderboard: Option<PathBuf>,

    /// Csv output path. Written to stdout if not provided.
    #[structopt(long)]
    output: Option<PathBuf>,
}

impl Common {
    pub fn load_leaderboard(&self) -> Result<Leaderboard, Report> {
        let raw: RawLeaderboard = serde_json::from_reader(open_file_read(&self.leaderboard)?)?;
        Ok(Leaderboard::from_raw(raw)?)
    }

    pub fn open_output(&self) -> Result<Box<dyn Write>, Report> {
        Ok(open_file_write(&self.output)?)
    }
}
