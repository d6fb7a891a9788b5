use clap::ValueEnum;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::EnumIter;

use crate::model::{
    bradley_terry, plackett_luce,
    structures::{options::Options, rating::Team},
    team_rating::TeamRating,
    thurstone_mosteller
};

/// Selects which Weng-Lin update rule is applied when rating teams.
///
/// The `Full` variants compare every team against every other team, the
/// `Part` variants only against the teams ranked directly above and below.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, ValueEnum)]
#[repr(u8)]
pub enum Model {
    #[default]
    PlackettLuce = 0,
    BradleyTerryFull = 1,
    BradleyTerryPart = 2,
    ThurstoneMostellerFull = 3,
    ThurstoneMostellerPart = 4
}

impl TryFrom<i32> for Model {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Model::PlackettLuce),
            1 => Ok(Model::BradleyTerryFull),
            2 => Ok(Model::BradleyTerryPart),
            3 => Ok(Model::ThurstoneMostellerFull),
            4 => Ok(Model::ThurstoneMostellerPart),
            _ => Err(())
        }
    }
}

impl Model {
    /// Runs this model over teams already sorted by rank.
    pub fn rate(&self, team_ratings: &[TeamRating], options: &Options) -> Vec<Team> {
        match self {
            Model::PlackettLuce => plackett_luce::rate(team_ratings, options),
            Model::BradleyTerryFull => bradley_terry::rate_full(team_ratings, options),
            Model::BradleyTerryPart => bradley_terry::rate_part(team_ratings, options),
            Model::ThurstoneMostellerFull => thurstone_mosteller::rate_full(team_ratings, options),
            Model::ThurstoneMostellerPart => thurstone_mosteller::rate_part(team_ratings, options)
        }
    }
}
