use crate::model::{
    ranking::{ranking_keys, rankings},
    structures::{
        options::Options,
        rating::{Rating, Team}
    }
};

/// Aggregated view of one team for the duration of a single rating call.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRating<'a> {
    /// Sum of the members' `mu`.
    pub mu: f64,
    /// Sum of the members' `sigma²`.
    pub sigma_sq: f64,
    pub team: &'a [Rating],
    pub rank: usize
}

impl<'a> TeamRating<'a> {
    pub fn new(team: &'a [Rating], rank: usize) -> TeamRating<'a> {
        TeamRating {
            mu: team.iter().map(|r| r.mu).sum(),
            sigma_sq: team.iter().map(|r| r.sigma.powi(2)).sum(),
            team,
            rank
        }
    }

    /// Spreads a team-level adjustment over the members, each receiving a
    /// share proportional to its contribution to the team variance.
    ///
    /// The shrink factor is floored at `epsilon` so sigma stays real even when
    /// `delta` overshoots.
    pub fn distribute(&self, omega: f64, delta: f64, epsilon: f64) -> Team {
        self.team
            .iter()
            .map(|rating| {
                let sigma_sq = rating.sigma.powi(2);
                let share = sigma_sq / self.sigma_sq;

                Rating {
                    mu: rating.mu + share * omega,
                    sigma: rating.sigma * (1.0 - share * delta).max(epsilon).sqrt()
                }
            })
            .collect()
    }
}

/// Aggregates teams, ranking them from `keys` with the tie collapse in
/// [`rankings`].
pub fn aggregate<'a>(teams: &'a [Team], keys: &[f64]) -> Vec<TeamRating<'a>> {
    let ranks = rankings(teams.len(), keys);

    teams
        .iter()
        .zip(ranks)
        .map(|(team, rank)| TeamRating::new(team, rank))
        .collect()
}

/// Builds an aggregation function bound to the explicit rankings in
/// `options`. Used by callers that only need per-team totals.
pub fn team_ratings(options: &Options) -> impl for<'a> Fn(&'a [Team]) -> Vec<TeamRating<'a>> {
    let keys = options.rankings().map(ranking_keys).unwrap_or_default();

    move |teams| aggregate(teams, &keys)
}
