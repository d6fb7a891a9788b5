use tracing::{debug, trace};

use crate::{
    error::RatingError,
    model::{
        ranking::{capture_order, rank_keys, restore_order},
        team_rating::aggregate
    }
};

pub mod bradley_terry;
pub mod constants;
pub mod pairing;
pub mod plackett_luce;
pub mod predict;
pub mod ranking;
pub mod rating_utils;
pub mod statistics;
pub mod structures;
pub mod team_rating;
pub mod thurstone_mosteller;

pub use predict::{predict_draw, predict_rank, predict_win};
pub use rating_utils::ordinal;
pub use structures::{
    gamma::Gamma,
    model_type::Model,
    options::Options,
    rating::{Rating, Team}
};
pub use team_rating::{team_ratings, TeamRating};

/// # Rating
///
/// Updates every player's rating from the outcome of one match and returns the
/// posteriors in the same order, and with the same shape, as `teams`.
///
/// Steps:
/// 1. If `tau` is set, work on a copy of `teams` with `tau` added to each sigma
///     (in quadrature). The caller's ratings are never modified.
/// 2. Rank teams from `rankings`, else `scores`, else their order, and sort by rank.
/// 3. Run the configured model over the sorted teams.
/// 4. Put the teams back in input order and, when requested, keep sigma from
///     growing past its prior.
pub fn rate(teams: &[Team], options: &Options) -> Result<Vec<Team>, RatingError> {
    validate(teams.len(), options)?;

    if teams.is_empty() {
        return Ok(Vec::new());
    }

    debug!(
        model = ?options.model,
        teams = teams.len(),
        players = teams.iter().map(Vec::len).sum::<usize>(),
        "Rating match"
    );

    let working = match options.tau() {
        Some(tau) => inflate_sigma(teams, tau),
        None => teams.to_vec()
    };

    let keys = rank_keys(teams.len(), options);
    let (ordered, tenet) = capture_order(&keys, &working);

    let mut sorted_keys = keys;
    sorted_keys.sort_by(f64::total_cmp);

    let team_ratings = aggregate(&ordered, &sorted_keys);
    trace!(ranks = ?team_ratings.iter().map(|t| t.rank).collect::<Vec<_>>(), "Teams ranked");

    let posteriors = options.model.rate(&team_ratings, options);
    let mut result = restore_order(&tenet, posteriors);

    if options.tau().is_some() && options.prevent_sigma_increase {
        limit_sigma_increase(&mut result, teams);
    }

    Ok(result)
}

fn validate(n_teams: usize, options: &Options) -> Result<(), RatingError> {
    if let Some(rankings) = options.rankings() {
        if rankings.len() != n_teams {
            return Err(RatingError::RankingsLength {
                expected: n_teams,
                found: rankings.len()
            });
        }
    } else if let Some(scores) = options.scores() {
        if scores.len() != n_teams {
            return Err(RatingError::ScoresLength {
                expected: n_teams,
                found: scores.len()
            });
        }
    }

    Ok(())
}

fn inflate_sigma(teams: &[Team], tau: f64) -> Vec<Team> {
    let tau_sq = tau.powi(2);

    teams
        .iter()
        .map(|team| {
            team.iter()
                .map(|r| Rating {
                    mu: r.mu,
                    sigma: (r.sigma.powi(2) + tau_sq).sqrt()
                })
                .collect()
        })
        .collect()
}

fn limit_sigma_increase(posteriors: &mut [Team], priors: &[Team]) {
    for (posterior, prior) in posteriors.iter_mut().zip(priors) {
        for (new, old) in posterior.iter_mut().zip(prior) {
            new.sigma = new.sigma.min(old.sigma);
        }
    }
}
