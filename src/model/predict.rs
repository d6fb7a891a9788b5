//! Outcome predictions from prior ratings. None of these update anything.

use itertools::Itertools;

use crate::{
    error::RatingError,
    model::{
        ranking::rank_data_min,
        statistics::{cdf, ppf},
        structures::{options::Options, rating::Team},
        team_rating::{team_ratings, TeamRating}
    }
};

/// Probability of each team winning, in input order. Sums to 1.
pub fn predict_win(teams: &[Team], options: &Options) -> Result<Vec<f64>, RatingError> {
    match teams.len() {
        0 => return Err(RatingError::NoTeams),
        1 => return Ok(vec![1.0]),
        _ => {}
    }

    let n = teams.len() as f64;
    let beta_sq = options.beta_sq();
    let ratings = team_ratings(options)(teams);
    let denom = n * (n - 1.0) / 2.0;

    let probabilities = ratings
        .iter()
        .enumerate()
        .map(|(i, item)| {
            ratings
                .iter()
                .enumerate()
                .filter(|(q, _)| *q != i)
                .map(|(_, q)| cdf((item.mu - q.mu) / sigma_bar(n, beta_sq, item, q)))
                .sum::<f64>()
                / denom
        })
        .collect();

    Ok(probabilities)
}

/// Probability that the match ends in a draw. A lone team always draws.
pub fn predict_draw(teams: &[Team], options: &Options) -> Result<f64, RatingError> {
    match teams.len() {
        0 => return Err(RatingError::NoTeams),
        1 => return Ok(1.0),
        _ => {}
    }

    let n = teams.len() as f64;
    let beta_sq = options.beta_sq();
    let ratings = team_ratings(options)(teams);
    let margin = draw_margin(teams, options);
    // Every unordered pair is visited twice
    let denom = n * (n - 1.0);

    let total: f64 = (0..ratings.len())
        .permutations(2)
        .map(|pair| {
            let (item, q) = (&ratings[pair[0]], &ratings[pair[1]]);
            let sigma_bar = sigma_bar(n, beta_sq, item, q);

            cdf((margin - item.mu + q.mu) / sigma_bar) - cdf((item.mu - q.mu - margin) / sigma_bar)
        })
        .sum();

    Ok(total.abs() / denom)
}

/// Predicted finishing position and its probability for each team, in input
/// order. The most likely winner is ranked 1; equal probabilities share a rank.
pub fn predict_rank(teams: &[Team], options: &Options) -> Result<Vec<(usize, f64)>, RatingError> {
    match teams.len() {
        0 => return Err(RatingError::NoTeams),
        1 => return Ok(vec![(1, 1.0)]),
        _ => {}
    }

    let n = teams.len() as f64;
    let beta_sq = options.beta_sq();
    let margin = draw_margin(teams, options);
    let denom = n * (n - 1.0) / 2.0;

    let mut win_mass = vec![0.0; teams.len()];
    for pair in (0..teams.len()).permutations(2) {
        let (a, b) = (pair[0], pair[1]);
        let a_rating = TeamRating::new(&teams[a], 0);
        let b_rating = TeamRating::new(&teams[b], 1);

        let sigma_bar = sigma_bar(n, beta_sq, &a_rating, &b_rating);
        win_mass[a] += cdf((a_rating.mu - b_rating.mu - margin) / sigma_bar);
    }

    let probabilities: Vec<f64> = win_mass.iter().map(|mass| (mass / denom).abs()).collect();
    let dense = rank_data_min(&probabilities);
    let max_rank = dense.iter().copied().max().unwrap_or(1);

    Ok(dense
        .into_iter()
        .zip(probabilities)
        .map(|(rank, probability)| (max_rank - rank + 1, probability))
        .collect())
}

fn sigma_bar(n: f64, beta_sq: f64, a: &TeamRating, b: &TeamRating) -> f64 {
    (n * beta_sq + a.sigma_sq.powi(2) + b.sigma_sq.powi(2)).sqrt()
}

/// Performance gap below which two teams are considered to have drawn.
fn draw_margin(teams: &[Team], options: &Options) -> f64 {
    let n = teams.len() as f64;
    let total_players = teams.iter().map(Vec::len).sum::<usize>() as f64;
    let draw_probability = 1.0 / n;

    total_players.sqrt() * options.beta() * ppf((1.0 + draw_probability) / 2.0)
}
