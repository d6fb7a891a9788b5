//! Bradley-Terry: pairwise comparisons with a logistic win probability.

use crate::model::{
    pairing::{full_pairs, ladder_pairs},
    structures::{options::Options, rating::Team},
    team_rating::TeamRating
};

/// Compares every team against every other team.
pub fn rate_full(team_ratings: &[TeamRating], options: &Options) -> Vec<Team> {
    rate_with_pairs(team_ratings, &full_pairs(team_ratings.len()), options)
}

/// Compares each team only against its rank neighbours. Less accurate than
/// [`rate_full`] but linear in the number of teams.
pub fn rate_part(team_ratings: &[TeamRating], options: &Options) -> Vec<Team> {
    rate_with_pairs(team_ratings, &ladder_pairs(team_ratings.len()), options)
}

fn rate_with_pairs(team_ratings: &[TeamRating], pairs: &[Vec<usize>], options: &Options) -> Vec<Team> {
    let epsilon = options.epsilon();
    let two_beta_sq = 2.0 * options.beta_sq();
    let gamma = options.gamma();
    let n = team_ratings.len();

    team_ratings
        .iter()
        .zip(pairs)
        .map(|(i, opponents)| {
            let (omega, delta) = opponents.iter().map(|&q| &team_ratings[q]).fold((0.0, 0.0), |(omega, delta), q| {
                let ciq = (i.sigma_sq + q.sigma_sq + two_beta_sq).sqrt();
                let piq = 1.0 / (1.0 + ((q.mu - i.mu) / ciq).exp());
                let sigma_sq_to_ciq = i.sigma_sq / ciq;
                let i_gamma = gamma.call(ciq, n, i.mu, i.sigma_sq, i.team, i.rank);

                (
                    omega + sigma_sq_to_ciq * (score(q.rank, i.rank) - piq),
                    delta + (i_gamma * sigma_sq_to_ciq / ciq) * piq * (1.0 - piq)
                )
            });

            i.distribute(omega, delta, epsilon)
        })
        .collect()
}

/// Observed outcome for team `i` against `q`: 1 for a win, 0.5 for a tie.
fn score(q_rank: usize, i_rank: usize) -> f64 {
    if q_rank > i_rank {
        1.0
    } else if q_rank < i_rank {
        0.0
    } else {
        0.5
    }
}
