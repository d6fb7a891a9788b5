//! Thurstone-Mosteller: pairwise comparisons under a Gaussian performance
//! model, using truncated-normal moments for wins, losses and ties.

use crate::model::{
    pairing::{full_pairs, ladder_pairs},
    statistics::{v, vt, w, wt},
    structures::{options::Options, rating::Team},
    team_rating::TeamRating
};

/// Compares every team against every other team.
pub fn rate_full(team_ratings: &[TeamRating], options: &Options) -> Vec<Team> {
    rate_with_pairs(team_ratings, &full_pairs(team_ratings.len()), 1.0, options)
}

/// Compares each team only against its rank neighbours, with the pairwise
/// scale doubled.
pub fn rate_part(team_ratings: &[TeamRating], options: &Options) -> Vec<Team> {
    rate_with_pairs(team_ratings, &ladder_pairs(team_ratings.len()), 2.0, options)
}

fn rate_with_pairs(team_ratings: &[TeamRating], pairs: &[Vec<usize>], scale: f64, options: &Options) -> Vec<Team> {
    let epsilon = options.epsilon();
    let two_beta_sq = 2.0 * options.beta_sq();
    let gamma = options.gamma();
    let n = team_ratings.len();

    team_ratings
        .iter()
        .zip(pairs)
        .map(|(i, opponents)| {
            let (omega, delta) = opponents.iter().map(|&q| &team_ratings[q]).fold((0.0, 0.0), |(omega, delta), q| {
                let ciq = scale * (i.sigma_sq + q.sigma_sq + two_beta_sq).sqrt();
                let delta_mu = (i.mu - q.mu) / ciq;
                let sigma_sq_to_ciq = i.sigma_sq / ciq;
                let i_gamma = gamma.call(ciq, n, i.mu, i.sigma_sq, i.team, i.rank);
                // epsilon doubles as the draw margin
                let t = epsilon / ciq;

                if q.rank == i.rank {
                    return (
                        omega + sigma_sq_to_ciq * vt(delta_mu, t),
                        delta + (i_gamma * sigma_sq_to_ciq / ciq) * wt(delta_mu, t)
                    );
                }

                let sign = if q.rank > i.rank { 1.0 } else { -1.0 };

                (
                    omega + sign * sigma_sq_to_ciq * v(sign * delta_mu, t),
                    delta + (i_gamma * sigma_sq_to_ciq / ciq) * w(sign * delta_mu, t)
                )
            });

            i.distribute(omega, delta, epsilon)
        })
        .collect()
}
