use crate::model::{
    structures::{options::Options, rating::Team},
    team_rating::TeamRating
};

/// # Plackett-Luce
///
/// Generalized Bradley-Terry over a full ranking. Each team's strength is
/// `exp(mu / c)` with a single global scale
/// `c = sqrt(Σ (sigma_sq + beta_sq))`; a team is updated against every team
/// ranked at or above it, with co-ranked teams sharing each contribution.
///
/// Expects `team_ratings` sorted by rank.
pub fn rate(team_ratings: &[TeamRating], options: &Options) -> Vec<Team> {
    let epsilon = options.epsilon();
    let gamma = options.gamma();
    let c = util_c(team_ratings, options.beta_sq());
    let sum_q = util_sum_q(team_ratings, c);
    let a = util_a(team_ratings);
    let n = team_ratings.len();

    team_ratings
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let i_mu_over_c = (item.mu / c).exp();

            let (omega_sum, delta_sum) = team_ratings
                .iter()
                .enumerate()
                .filter(|(_, q)| q.rank <= item.rank)
                .fold((0.0, 0.0), |(omega, delta), (q, _)| {
                    let quotient = i_mu_over_c / sum_q[q];
                    let share = a[q] as f64;
                    let gain = if q == i { 1.0 - quotient } else { -quotient };

                    (omega + gain / share, delta + quotient * (1.0 - quotient) / share)
                });

            let i_gamma = gamma.call(c, n, item.mu, item.sigma_sq, item.team, item.rank);
            let omega = omega_sum * (item.sigma_sq / c);
            let delta = i_gamma * delta_sum * (item.sigma_sq / c.powi(2));

            item.distribute(omega, delta, epsilon)
        })
        .collect()
}

fn util_c(team_ratings: &[TeamRating], beta_sq: f64) -> f64 {
    team_ratings
        .iter()
        .map(|t| t.sigma_sq + beta_sq)
        .sum::<f64>()
        .sqrt()
}

/// For each team, the summed strength of every team ranked at or below it.
fn util_sum_q(team_ratings: &[TeamRating], c: f64) -> Vec<f64> {
    team_ratings
        .iter()
        .map(|item| {
            team_ratings
                .iter()
                .filter(|q| q.rank >= item.rank)
                .map(|q| (q.mu / c).exp())
                .sum()
        })
        .collect()
}

/// For each team, how many teams share its rank.
fn util_a(team_ratings: &[TeamRating]) -> Vec<usize> {
    team_ratings
        .iter()
        .map(|item| team_ratings.iter().filter(|q| q.rank == item.rank).count())
        .collect()
}
