use crate::model::{Rating, Team};

pub fn generate_rating(mu: f64, sigma: f64) -> Rating {
    Rating::new(mu, sigma)
}

pub fn generate_team(n_players: usize, mu: f64, sigma: f64) -> Team {
    vec![generate_rating(mu, sigma); n_players]
}

/// `n_teams` teams of `team_size` players. Skill decreases with the team
/// index so the generated order is also the expected finishing order.
pub fn generate_teams(n_teams: usize, team_size: usize) -> Vec<Team> {
    (0..n_teams)
        .map(|i| {
            let mu = 35.0 - 20.0 * (i as f64 / n_teams.max(1) as f64);
            let sigma = 3.0 + (i % 5) as f64;

            generate_team(team_size, mu, sigma)
        })
        .collect()
}

/// Placements `1..=n`, reversed when `reverse` is set.
pub fn generate_rankings(n: usize, reverse: bool) -> Vec<i64> {
    let rankings = (1..=n as i64).collect::<Vec<_>>();

    if reverse {
        rankings.into_iter().rev().collect()
    } else {
        rankings
    }
}
