use crate::model::structures::{
    options::Options,
    rating::{Rating, Team}
};

/// Creates a rating, falling back to the configured defaults for whichever
/// of `mu` / `sigma` is not given.
pub fn create_rating(mu: Option<f64>, sigma: Option<f64>, options: &Options) -> Rating {
    Rating {
        mu: mu.unwrap_or_else(|| options.mu()),
        sigma: sigma.unwrap_or_else(|| options.sigma())
    }
}

/// `n_players` fresh default ratings forming one team.
pub fn initial_team(n_players: usize, options: &Options) -> Team {
    vec![Rating::from_options(options); n_players]
}

/// Conservative skill estimate using the configured `z`: the true skill lies
/// above this value with high probability (≈99.7% for `z = 3`).
pub fn ordinal(rating: &Rating, options: &Options) -> f64 {
    rating.ordinal(options.z())
}
