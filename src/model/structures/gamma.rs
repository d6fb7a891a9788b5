use std::{fmt, sync::Arc};

use crate::model::structures::rating::Rating;

/// Signature of a gamma strategy:
/// `(c, team_count, team_mu, team_sigma_sq, team, rank) -> gamma`.
///
/// `c` is the combined scale of the comparison the value is used in (the global
/// `c` for Plackett-Luce, the pairwise `ciq` for the other models).
pub type GammaFn = dyn Fn(f64, usize, f64, f64, &[Rating], usize) -> f64 + Send + Sync;

/// Damps how far a team's variance can shrink in one update.
#[derive(Clone)]
pub struct Gamma(Arc<GammaFn>);

impl Gamma {
    pub fn new<F>(f: F) -> Gamma
    where
        F: Fn(f64, usize, f64, f64, &[Rating], usize) -> f64 + Send + Sync + 'static
    {
        Gamma(Arc::new(f))
    }

    pub fn call(&self, c: f64, k: usize, mu: f64, sigma_sq: f64, team: &[Rating], rank: usize) -> f64 {
        (self.0)(c, k, mu, sigma_sq, team, rank)
    }
}

/// `sqrt(sigma_sq) / c`, section 6.1 of Weng & Lin (2011).
pub fn default_gamma(c: f64, _k: usize, _mu: f64, sigma_sq: f64, _team: &[Rating], _rank: usize) -> f64 {
    sigma_sq.sqrt() / c
}

impl Default for Gamma {
    fn default() -> Self {
        Gamma::new(default_gamma)
    }
}

impl fmt::Debug for Gamma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Gamma(..)")
    }
}
