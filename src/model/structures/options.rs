use serde::{Deserialize, Serialize};

use crate::model::{
    constants,
    structures::{gamma::Gamma, model_type::Model, rating::Rating}
};

/// Configuration for a rating call.
///
/// Every field is optional. Derived values (`sigma`, `beta`, `beta_sq`) are
/// recomputed from whichever fields were set, so overriding `mu` or `z` moves
/// the default `sigma`, and overriding `sigma` moves `beta`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Confidence multiplier used by the ordinal, and to derive the default sigma.
    pub z: Option<f64>,
    /// Default skill of a new rating.
    pub mu: Option<f64>,
    /// Default uncertainty of a new rating.
    pub sigma: Option<f64>,
    /// Floor applied to the variance-shrink factor. Also the draw margin
    /// of the Thurstone-Mosteller models.
    pub epsilon: Option<f64>,
    /// Variance of a team's performance around its skill.
    pub beta_sq: Option<f64>,
    /// Added (in quadrature) to every sigma before rating, keeping ratings
    /// pliable after many games.
    pub tau: Option<f64>,
    /// With `tau` set, never let a posterior sigma exceed the prior one.
    pub prevent_sigma_increase: bool,
    /// Explicit ranks, lower is better. Equal values are ties.
    pub rankings: Option<Vec<i64>>,
    /// Scores, higher is better. Ignored when `rankings` are present.
    pub scores: Option<Vec<f64>>,
    pub model: Model,
    #[serde(skip)]
    pub gamma: Option<Gamma>
}

impl Options {
    pub fn with_model(mut self, model: Model) -> Options {
        self.model = model;
        self
    }

    pub fn with_rankings(mut self, rankings: Vec<i64>) -> Options {
        self.rankings = Some(rankings);
        self
    }

    pub fn with_scores(mut self, scores: Vec<f64>) -> Options {
        self.scores = Some(scores);
        self
    }

    pub fn with_tau(mut self, tau: f64, prevent_sigma_increase: bool) -> Options {
        self.tau = Some(tau);
        self.prevent_sigma_increase = prevent_sigma_increase;
        self
    }

    pub fn with_gamma<F>(mut self, f: F) -> Options
    where
        F: Fn(f64, usize, f64, f64, &[Rating], usize) -> f64 + Send + Sync + 'static
    {
        self.gamma = Some(Gamma::new(f));
        self
    }

    pub fn z(&self) -> f64 {
        self.z.unwrap_or(constants::Z)
    }

    pub fn mu(&self) -> f64 {
        self.mu.unwrap_or(constants::MU)
    }

    pub fn sigma(&self) -> f64 {
        self.sigma.unwrap_or_else(|| self.mu() / self.z())
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon.unwrap_or(constants::EPSILON)
    }

    pub fn beta(&self) -> f64 {
        match self.beta_sq {
            Some(beta_sq) => beta_sq.sqrt(),
            None => self.sigma() / 2.0
        }
    }

    pub fn beta_sq(&self) -> f64 {
        self.beta_sq.unwrap_or_else(|| self.beta().powi(2))
    }

    pub fn tau(&self) -> Option<f64> {
        self.tau
    }

    /// A reasonable `tau` for this configuration, `mu / 300`.
    pub fn suggested_tau(&self) -> f64 {
        self.mu() / 300.0
    }

    pub fn gamma(&self) -> Gamma {
        self.gamma.clone().unwrap_or_default()
    }

    /// Rankings, if any non-empty ones were supplied.
    pub fn rankings(&self) -> Option<&[i64]> {
        self.rankings.as_deref().filter(|r| !r.is_empty())
    }

    /// Scores, if any non-empty ones were supplied.
    pub fn scores(&self) -> Option<&[f64]> {
        self.scores.as_deref().filter(|s| !s.is_empty())
    }
}
