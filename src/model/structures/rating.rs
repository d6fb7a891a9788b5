use serde::{Deserialize, Serialize};

use crate::model::structures::options::Options;

/// A single player's skill estimate: `mu` is the mean, `sigma` the standard
/// deviation around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub mu: f64,
    pub sigma: f64
}

/// An ordered group of players competing as one side.
pub type Team = Vec<Rating>;

impl Rating {
    pub fn new(mu: f64, sigma: f64) -> Rating {
        Rating { mu, sigma }
    }

    /// A fresh rating using the configured default `mu` and `sigma`.
    pub fn from_options(options: &Options) -> Rating {
        Rating {
            mu: options.mu(),
            sigma: options.sigma()
        }
    }

    /// Conservative skill estimate, `mu - z * sigma`.
    pub fn ordinal(&self, z: f64) -> f64 {
        self.mu - z * self.sigma
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::from_options(&Options::default())
    }
}
