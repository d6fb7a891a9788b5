use std::path::PathBuf;

use clap::Parser;

use crate::model::Model;

#[derive(Parser, Clone)]
#[command(
    display_name = "OpenSkill Processor",
    long_about = "Updates Weng-Lin (OpenSkill) ratings from match results"
)]
pub struct Args {
    /// JSON file holding an array of rating requests. Each request has a
    /// `teams` array of `{ "mu": .., "sigma": .. }` ratings and, optionally,
    /// any option field such as `rankings`, `scores`, `tau` or `model`.
    #[arg(short, long, env = "INPUT_PATH", help = "Path to the JSON rating requests")]
    pub input: PathBuf,

    /// Where to write the posterior ratings. Defaults to stdout.
    #[arg(short, long, env = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Overrides the model of every request
    #[arg(short, long, value_enum)]
    pub model: Option<Model>,

    /// Also predicts win, draw and rank probabilities from the prior ratings
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub predict: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
