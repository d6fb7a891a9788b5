pub mod args;
pub mod error;
pub mod model;
pub mod processing;
pub mod utils;
