pub mod gamma;
pub mod model_type;
pub mod options;
pub mod rating;
