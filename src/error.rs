use thiserror::Error;

/// Invalid input to a rating or prediction call.
#[derive(Debug, Error, PartialEq)]
pub enum RatingError {
    #[error("At least one team is required")]
    NoTeams,

    #[error("Expected {expected} rankings (one per team), found {found}")]
    RankingsLength { expected: usize, found: usize },

    #[error("Expected {expected} scores (one per team), found {found}")]
    ScoresLength { expected: usize, found: usize }
}

/// Failures of the command line processor.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Failed to read or write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse or serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request {index} could not be rated: {source}")]
    Rating {
        index: usize,
        #[source]
        source: RatingError
    }
}
