use std::{fs::File, io::BufReader, io::Write, path::Path};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::{ProcessorError, RatingError},
    model::{self, predict_draw, predict_rank, predict_win, Model, Options, Team},
    utils::progress_utils::progress_bar
};

/// One match to rate: the prior teams plus any option overrides, e.g.
/// `{"teams": [[{"mu": 25.0, "sigma": 8.3}], ...], "rankings": [2, 1], "model": 1}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RateRequest {
    pub teams: Vec<Team>,
    #[serde(flatten)]
    pub options: Options
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankPrediction {
    pub rank: usize,
    pub probability: f64
}

/// Outcome predictions computed from the prior ratings.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Predictions {
    pub win: Vec<f64>,
    pub draw: f64,
    pub rank: Vec<RankPrediction>
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RateResponse {
    pub teams: Vec<Team>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Predictions>
}

pub fn read_requests(path: &Path) -> Result<Vec<RateRequest>, ProcessorError> {
    let reader = BufReader::new(File::open(path)?);
    let requests: Vec<RateRequest> = serde_json::from_reader(reader)?;

    info!("Read {} rating requests from {}", requests.len(), path.display());
    Ok(requests)
}

pub fn write_responses<W: Write>(mut writer: W, responses: &[RateResponse]) -> Result<(), ProcessorError> {
    serde_json::to_writer_pretty(&mut writer, responses)?;
    writeln!(writer)?;

    Ok(())
}

/// Replaces the model of every request, e.g. from a command line override.
pub fn override_model(requests: &mut [RateRequest], model: Model) {
    for request in requests {
        request.options.model = model;
    }
}

pub fn process_request(request: &RateRequest, predict: bool) -> Result<RateResponse, RatingError> {
    let predictions = if predict {
        Some(predictions(&request.teams, &request.options)?)
    } else {
        None
    };

    Ok(RateResponse {
        teams: model::rate(&request.teams, &request.options)?,
        predictions
    })
}

/// Rates every request. Requests are independent, so they are processed in
/// parallel; results keep the input order.
pub fn process(requests: &[RateRequest], predict: bool) -> Result<Vec<RateResponse>, ProcessorError> {
    let bar = progress_bar(requests.len() as u64, "Rating matches".to_string());

    let responses = requests
        .par_iter()
        .enumerate()
        .map(|(index, request)| {
            let response = process_request(request, predict).map_err(|source| ProcessorError::Rating { index, source });
            bar.inc(1);

            response
        })
        .collect::<Result<Vec<_>, _>>();

    bar.finish();
    debug!("Processed {} requests", requests.len());

    responses
}

fn predictions(teams: &[Team], options: &Options) -> Result<Predictions, RatingError> {
    Ok(Predictions {
        win: predict_win(teams, options)?,
        draw: predict_draw(teams, options)?,
        rank: predict_rank(teams, options)?
            .into_iter()
            .map(|(rank, probability)| RankPrediction { rank, probability })
            .collect()
    })
}
