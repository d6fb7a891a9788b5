use std::{fs::File, io, io::BufWriter, process};

use clap::Parser;
use openskill_processor::{
    args::Args,
    error::ProcessorError,
    processing::{override_model, process, read_requests, write_responses}
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv::dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ProcessorError> {
    let mut requests = read_requests(&args.input)?;

    if let Some(model) = args.model {
        info!("Overriding model with {:?}", model);
        override_model(&mut requests, model);
    }

    let responses = process(&requests, args.predict)?;

    match &args.output {
        Some(path) => {
            write_responses(BufWriter::new(File::create(path)?), &responses)?;
            info!("Wrote {} results to {}", responses.len(), path.display());
        }
        None => write_responses(io::stdout().lock(), &responses)?
    }

    Ok(())
}
