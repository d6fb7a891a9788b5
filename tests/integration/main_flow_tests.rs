use std::{fs, path::PathBuf, process::Command};

use openskill_processor::{
    model::Model,
    processing::{override_model, process, read_requests, write_responses}
};
use serde_json::Value;

use crate::common::init_test_env;

const REQUESTS: &str = r#"[
    {
        "teams": [[{"mu": 29.182, "sigma": 4.782}], [{"mu": 27.174, "sigma": 4.922}]]
    },
    {
        "teams": [
            [{"mu": 25.0, "sigma": 8.333}, {"mu": 30.0, "sigma": 4.0}],
            [{"mu": 27.0, "sigma": 6.0}, {"mu": 22.0, "sigma": 5.0}],
            [{"mu": 20.0, "sigma": 7.0}]
        ],
        "rankings": [2, 1, 2],
        "model": 1
    },
    {
        "teams": [[{"mu": 25.0, "sigma": 8.0}], [{"mu": 25.0, "sigma": 8.0}]],
        "scores": [10.0, 40.0],
        "tau": 0.0833,
        "prevent_sigma_increase": true
    }
]"#;

fn write_input(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("openskill_processor_test");
    fs::create_dir_all(&dir).unwrap();

    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_openskill-processor"))
}

#[test]
fn test_process_file_in_process() {
    init_test_env();

    let path = write_input("in_process.json", REQUESTS);
    let requests = read_requests(&path).unwrap();

    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].options.model, Model::BradleyTerryFull);
    assert_eq!(requests[2].options.tau, Some(0.0833));

    let responses = process(&requests, true).unwrap();

    assert_eq!(responses.len(), 3);
    assert!(responses[0].teams[0][0].mu > 29.182);
    assert!(responses[0].teams[1][0].mu < 27.174);
    // Scores are "higher is better", so the second team won
    assert!(responses[2].teams[1][0].mu > responses[2].teams[0][0].mu);
    assert!(responses[2].teams.iter().flatten().all(|r| r.sigma <= 8.0));

    let predictions = responses[1].predictions.as_ref().unwrap();
    assert_eq!(predictions.win.len(), 3);
    assert_eq!(predictions.rank.len(), 3);

    let mut buffer = Vec::new();
    write_responses(&mut buffer, &responses).unwrap();
    let written: Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(written.as_array().unwrap().len(), 3);
}

#[test]
fn test_override_model_replaces_every_request() {
    init_test_env();

    let path = write_input("override.json", REQUESTS);
    let mut requests = read_requests(&path).unwrap();

    override_model(&mut requests, Model::ThurstoneMostellerPart);

    assert!(requests.iter().all(|r| r.options.model == Model::ThurstoneMostellerPart));
}

#[test]
fn test_binary_writes_output_file() {
    let input = write_input("binary_in.json", REQUESTS);
    let output = input.with_file_name("binary_out.json");
    let _ = fs::remove_file(&output);

    let status = binary()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--model", "bradley-terry-part", "--predict"])
        .env("RUST_LOG", "error")
        .status()
        .expect("Failed to execute processor");

    assert!(status.success());

    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let responses = written.as_array().unwrap();

    assert_eq!(responses.len(), 3);
    assert!(responses.iter().all(|r| r.get("predictions").is_some()));
    assert_eq!(responses[1]["teams"][0].as_array().unwrap().len(), 2);
}

#[test]
fn test_binary_writes_to_stdout_without_output() {
    let input = write_input("stdout_in.json", REQUESTS);

    let output = binary()
        .arg("--input")
        .arg(&input)
        .env("RUST_LOG", "error")
        .env_remove("OUTPUT_PATH")
        .output()
        .expect("Failed to execute processor");

    assert!(output.status.success());

    let written: Value = serde_json::from_slice(&output.stdout).unwrap();
    let responses = written.as_array().unwrap();

    assert_eq!(responses.len(), 3);
    assert!(responses.iter().all(|r| r.get("predictions").is_none()));
}

#[test]
fn test_binary_exits_on_mismatched_rankings() {
    let input = write_input(
        "mismatch_in.json",
        r#"[{"teams": [[{"mu": 25.0, "sigma": 8.0}], [{"mu": 25.0, "sigma": 8.0}]], "rankings": [1, 2, 3]}]"#
    );

    let output = binary()
        .arg("--input")
        .arg(&input)
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute processor");

    assert!(!output.status.success(), "Process should fail on invalid rankings");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Request 0"), "Should name the failing request: {}", stderr);
}

#[test]
fn test_binary_exits_on_missing_input() {
    let output = binary()
        .args(["--input", "/nonexistent/requests.json"])
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute processor");

    assert!(!output.status.success());
}
