#[path = "../common/mod.rs"]
mod common;

mod fixture_tests;
