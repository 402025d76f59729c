// Gateway file to expose integration tests from the integration/ subdirectory
// This file allows Rust's test runner to discover tests in subdirectories

#[path = "integration/test_drift_pipeline.rs"]
mod test_drift_pipeline;

#[path = "integration/test_cli.rs"]
mod test_cli;
