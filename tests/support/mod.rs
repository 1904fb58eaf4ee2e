use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for graphstep with logging env overrides cleared
pub fn graphstep() -> Command {
    let mut cmd = cargo_bin_cmd!("graphstep");
    cmd.env_remove("GRAPHSTEP_LOG").env_remove("RUST_LOG");
    cmd
}

/// Parse stdout as a single JSON document
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
