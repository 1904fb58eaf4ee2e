//! Integration tests for paced replay

mod support;

use predicates::prelude::*;
use std::fs;
use support::graphstep;
use tempfile::tempdir;

const PATH: [&str; 6] = ["--vertices", "3", "--edge", "0:1", "--edge", "1:2"];

#[test]
fn test_replay_prints_every_step() {
    graphstep()
        .args(PATH)
        .args(["replay", "bfs", "--start", "0", "--interval-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("replaying bfs from 0: 3 steps"))
        .stdout(predicate::str::contains("step 0: visit 0"))
        .stdout(predicate::str::contains("  + 0 -- 1 (weight 1)"))
        .stdout(predicate::str::contains("step 2: visit 2"))
        .stdout(predicate::str::contains("done: 2 of 2 edges revealed"));
}

#[test]
fn test_replay_from_step() {
    graphstep()
        .args(PATH)
        .args(["replay", "dfs", "--start", "0", "--interval-ms", "0", "--from-step", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 0:").not())
        .stdout(predicate::str::contains("step 2: visit 2"));
}

#[test]
fn test_replay_json_lines() {
    let output = graphstep()
        .args(["--format", "json"])
        .args(PATH)
        .args(["replay", "dfs", "--start", "0", "--interval-ms", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);

    let indices: Vec<u64> = lines.iter().map(|l| l["index"].as_u64().unwrap()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(lines[1]["step"]["vertex"], 1);
    assert!(lines[0]["revealed_edges"].as_array().unwrap().is_empty());
    assert_eq!(lines[2]["revealed_edges"][0]["source"], 1);
}

#[test]
fn test_replay_records() {
    graphstep()
        .args(["--format", "records"])
        .args(PATH)
        .args(["replay", "bfs", "--start", "0", "--interval-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H graphstep=1 records=1 mode=replay algorithm=bfs start=0 steps=3 from_step=0",
        ))
        .stdout(predicate::str::contains("S 1 bfs vertex=1 depth=1 frontier=2\nE 0 1 1\n"));
}

#[test]
fn test_replay_interval_from_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("graphstep.toml"), "[replay]\ninterval_ms = 0\n").unwrap();

    graphstep()
        .current_dir(dir.path())
        .args(PATH)
        .args(["replay", "dijkstra", "--start", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 ms apart"))
        .stdout(predicate::str::contains("step 2: settle 0 at 2 via 1"));
}

#[test]
fn test_replay_paces_steps() {
    let started = std::time::Instant::now();
    graphstep()
        .args(PATH)
        .args(["replay", "bfs", "--start", "0", "--interval-ms", "100"])
        .assert()
        .success();
    // Two waits between three steps
    assert!(started.elapsed() >= std::time::Duration::from_millis(200));
}

#[test]
fn test_replay_from_step_past_end() {
    graphstep()
        .args(PATH)
        .args(["replay", "bfs", "--start", "0", "--from-step", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--from-step"));
}

#[test]
fn test_replay_skip_unreachable_needs_dijkstra() {
    graphstep()
        .args(PATH)
        .args(["replay", "dfs", "--start", "0", "--skip-unreachable"])
        .assert()
        .code(2);
}

#[test]
fn test_replay_unknown_algorithm() {
    graphstep()
        .args(PATH)
        .args(["replay", "astar", "--start", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown algorithm"));
}

#[cfg(unix)]
#[test]
fn test_replay_interrupt_exits_failure() {
    use std::process::{Command, Stdio};
    use std::thread;
    use std::time::Duration;

    let child = Command::new(env!("CARGO_BIN_EXE_graphstep"))
        .args(PATH)
        .args(["replay", "bfs", "--start", "0", "--interval-ms", "5000"])
        .env_remove("GRAPHSTEP_LOG")
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Let the first step print and the handler install
    thread::sleep(Duration::from_millis(1000));
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("step 0: visit 0"));
    assert!(!stdout.contains("step 1:"));
    assert!(!stdout.contains("done:"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("replay interrupted after 1 of 3 steps"));
}
