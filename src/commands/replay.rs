//! `graphstep replay` command - paced step-by-step playback
//!
//! Steps are computed up front, then revealed one per interval. Ctrl-C
//! stops playback before the next step is printed.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use super::show::{counted, edge_human};
use super::traverse::{records_header, step_human, step_record, step_value};
use crate::cli::{Cli, OutputFormat};
use graphstep_core::error::{GraphstepError, Result};
use graphstep_core::graph::{Edge, Graph, Snapshot, VertexId};
use graphstep_core::replay::{edges_revealed_at, revealed_edges, Replay};
use graphstep_core::traversal::{traverse, Algorithm, Traversal, TraversalOptions};

/// Longest single sleep between cancellation checks
const SLEEP_SLICE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct ReplayOptions {
    pub algorithm: Algorithm,
    pub start: VertexId,
    pub interval: Duration,
    pub from_step: usize,
    pub traversal: TraversalOptions,
}

/// One JSON line of replay output
#[derive(Serialize)]
struct ReplayLine<'a> {
    index: usize,
    step: serde_json::Value,
    revealed_edges: &'a [Edge],
}

/// Execute the replay command
pub fn execute(cli: &Cli, graph: &Graph, options: &ReplayOptions) -> Result<()> {
    let traversal = traverse(graph, options.algorithm, options.start, &options.traversal)?;
    if options.from_step > traversal.len() {
        graphstep_core::bail_invalid!(
            "--from-step",
            format!("{} (only {} steps)", options.from_step, traversal.len())
        );
    }

    let cancelled = Arc::new(AtomicBool::new(false));
    let cancelled_clone = Arc::clone(&cancelled);
    let _ = ctrlc::set_handler(move || {
        cancelled_clone.store(true, Ordering::SeqCst);
    });

    let snapshot = graph.snapshot();
    let mut replay = Replay::new(traversal.len());
    replay.seek(options.from_step);

    print_header(cli, options, &traversal);
    play(cli, &traversal, &snapshot, &mut replay, options.interval, &cancelled)?;

    if cli.format == OutputFormat::Human && !cli.quiet {
        let revealed = revealed_edges(&snapshot, &traversal.visit_order(), replay.position());
        println!(
            "done: {} of {} edges revealed",
            revealed.len(),
            snapshot.edges.len()
        );
    }
    Ok(())
}

/// Reveal the remaining steps of `replay`, one per `interval`.
/// `cancelled` is checked before every step; once set, nothing more is
/// printed and `Interrupted` is returned.
fn play(
    cli: &Cli,
    traversal: &Traversal,
    snapshot: &Snapshot,
    replay: &mut Replay,
    interval: Duration,
    cancelled: &AtomicBool,
) -> Result<()> {
    let visit_order = traversal.visit_order();

    let mut first = true;
    while !replay.is_finished() {
        if !first {
            wait(interval, cancelled);
        }
        if cancelled.load(Ordering::SeqCst) {
            debug!(revealed = replay.position(), "replay_cancelled");
            return Err(GraphstepError::Interrupted {
                revealed: replay.position(),
                total: replay.len(),
            });
        }

        let Some(index) = replay.advance() else {
            break;
        };
        let edges = edges_revealed_at(snapshot, &visit_order, index);
        print_step(cli, traversal, snapshot, index, &edges)?;
        first = false;
    }
    Ok(())
}

fn print_header(cli: &Cli, options: &ReplayOptions, traversal: &Traversal) {
    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "replaying {} from {}: {}, {} ms apart, starting at step {}",
                    options.algorithm,
                    options.start,
                    counted(traversal.len(), "step", "steps"),
                    options.interval.as_millis(),
                    options.from_step
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{} from_step={}",
                records_header("replay", traversal, options.start),
                options.from_step
            );
        }
        OutputFormat::Json => {}
    }
}

fn print_step(
    cli: &Cli,
    traversal: &Traversal,
    snapshot: &Snapshot,
    index: usize,
    edges: &[Edge],
) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            if let Some(step) = step_value(traversal, index)? {
                let line = ReplayLine {
                    index,
                    step,
                    revealed_edges: edges,
                };
                println!("{}", serde_json::to_string(&line)?);
            }
        }
        OutputFormat::Human => {
            if let Some(line) = step_human(traversal, index) {
                println!("{}", line);
            }
            for edge in edges {
                println!("  + {}", edge_human(edge, snapshot.directed));
            }
        }
        OutputFormat::Records => {
            if let Some(line) = step_record(traversal, index) {
                println!("{}", line);
            }
            for edge in edges {
                println!("E {} {} {}", edge.source, edge.target, edge.weight);
            }
        }
    }
    io::stdout().flush()?;
    Ok(())
}

/// Sleep for `interval`, returning early once `cancelled` is set
fn wait(interval: Duration, cancelled: &AtomicBool) {
    let deadline = Instant::now() + interval;
    loop {
        if cancelled.load(Ordering::SeqCst) {
            return;
        }
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        thread::sleep((deadline - now).min(SLEEP_SLICE));
    }
}
