//! Command implementations for all graphstep commands

use std::time::Duration;

use crate::cli::{Commands, DijkstraArgs, ReplayArgs, TraverseArgs};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::macros::trace_command;
use crate::commands::replay::ReplayOptions;
use crate::commands::{neighbors, replay, show, traverse};
use graphstep_core::error::Result;
use graphstep_core::graph::VertexId;
use graphstep_core::traversal::{Algorithm, DijkstraOptions, TraversalOptions};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Show => execute_show(ctx),
            Commands::Neighbors { id } => execute_neighbors(ctx, *id),
            Commands::Dfs(args) => execute_traverse(ctx, Algorithm::Dfs, args, false),
            Commands::Bfs(args) => execute_traverse(ctx, Algorithm::Bfs, args, false),
            Commands::Dijkstra(args) => execute_dijkstra(ctx, args),
            Commands::Replay(args) => execute_replay(ctx, args),
        }
    }
}

fn execute_show(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.build_graph()?;
    trace_command!(ctx.cli, ctx.start, "build_graph");
    show::execute(ctx.cli, &graph)
}

fn execute_neighbors(ctx: &CommandContext, id: VertexId) -> Result<()> {
    let graph = ctx.build_graph()?;
    trace_command!(ctx.cli, ctx.start, "build_graph");
    neighbors::execute(ctx.cli, &graph, id)
}

fn execute_dijkstra(ctx: &CommandContext, args: &DijkstraArgs) -> Result<()> {
    execute_traverse(ctx, Algorithm::Dijkstra, &args.traverse, args.skip_unreachable)
}

fn execute_traverse(
    ctx: &CommandContext,
    algorithm: Algorithm,
    args: &TraverseArgs,
    skip_unreachable: bool,
) -> Result<()> {
    let graph = ctx.build_graph()?;
    trace_command!(ctx.cli, ctx.start, "build_graph");

    let opts = traversal_options(ctx, skip_unreachable);
    traverse::execute(ctx.cli, &graph, algorithm, args.start, &opts)?;
    trace_command!(ctx.cli, ctx.start, "traverse");
    Ok(())
}

fn execute_replay(ctx: &CommandContext, args: &ReplayArgs) -> Result<()> {
    if args.skip_unreachable && args.algorithm != Algorithm::Dijkstra {
        graphstep_core::bail_usage!("--skip-unreachable only applies to dijkstra");
    }

    let graph = ctx.build_graph()?;
    trace_command!(ctx.cli, ctx.start, "build_graph");

    let interval_ms = args.interval_ms.unwrap_or(ctx.config.replay.interval_ms);
    let options = ReplayOptions {
        algorithm: args.algorithm,
        start: args.start,
        interval: Duration::from_millis(interval_ms),
        from_step: args.from_step,
        traversal: traversal_options(ctx, args.skip_unreachable),
    };
    replay::execute(ctx.cli, &graph, &options)
}

/// Config supplies the default; `--skip-unreachable` forces suppression
fn traversal_options(ctx: &CommandContext, skip_unreachable: bool) -> TraversalOptions {
    let mut dijkstra = DijkstraOptions::from(&ctx.config.dijkstra);
    if skip_unreachable {
        dijkstra.emit_unreachable = false;
    }
    TraversalOptions { dijkstra }
}
