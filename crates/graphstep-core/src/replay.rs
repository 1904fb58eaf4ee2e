//! Playback position over a step sequence
//!
//! `Replay` is the timer-free half of a step animator: it tracks how many
//! steps are revealed and whether playback may advance. Whoever drives it
//! (a UI timer, the CLI's sleep loop) calls `advance` once per tick and
//! stops ticking when it returns `None` in the `Finished` state.

use std::collections::HashSet;

use serde::Serialize;

use crate::graph::{Edge, Snapshot, VertexId};

/// Playback state of a `Replay`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplayState {
    Playing,
    Paused,
    Finished,
}

/// Cursor over a sequence of `len` steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    len: usize,
    position: usize,
    state: ReplayState,
}

impl Replay {
    pub fn new(len: usize) -> Self {
        let mut replay = Self {
            len,
            position: 0,
            state: ReplayState::Playing,
        };
        replay.settle_state();
        replay
    }

    /// Number of steps in the sequence
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of steps revealed so far
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == ReplayState::Finished
    }

    /// Reveal the next step and return its index.
    /// Returns `None` while paused or once every step is revealed.
    pub fn advance(&mut self) -> Option<usize> {
        if self.state != ReplayState::Playing {
            return None;
        }
        let index = self.position;
        self.position += 1;
        self.settle_state();
        Some(index)
    }

    pub fn pause(&mut self) {
        if self.state == ReplayState::Playing {
            self.state = ReplayState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == ReplayState::Paused {
            self.state = ReplayState::Playing;
        }
    }

    /// Move the cursor so the next `advance` reveals step `index`.
    /// Clamped to the sequence length; a paused replay stays paused.
    pub fn seek(&mut self, index: usize) {
        self.position = index.min(self.len);
        if self.state == ReplayState::Finished {
            self.state = ReplayState::Playing;
        }
        self.settle_state();
    }

    /// Start over from the first step, playing
    pub fn restart(&mut self) {
        self.position = 0;
        self.state = ReplayState::Playing;
        self.settle_state();
    }

    fn settle_state(&mut self) {
        if self.position >= self.len {
            self.state = ReplayState::Finished;
        }
    }
}

/// Edges whose endpoints are both among the first `upto` visited vertices,
/// in snapshot edge order. Renderers use this to reveal edges as a
/// traversal reaches them.
pub fn revealed_edges(snapshot: &Snapshot, visit_order: &[VertexId], upto: usize) -> Vec<Edge> {
    let revealed: HashSet<VertexId> = visit_order.iter().take(upto).copied().collect();
    snapshot
        .edges
        .iter()
        .filter(|edge| revealed.contains(&edge.source) && revealed.contains(&edge.target))
        .copied()
        .collect()
}

/// Edges revealed by the step at `index` alone: those joining the vertex
/// visited at that step to a vertex revealed earlier (or to itself).
pub fn edges_revealed_at(snapshot: &Snapshot, visit_order: &[VertexId], index: usize) -> Vec<Edge> {
    let Some(&current) = visit_order.get(index) else {
        return Vec::new();
    };
    let earlier: HashSet<VertexId> = visit_order[..index].iter().copied().collect();
    snapshot
        .edges
        .iter()
        .filter(|edge| {
            (edge.source == current && (edge.target == current || earlier.contains(&edge.target)))
                || (edge.target == current && earlier.contains(&edge.source))
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_replay_advances_to_end() {
        let mut replay = Replay::new(3);
        assert_eq!(replay.advance(), Some(0));
        assert_eq!(replay.advance(), Some(1));
        assert_eq!(replay.advance(), Some(2));
        assert!(replay.is_finished());
        assert_eq!(replay.advance(), None);
        assert_eq!(replay.position(), 3);
    }

    #[test]
    fn test_empty_replay_is_finished() {
        let mut replay = Replay::new(0);
        assert!(replay.is_finished());
        assert_eq!(replay.advance(), None);
    }

    #[test]
    fn test_pause_blocks_advance() {
        let mut replay = Replay::new(3);
        replay.advance();
        replay.pause();
        assert_eq!(replay.state(), ReplayState::Paused);
        assert_eq!(replay.advance(), None);
        assert_eq!(replay.position(), 1);

        replay.resume();
        assert_eq!(replay.advance(), Some(1));
    }

    #[test]
    fn test_seek_resumes_from_index() {
        let mut replay = Replay::new(5);
        replay.seek(3);
        assert_eq!(replay.advance(), Some(3));
        assert_eq!(replay.advance(), Some(4));
        assert_eq!(replay.advance(), None);
    }

    #[test]
    fn test_seek_past_end_clamps() {
        let mut replay = Replay::new(2);
        replay.seek(10);
        assert_eq!(replay.position(), 2);
        assert!(replay.is_finished());
    }

    #[test]
    fn test_seek_back_after_finish_plays_again() {
        let mut replay = Replay::new(2);
        replay.seek(2);
        assert!(replay.is_finished());
        replay.seek(1);
        assert_eq!(replay.state(), ReplayState::Playing);
        assert_eq!(replay.advance(), Some(1));
    }

    #[test]
    fn test_seek_keeps_pause() {
        let mut replay = Replay::new(4);
        replay.pause();
        replay.seek(2);
        assert_eq!(replay.state(), ReplayState::Paused);
        assert_eq!(replay.advance(), None);
    }

    #[test]
    fn test_restart() {
        let mut replay = Replay::new(2);
        replay.advance();
        replay.advance();
        replay.restart();
        assert_eq!(replay.state(), ReplayState::Playing);
        assert_eq!(replay.advance(), Some(0));
    }

    fn square() -> Graph {
        let mut graph = Graph::undirected();
        for id in 0..4 {
            graph.add_vertex(id);
        }
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();
        graph.add_edge(3, 0, 1.0).unwrap();
        graph
    }

    #[test]
    fn test_revealed_edges_grow_with_visits() {
        let snapshot = square().snapshot();
        let order = [0, 1, 3, 2];

        assert!(revealed_edges(&snapshot, &order, 1).is_empty());
        assert_eq!(revealed_edges(&snapshot, &order, 2), vec![Edge::new(0, 1, 1.0)]);
        assert_eq!(
            revealed_edges(&snapshot, &order, 3),
            vec![Edge::new(0, 1, 1.0), Edge::new(3, 0, 1.0)]
        );
        assert_eq!(revealed_edges(&snapshot, &order, 4).len(), 4);
    }

    #[test]
    fn test_edges_revealed_at_step() {
        let snapshot = square().snapshot();
        let order = [0, 1, 3, 2];

        assert!(edges_revealed_at(&snapshot, &order, 0).is_empty());
        assert_eq!(
            edges_revealed_at(&snapshot, &order, 3),
            vec![Edge::new(1, 2, 1.0), Edge::new(2, 3, 1.0)]
        );
        assert!(edges_revealed_at(&snapshot, &order, 9).is_empty());
    }
}
