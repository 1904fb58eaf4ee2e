//! Graphstep Core Library
//!
//! Graph model and step-sequencing traversal engines for graphstep.
//! Engines produce complete, replayable step sequences that a renderer
//! can reveal one step at a time.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod replay;
pub mod traversal;
