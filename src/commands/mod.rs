//! CLI commands for graphstep

pub mod build;
pub mod dispatch;
pub mod neighbors;
pub mod replay;
pub mod show;
pub mod traverse;
