//! rscaffold: standardized directory layouts for research projects
//!
//! Layers:
//! - `domain`: layout model, target resolution, preview rendering (pure)
//! - `application`: `LayoutGenerator` service
//! - `infrastructure`: filesystem boundary and service wiring
//! - `cli`: argument parsing, dispatch, terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
