//! Domain types and pure logic for the FormaFlow demo backend.
//!
//! Everything in this crate is side-effect free: the wizard state machine,
//! upload cap rules, social analytics, and the strategy/analysis
//! generators are plain functions over plain data. I/O lives in the
//! `formaflow-db`, `formaflow-storage`, and `formaflow-api` crates.

pub mod analysis;
pub mod error;
pub mod naming;
pub mod phase;
pub mod session;
pub mod social;
pub mod strategy;
pub mod types;
pub mod upload;
pub mod wizard;
