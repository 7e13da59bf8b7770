// src/probe/mod.rs
mod error;
mod prober;

pub use error::ProbeError;
pub use prober::{EndpointTarget, HttpProber, ProbeOutcome, Prober};
