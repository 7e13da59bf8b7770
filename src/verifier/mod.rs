// src/verifier/mod.rs
mod engine;
mod report;
mod state;

pub use engine::HealthVerifier;
pub use report::{EndpointReport, EndpointStatus, VerificationRun};
pub use state::TargetState;
