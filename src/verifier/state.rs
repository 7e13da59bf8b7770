// src/verifier/state.rs
use crate::probe::ProbeError;

/// Lifecycle of one target through its retry budget. `attempt` is the
/// 1-based ordinal of the probe in flight; `attempts` in the terminal
/// states is the ordinal of the final probe, so it never exceeds the
/// configured budget.
#[derive(Debug, Clone)]
pub enum TargetState {
    Pending,
    Probing { attempt: u32 },
    WaitingToRetry { attempt: u32, last_error: ProbeError },
    Succeeded { attempts: u32 },
    Exhausted { attempts: u32, last_error: ProbeError },
}

impl TargetState {
    pub fn first_probe() -> Self {
        TargetState::Probing { attempt: 1 }
    }

    pub fn retry_probe(prior_attempt: u32) -> Self {
        TargetState::Probing {
            attempt: prior_attempt + 1,
        }
    }

    /// Settle a completed probe: success terminates immediately, failure
    /// either exhausts the budget or queues a retry.
    pub fn after_probe(
        attempt: u32,
        result: Result<(), ProbeError>,
        max_retries: u32,
    ) -> Self {
        match result {
            Ok(()) => TargetState::Succeeded { attempts: attempt },
            Err(last_error) if attempt >= max_retries => TargetState::Exhausted {
                attempts: attempt,
                last_error,
            },
            Err(last_error) => TargetState::WaitingToRetry {
                attempt,
                last_error,
            },
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TargetState::Succeeded { .. } | TargetState::Exhausted { .. }
        )
    }
}
