// src/verifier/engine.rs
use super::report::{EndpointReport, VerificationRun};
use super::state::TargetState;
use crate::config::VerifierConfig;
use crate::probe::{EndpointTarget, ProbeError, ProbeOutcome, Prober};
use chrono::Utc;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

/// Probes a set of endpoints sequentially, in request order, retrying each
/// up to the configured budget with a fixed delay between attempts.
///
/// All targets are probed before the run is reported; an exhausted target
/// surfaces through the aggregate `success` flag rather than aborting the
/// remaining probes.
pub struct HealthVerifier<P> {
    prober: P,
    config: VerifierConfig,
}

impl<P: Prober> HealthVerifier<P> {
    pub fn new(prober: P, config: VerifierConfig) -> Self {
        Self { prober, config }
    }

    pub async fn verify(&self, targets: &[EndpointTarget]) -> VerificationRun {
        let started_at = Utc::now();

        info!(
            "Starting verification of {} endpoint(s) (budget: {} attempt(s), delay: {:?})",
            targets.len(),
            self.config.max_retries,
            self.config.retry_delay()
        );

        let mut reports = Vec::with_capacity(targets.len());
        for target in targets {
            reports.push(self.verify_target(target).await);
        }

        let healthy = reports.iter().filter(|r| r.is_healthy()).count();
        info!(
            "Verification complete: {} healthy, {} unhealthy",
            healthy,
            reports.len() - healthy
        );

        VerificationRun::new(started_at, Utc::now(), reports)
    }

    async fn verify_target(&self, target: &EndpointTarget) -> EndpointReport {
        let mut state = TargetState::Pending;

        loop {
            state = match state {
                TargetState::Pending => TargetState::first_probe(),

                TargetState::WaitingToRetry { attempt, .. } => {
                    let delay = self.config.retry_delay();
                    if !delay.is_zero() {
                        debug!("Retrying {} in {:?}", target, delay);
                        sleep(delay).await;
                    }
                    TargetState::retry_probe(attempt)
                }

                TargetState::Probing { attempt } => {
                    debug!(
                        "Probing {} (attempt {}/{})",
                        target, attempt, self.config.max_retries
                    );

                    let result = self.issue_probe(target).await;
                    match &result {
                        Ok(outcome) => debug!(
                            "{} responded HTTP {} in {}ms",
                            target, outcome.status, outcome.latency_ms
                        ),
                        Err(e) => warn!("Attempt {} for {} failed: {}", attempt, target, e),
                    }

                    TargetState::after_probe(
                        attempt,
                        result.map(|_| ()),
                        self.config.max_retries,
                    )
                }

                TargetState::Succeeded { attempts } => {
                    info!("{} is healthy after {} attempt(s)", target, attempts);
                    return EndpointReport::healthy(target.identifier().to_string(), attempts);
                }

                TargetState::Exhausted {
                    attempts,
                    last_error,
                } => {
                    warn!(
                        "{} is unhealthy after {} attempt(s): {}",
                        target, attempts, last_error
                    );
                    return EndpointReport::unhealthy(
                        target.identifier().to_string(),
                        attempts,
                        last_error.to_string(),
                    );
                }
            };
        }
    }

    /// One probe bounded by the configured timeout. On expiry the probe
    /// future is dropped, which cancels the in-flight request rather than
    /// leaving it running unattended.
    async fn issue_probe(&self, target: &EndpointTarget) -> Result<ProbeOutcome, ProbeError> {
        let budget = self.config.probe_timeout();
        match timeout(budget, self.prober.probe(target)).await {
            Ok(result) => result,
            Err(_) => Err(ProbeError::Timeout(budget)),
        }
    }
}
