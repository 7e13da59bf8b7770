// src/verifier/report.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointStatus {
    Healthy,
    Unhealthy,
}

/// Terminal state for one probed endpoint
#[derive(Debug, Clone, Serialize)]
pub struct EndpointReport {
    pub endpoint: String,
    pub status: EndpointStatus,
    pub attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EndpointReport {
    pub fn healthy(endpoint: String, attempts: u32) -> Self {
        Self {
            endpoint,
            status: EndpointStatus::Healthy,
            attempts,
            error: None,
        }
    }

    pub fn unhealthy(endpoint: String, attempts: u32, error: String) -> Self {
        Self {
            endpoint,
            status: EndpointStatus::Unhealthy,
            attempts,
            error: Some(error),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == EndpointStatus::Healthy
    }
}

/// Aggregate result of one verification pass, one report per requested
/// endpoint in request order. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationRun {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub reports: Vec<EndpointReport>,
    pub success: bool,
}

impl VerificationRun {
    pub fn new(
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        reports: Vec<EndpointReport>,
    ) -> Self {
        let success = reports.iter().all(EndpointReport::is_healthy);
        Self {
            run_id: Uuid::new_v4(),
            started_at,
            finished_at,
            reports,
            success,
        }
    }
}
