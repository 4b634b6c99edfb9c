//! Response body of `GET /health`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` when every check passed, otherwise `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Reachability of the bid store.
    pub database: CheckStatus,
}

impl HealthChecks {
    pub fn all_ok(&self) -> bool {
        self.database.is_ok()
    }
}

/// Outcome of one dependency check: `ok` or `error`, with a short message.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

impl HealthResponse {
    /// Builds the report for this build's version from the given checks.
    pub fn from_checks(checks: HealthChecks) -> Self {
        Self {
            status: if checks.all_ok() { "healthy" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.checks.all_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_when_database_fails() {
        let report = HealthResponse::from_checks(HealthChecks {
            database: CheckStatus::error("Database error: timeout"),
        });

        assert!(!report.is_healthy());
        assert_eq!(report.status, "degraded");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["checks"]["database"]["status"], "error");
    }

    #[test]
    fn test_healthy_serialization() {
        let report = HealthResponse::from_checks(HealthChecks {
            database: CheckStatus::ok("Connected"),
        });

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["checks"]["database"]["message"], "Connected");
    }
}
