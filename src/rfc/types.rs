//! Request and response payloads.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/validate`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationRequest {
    pub rfc: String,
}

/// Outcome of validating a single identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationResult {
    /// Trimmed, uppercased input.
    pub rfc: String,
    pub is_valid: bool,
    pub created_at: String,
}

/// Body of `POST /api/validate/bulk`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BulkValidationRequest {
    pub rfcs: Vec<String>,
}

/// Results in the same order as the request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BulkValidationResult {
    pub count: usize,
    pub results: Vec<ValidationResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: timestamp(Utc::now()),
        }
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T12:34:56.789Z`.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap()
            + chrono::Duration::milliseconds(789);
        assert_eq!(timestamp(at), "2024-05-01T12:34:56.789Z");
    }

    #[test]
    fn test_health_status_ok() {
        let health = HealthStatus::ok();
        assert_eq!(health.status, "ok");
        assert!(DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
    }

    #[test]
    fn test_request_requires_rfc() {
        assert!(serde_json::from_str::<ValidationRequest>("{}").is_err());
        assert!(serde_json::from_str::<ValidationRequest>(r#"{"rfc":null}"#).is_err());
        let req: ValidationRequest = serde_json::from_str(r#"{"rfc":"abc"}"#).unwrap();
        assert_eq!(req.rfc, "abc");
    }
}
