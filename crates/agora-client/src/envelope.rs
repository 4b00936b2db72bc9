use crate::client::ClientError;
use serde::{Deserialize, Serialize};

/// Uniform response envelope the backend wraps every payload in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, turning an unsuccessful envelope into an error.
    pub fn into_data(self) -> Result<T, ClientError> {
        if self.success {
            self.data
                .ok_or_else(|| ClientError::Api("response missing data".to_string()))
        } else {
            let message = self
                .error
                .map(|e| e.message)
                .unwrap_or_else(|| "request failed".to_string());
            Err(ClientError::Api(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = r#"{
            "success": true,
            "data": {"value": 7},
            "meta": {"pagination": {"page": 1, "limit": 20, "total": 42, "total_pages": 3},
                     "timestamp": "2024-05-01T10:00:00Z"}
        }"#;
        #[derive(Debug, serde::Deserialize)]
        struct Payload {
            value: i32,
        }
        let envelope: ApiResponse<Payload> = serde_json::from_str(json).unwrap();
        let pagination = envelope.meta.as_ref().unwrap().pagination.unwrap();
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(envelope.into_data().unwrap().value, 7);
    }

    #[test]
    fn test_error_envelope_surfaces_message() {
        let json = r#"{"success": false, "error": {"message": "Debate not found"}}"#;
        let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        match envelope.into_data() {
            Err(ClientError::Api(message)) => assert_eq!(message, "Debate not found"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_success_without_data_is_an_error() {
        let json = r#"{"success": true}"#;
        let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(envelope.into_data().is_err());
    }
}
