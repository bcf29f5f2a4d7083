//! JSON envelopes shared by every facade operation.
//!
//! Success: `{ data, message, code, timestamp }`.
//! Failure: `{ error: { code, message, details }, timestamp }`.

use chrono::Utc;
use serde_json::{Value, json};

use wms_core::DomainError;

pub fn success(data: Value, message: impl Into<String>) -> Value {
    json!({
        "data": data,
        "message": message.into(),
        "code": 200,
        "timestamp": Utc::now().to_rfc3339(),
    })
}

pub fn failure(err: &DomainError) -> Value {
    json!({
        "error": {
            "code": error_code(err),
            "message": err.to_string(),
            "details": error_details(err),
        },
        "timestamp": Utc::now().to_rfc3339(),
    })
}

pub fn error_code(err: &DomainError) -> &'static str {
    match err {
        DomainError::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
        DomainError::Validation(_) => "VALIDATION_ERROR",
        DomainError::InvalidId(_) => "INVALID_ID",
        DomainError::NotFound => "NOT_FOUND",
        DomainError::Unexpected(_) => "UNEXPECTED_FAULT",
    }
}

fn error_details(err: &DomainError) -> Value {
    match err {
        DomainError::InsufficientStock {
            requested,
            available,
        } => json!({ "requested": requested, "available": available }),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let envelope = success(json!({"level": 100}), "inventory level");
        assert_eq!(envelope["code"], 200);
        assert_eq!(envelope["data"]["level"], 100);
        assert_eq!(envelope["message"], "inventory level");
        assert!(envelope["timestamp"].is_string());
        assert!(envelope.get("error").is_none());
    }

    #[test]
    fn failure_envelope_carries_structured_details() {
        let err = DomainError::insufficient_stock(200, 100);
        let envelope = failure(&err);
        assert_eq!(envelope["error"]["code"], "INSUFFICIENT_STOCK");
        assert_eq!(envelope["error"]["details"]["requested"], 200);
        assert_eq!(envelope["error"]["details"]["available"], 100);
        assert!(envelope.get("data").is_none());
    }

    #[test]
    fn failure_envelope_without_details_is_null() {
        let envelope = failure(&DomainError::not_found());
        assert_eq!(envelope["error"]["code"], "NOT_FOUND");
        assert!(envelope["error"]["details"].is_null());
    }
}
