//! Decoding of `tools/call` responses from the sum servers.

use serde::Deserialize;
use serde_json::Value;

use sum_mcp_core::{DecodedResult, ProtocolVersion, UnwrapError};

/// The JSON document the sum tool returns as its text content.
#[derive(Debug, Deserialize)]
struct SumPayload {
    result: f64,
    operation: String,
}

/// Pull the sum result out of a JSON-RPC response body.
///
/// Expects `result.content[0].text` to hold a JSON string with `result` and
/// `operation`. An `error` member wins over everything else.
pub fn unwrap_response(version: ProtocolVersion, body: &Value) -> Result<DecodedResult, UnwrapError> {
    if let Some(error) = body.get("error").filter(|e| !e.is_null()) {
        let error = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(UnwrapError::Remote { version, error });
    }

    let unexpected = || UnwrapError::UnexpectedFormat {
        version,
        raw: body.to_string(),
    };

    let text = body
        .get("result")
        .and_then(|r| r.get("content"))
        .and_then(|c| c.get(0))
        .and_then(|item| item.get("text"))
        .and_then(Value::as_str)
        .ok_or_else(unexpected)?;

    let payload: SumPayload = serde_json::from_str(text).map_err(|_| unexpected())?;

    Ok(DecodedResult {
        value: payload.result,
        operation: payload.operation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wrap(text: &str) -> Value {
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "content": [{ "type": "text", "text": text }] }
        })
    }

    #[test]
    fn decodes_nested_payload() {
        let body = wrap(r#"{"result": 5, "operation": "a + b", "version": "1.0"}"#);
        let decoded = unwrap_response(ProtocolVersion::V1_0, &body).unwrap();
        assert!((decoded.value - 5.0).abs() < f64::EPSILON);
        assert_eq!(decoded.operation, "a + b");
    }

    #[test]
    fn string_error_is_carried_verbatim() {
        let body = json!({ "error": "HTTP 502: bad gateway" });
        let err = unwrap_response(ProtocolVersion::V1_1, &body).unwrap_err();
        match err {
            UnwrapError::Remote { version, error } => {
                assert_eq!(version, ProtocolVersion::V1_1);
                assert_eq!(error, "HTTP 502: bad gateway");
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn structured_error_is_rendered_as_json() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": "Missing 'b'" }
        });
        let err = unwrap_response(ProtocolVersion::V1_0, &body).unwrap_err();
        let UnwrapError::Remote { error, .. } = err else {
            panic!("expected remote error");
        };
        assert!(error.contains("-32602"));
        assert!(error.contains("Missing 'b'"));
    }

    #[test]
    fn null_error_is_ignored() {
        let mut body = wrap(r#"{"result": 1, "operation": "a + b"}"#);
        body["error"] = Value::Null;
        assert!(unwrap_response(ProtocolVersion::V1_0, &body).is_ok());
    }

    #[test]
    fn missing_content_is_unexpected_format() {
        let body = json!({ "result": { "content": [] } });
        let err = unwrap_response(ProtocolVersion::V1_0, &body).unwrap_err();
        let UnwrapError::UnexpectedFormat { raw, .. } = err else {
            panic!("expected format error");
        };
        assert!(raw.contains("content"));
    }

    #[test]
    fn inner_text_that_is_not_json_is_unexpected_format() {
        let body = wrap("not json");
        assert!(matches!(
            unwrap_response(ProtocolVersion::V1_0, &body),
            Err(UnwrapError::UnexpectedFormat { .. })
        ));
    }

    #[test]
    fn inner_payload_missing_operation_is_unexpected_format() {
        let body = wrap(r#"{"result": 3}"#);
        assert!(matches!(
            unwrap_response(ProtocolVersion::V1_1, &body),
            Err(UnwrapError::UnexpectedFormat { .. })
        ));
    }
}
