// ABOUTME: Normalization boundary for backend response bodies
// ABOUTME: Strips diagnostic prefixes, extracts messages and field errors, normalizes id shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::constants::messages;
use crate::errors::{AppError, AppResult};

/// Slice the JSON document out of a body that carries leading or trailing text
///
/// The PHP backend prints warnings ahead of its JSON. The document is taken
/// from the first `{` or `[` to the last matching closer.
#[must_use]
pub fn extract_json(body: &str) -> Option<&str> {
    let start = body.find(&['{', '['][..])?;
    let closer = if body[start..].starts_with('{') { '}' } else { ']' };
    let end = body.rfind(closer)?;
    (end > start).then(|| &body[start..=end])
}

/// Parse a response body, optionally tolerating diagnostic text around the JSON
///
/// An empty body parses to `Value::Null`.
pub fn parse_body(body: &str, lenient: bool) -> AppResult<Value> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }

    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(value),
        Err(strict_error) => {
            if lenient {
                if let Some(slice) = extract_json(trimmed) {
                    debug!(
                        skipped = trimmed.len() - slice.len(),
                        "Stripped non-JSON diagnostic text from response body"
                    );
                    return serde_json::from_str(slice).map_err(|e| {
                        AppError::invalid_format(messages::INVALID_RESPONSE_FORMAT).with_source(e)
                    });
                }
            }
            warn!("Response body is not JSON: {}", strict_error);
            Err(AppError::invalid_format(messages::INVALID_RESPONSE_FORMAT).with_source(strict_error))
        }
    }
}

/// Human-readable message carried by a body, if any
#[must_use]
pub fn error_message(body: &Value) -> Option<String> {
    let candidate = body
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .or_else(|| {
            body.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
        })?;
    let trimmed = candidate.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Field-level validation errors (`{"errors": {"email": "taken"}}`)
///
/// Array values are joined; other scalars are stringified.
#[must_use]
pub fn field_errors(body: &Value) -> BTreeMap<String, String> {
    let Some(errors) = body.get("errors").and_then(Value::as_object) else {
        return BTreeMap::new();
    };
    errors
        .iter()
        .filter_map(|(field, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect::<Vec<_>>()
                    .join(", "),
                Value::Null => return None,
                other => other.to_string(),
            };
            (!text.is_empty()).then(|| (field.clone(), text))
        })
        .collect()
}

/// Fail when a success-status body signals `"success": false`
pub fn check_success_flag(body: &Value, generic: &str) -> AppResult<()> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = error_message(body).unwrap_or_else(|| generic.to_owned());
        return Err(AppError::application(message).with_field_errors(field_errors(body)));
    }
    Ok(())
}

/// Deserialize a normalized body into an endpoint type
pub fn decode<T: DeserializeOwned>(body: Value, what: &str) -> AppResult<T> {
    serde_json::from_value(body).map_err(|e| {
        AppError::invalid_format(format!("Unexpected {what} response: {e}")).with_source(e)
    })
}

/// Normalize the shapes a user id arrives in
///
/// Accepts a string, a number, or an object id (`{"oid": ..}` / `{"$oid": ..}`).
#[must_use]
pub fn normalize_user_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map
            .get("oid")
            .or_else(|| map.get("$oid"))
            .and_then(normalize_user_id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_extract_json_skips_php_warnings() {
        let body = "<br />\n<b>Warning</b>: Undefined index in login.php on line 12<br />\n{\"token\":\"abc\"}\n";
        assert_eq!(extract_json(body), Some("{\"token\":\"abc\"}"));
        assert_eq!(extract_json("Notice: x [1,2]"), Some("[1,2]"));
        assert_eq!(extract_json("no json here"), None);
    }

    #[test]
    fn test_parse_body_strict_rejects_prefix() {
        let body = "Deprecated: something {\"ok\":true}";
        assert!(parse_body(body, true).is_ok());
        let error = parse_body(body, false).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_empty_body_is_null() {
        assert_eq!(parse_body("  ", false).unwrap(), Value::Null);
    }

    #[test]
    fn test_success_false_becomes_application_failure() {
        let error = check_success_flag(&json!({"success": false, "message": "X"}), "generic")
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ApplicationFailure);
        assert_eq!(error.message, "X");

        let fallback = check_success_flag(&json!({"success": false}), "generic").unwrap_err();
        assert_eq!(fallback.message, "generic");

        assert!(check_success_flag(&json!({"success": true}), "generic").is_ok());
        assert!(check_success_flag(&json!([1, 2]), "generic").is_ok());
    }

    #[test]
    fn test_field_errors_accept_strings_and_lists() {
        let body = json!({"errors": {"email": "taken", "password": ["too short", "no digit"], "age": null}});
        let errors = field_errors(&body);
        assert_eq!(errors.get("email").map(String::as_str), Some("taken"));
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("too short, no digit")
        );
        assert!(!errors.contains_key("age"));
    }

    #[test]
    fn test_user_id_shapes() {
        assert_eq!(normalize_user_id(&json!("u1")).as_deref(), Some("u1"));
        assert_eq!(normalize_user_id(&json!(7)).as_deref(), Some("7"));
        assert_eq!(
            normalize_user_id(&json!({"oid": "65f0c1"})).as_deref(),
            Some("65f0c1")
        );
        assert_eq!(
            normalize_user_id(&json!({"$oid": "65f0c2"})).as_deref(),
            Some("65f0c2")
        );
        assert_eq!(normalize_user_id(&json!("")), None);
        assert_eq!(normalize_user_id(&json!({"other": 1})), None);
    }

    #[test]
    fn test_error_message_sources() {
        assert_eq!(error_message(&json!({"message": "bad"})).as_deref(), Some("bad"));
        assert_eq!(error_message(&json!({"error": "nope"})).as_deref(), Some("nope"));
        assert_eq!(
            error_message(&json!({"error": {"message": "deep"}})).as_deref(),
            Some("deep")
        );
        assert_eq!(error_message(&json!({"message": ""})), None);
    }
}
