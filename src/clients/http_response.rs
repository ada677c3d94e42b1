//! HTTP response types for the QuickBooks API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing API
//! response data, including the QuickBooks `Fault` error envelope.

use std::collections::HashMap;

use serde_json::Value;

/// An HTTP response from the QuickBooks API.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::clients::HttpResponse;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("intuit_tid".to_string(), vec!["1-66f2-abc".to_string()]);
///
/// let response = HttpResponse::new(
///     400,
///     headers,
///     json!({"Fault": {"Error": [{"Message": "Stale Object Error", "code": "5010"}]}}),
/// );
///
/// assert!(!response.is_ok());
/// assert_eq!(response.request_id(), Some("1-66f2-abc"));
/// assert_eq!(response.fault_code(), Some("5010"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `intuit_tid` header value, if present.
    ///
    /// Intuit support asks for this transaction ID when investigating errors.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("intuit_tid")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Fault` object from the body, if present.
    ///
    /// Authentication failures use a lowercase `fault` key, so both
    /// spellings are accepted.
    #[must_use]
    pub fn fault(&self) -> Option<&Value> {
        self.body.get("Fault").or_else(|| self.body.get("fault"))
    }

    /// Returns the code of the first error inside the `Fault`, if present.
    #[must_use]
    pub fn fault_code(&self) -> Option<&str> {
        let fault = self.fault()?;
        let errors = fault.get("Error").or_else(|| fault.get("error"))?;
        errors.get(0)?.get("code")?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 404, 429, 500] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("intuit_tid".to_string(), vec!["abc-123-xyz".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
    }

    #[test]
    fn test_fault_code_from_validation_fault() {
        let response = HttpResponse::new(
            400,
            HashMap::new(),
            json!({
                "Fault": {
                    "Error": [{
                        "Message": "Stale Object Error",
                        "Detail": "Stale Object Error : You and root were working on this at the same time.",
                        "code": "5010",
                        "element": ""
                    }],
                    "type": "ValidationFault"
                },
                "time": "2024-03-04T10:11:12.000-08:00"
            }),
        );

        assert_eq!(response.fault_code(), Some("5010"));
    }

    #[test]
    fn test_fault_code_from_lowercase_auth_fault() {
        let response = HttpResponse::new(
            401,
            HashMap::new(),
            json!({
                "fault": {
                    "error": [{"message": "message=AuthenticationFailed", "code": "3200"}],
                    "type": "SERVICE"
                }
            }),
        );

        assert!(response.fault().is_some());
        assert_eq!(response.fault_code(), Some("3200"));
    }

    #[test]
    fn test_fault_is_none_for_success_body() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"Invoice": {"Id": "1"}}));
        assert!(response.fault().is_none());
        assert!(response.fault_code().is_none());
    }
}
