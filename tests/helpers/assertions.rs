// Test Assertion Helpers
//
// Provides common assertions for HTTP responses in integration tests.

use actix_web::http::StatusCode;
use awc::ClientResponse;
use serde_json::Value;

/// Assert HTTP response is 200 OK
///
/// # Panics
/// If status code is not 200
pub fn assert_ok<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::OK);
}

/// Assert HTTP response is 400 Bad Request
///
/// # Panics
/// If status code is not 400
pub fn assert_bad_request<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::BAD_REQUEST);
}

pub fn assert_status<S>(response: &ClientResponse<S>, expected: StatusCode) {
    let status = response.status();
    assert_eq!(
        status,
        expected,
        "Expected {} {}, got {} {}",
        expected.as_u16(),
        expected.canonical_reason().unwrap_or("Unknown"),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
}

/// Assert the failure envelope `{"success": false, "error": "<message>"}`
///
/// Returns the error message for further checks.
pub fn assert_error_envelope(body: &Value) -> String {
    assert_eq!(body["success"], false, "Expected success=false in {}", body);
    body["error"]
        .as_str()
        .unwrap_or_else(|| panic!("Expected string error field in {}", body))
        .to_string()
}

/// Assert a cost breakdown object matches the expected figures, in field order
/// payment_fees, fx_fees, failed_payments, tax_overhead, chargebacks, total
pub fn assert_breakdown(breakdown: &Value, expected: [f64; 6]) {
    let fields = [
        "payment_fees",
        "fx_fees",
        "failed_payments",
        "tax_overhead",
        "chargebacks",
        "total",
    ];

    for (field, expected) in fields.iter().zip(expected) {
        let actual = breakdown[field]
            .as_f64()
            .unwrap_or_else(|| panic!("Field '{}' missing or not a number in {}", field, breakdown));
        assert_eq!(actual, expected, "Field '{}' mismatch", field);
    }
}
