//! Lambda proxy response builders.

use serde_json::{Value, json};

use crate::errors::RequestError;

const JSON_CONTENT_TYPE: &str = "application/json";
const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Returns a 200 OK response carrying the computed sum.
#[must_use]
pub fn ok_result(result: u64) -> Value {
    json_response(200, &json!({ "result": result }))
}

/// Returns a 200 OK response with an HTML body.
#[must_use]
pub fn ok_html(html: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": HTML_CONTENT_TYPE },
        "body": html
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// Maps a request failure onto its status code and `{"error": ...}` body.
#[must_use]
pub fn from_request_error(error: &RequestError) -> Value {
    err_response(error.status_code(), &error.to_string())
}

fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": JSON_CONTENT_TYPE },
        "body": body.to_string()
    })
}
