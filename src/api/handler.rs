//! API Lambda handler - thin router in front of the calculator.
//!
//! Routes:
//! - `GET /` serves the HTML form
//! - `POST /add` sums the `numbers` field of a JSON or form body

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::StringCalculator;
use crate::errors::RequestError;
use crate::views;

pub use self::function_handler as handler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Index,
    Add,
}

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails for a malformed request; every outcome is encoded in the
/// returned proxy response.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(route_request(&event.payload))
}

/// Dispatches a Lambda proxy event and builds the proxy response.
#[must_use]
pub fn route_request(payload: &Value) -> Value {
    let method = parsing::request_method(payload).unwrap_or("GET");
    let raw_path = parsing::request_path(payload).unwrap_or("/");
    let path = parsing::route_path(payload);
    info!(method = %method, raw_path = %raw_path, route_path = %path, "Request received");

    let result = match (resolve_route(path), method.to_ascii_uppercase().as_str()) {
        (Some(Route::Index), "GET" | "HEAD") => Ok(helpers::ok_html(views::index_form())),
        (Some(Route::Add), "POST") => handle_add(payload).map(helpers::ok_result),
        (Some(_), _) => Err(RequestError::MethodNotAllowed),
        (None, _) => Err(RequestError::NotFound),
    };

    result.unwrap_or_else(|e| {
        error!(status = e.status_code(), "Request rejected: {}", e);
        helpers::from_request_error(&e)
    })
}

fn resolve_route(path: &str) -> Option<Route> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        Some(Route::Index)
    } else if trimmed == "/add" {
        Some(Route::Add)
    } else {
        None
    }
}

fn handle_add(payload: &Value) -> Result<u64, RequestError> {
    let data = parsing::parse_request_data(payload)?;
    let numbers = data.numbers()?;
    let result = StringCalculator::new().add(numbers)?;
    info!(result, "Computed sum");
    Ok(result)
}
