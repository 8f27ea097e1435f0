use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::RequestError;
use crate::form_parser::parse_form_data;

/// Where the `numbers` field came from once the body has been decoded.
#[derive(Debug, PartialEq)]
pub enum RequestData {
    Json(Value),
    Form(HashMap<String, String>),
}

impl RequestData {
    /// Extracts the `numbers` field; `Ok(None)` is an explicit JSON null.
    pub fn numbers(&self) -> Result<Option<&str>, RequestError> {
        match self {
            RequestData::Json(value) => {
                let Some(numbers) = value.as_object().and_then(|map| map.get("numbers")) else {
                    return Err(RequestError::MissingNumbers);
                };
                match numbers {
                    Value::Null => Ok(None),
                    Value::String(s) => Ok(Some(s.as_str())),
                    _ => Err(RequestError::InvalidNumbers),
                }
            }
            RequestData::Form(fields) => fields
                .get("numbers")
                .map(|s| Some(s.as_str()))
                .ok_or(RequestError::MissingNumbers),
        }
    }
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    cur.as_str()
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// HTTP method from a v2 (`requestContext.http.method`) or v1 (`httpMethod`) event.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// Path used for routing, with a named v2 stage (`/prod/add`) removed.
///
/// v1 `path` never carries the stage; `$default` stages add no prefix.
pub fn route_path(payload: &Value) -> &str {
    let Some(raw) = v_str(payload, &["rawPath"]) else {
        return v_str(payload, &["path"]).unwrap_or("/");
    };
    match v_str(payload, &["requestContext", "stage"]) {
        Some(stage) if stage != "$default" => raw
            .strip_prefix('/')
            .and_then(|p| p.strip_prefix(stage))
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(raw),
        _ => raw,
    }
}

/// Media type of the request without parameters, lowercased.
pub fn content_type(payload: &Value) -> Option<String> {
    let headers = payload.get("headers")?;
    get_header_value(headers, "Content-Type").map(|raw| {
        raw.split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    })
}

pub fn is_json_content_type(media_type: &str) -> bool {
    media_type == "application/json"
        || (media_type.starts_with("application/") && media_type.ends_with("+json"))
}

/// Returns the raw request body, undoing Lambda's base64 wrapping.
pub fn extract_body(payload: &Value) -> Result<String, RequestError> {
    let body = payload
        .get("body")
        .and_then(|b| b.as_str())
        .unwrap_or_default();

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !encoded {
        return Ok(body.to_string());
    }

    let bytes = STANDARD.decode(body)?;
    String::from_utf8(bytes).map_err(|e| RequestError::InvalidEncoding(e.to_string()))
}

/// Decodes the body according to its content type.
///
/// Bodies that are neither JSON nor URL-encoded forms yield an empty form.
pub fn parse_request_data(payload: &Value) -> Result<RequestData, RequestError> {
    let media_type = content_type(payload).unwrap_or_default();
    let body = extract_body(payload)?;

    if is_json_content_type(&media_type) {
        let value = serde_json::from_str(&body).map_err(RequestError::InvalidJson)?;
        return Ok(RequestData::Json(value));
    }

    if media_type == "application/x-www-form-urlencoded" {
        let fields = parse_form_data(&body).map_err(RequestError::InvalidEncoding)?;
        return Ok(RequestData::Form(fields));
    }

    Ok(RequestData::Form(HashMap::new()))
}
