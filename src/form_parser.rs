use percent_encoding::percent_decode_str;
use std::collections::HashMap;

/// Decodes a URL-encoded form component.
///
/// `+` stands for a space; a literal plus arrives as `%2B`.
///
/// # Examples
///
/// ```
/// use string_calculator::form_parser::decode_url_component;
///
/// assert_eq!(decode_url_component("1%2C2+3").unwrap(), "1,2 3");
/// assert_eq!(decode_url_component("1%2B2").unwrap(), "1+2");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, String> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| format!("Failed to decode URL component: {}", e))
}

/// Parses an `application/x-www-form-urlencoded` body into a field map.
///
/// The first occurrence of a repeated key wins, and a key without `=` maps to
/// an empty value.
///
/// # Examples
///
/// ```
/// use string_calculator::form_parser::parse_form_data;
///
/// let fields = parse_form_data("numbers=1%2C2&numbers=9").unwrap();
/// assert_eq!(fields.get("numbers").map(String::as_str), Some("1,2"));
/// ```
pub fn parse_form_data(form_data: &str) -> Result<HashMap<String, String>, String> {
    let mut map: HashMap<String, String> = HashMap::new();

    for pair in form_data.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_url_component(raw_key)
            .map_err(|e| format!("Failed to decode key: {}", e))?;
        let value = decode_url_component(raw_value)
            .map_err(|e| format!("Failed to decode value: {}", e))?;
        map.entry(key).or_insert(value);
    }

    Ok(map)
}
