use string_calculator::{StringCalculator, ValidationError, add};

fn calc() -> StringCalculator {
    StringCalculator::new()
}

#[test]
fn test_add_empty_and_absent_input() {
    assert_eq!(calc().add(None), Ok(0));
    assert_eq!(calc().add(Some("")), Ok(0));
}

#[test]
fn test_add_two_numbers() {
    assert_eq!(calc().add(Some("1,2")), Ok(3));
    assert_eq!(calc().add(Some("10,4")), Ok(14));
}

#[test]
fn test_add_with_default_delimiters() {
    assert_eq!(calc().add(Some("1,2,3")), Ok(6));
    assert_eq!(calc().add(Some("1 2 3")), Ok(6));
    assert_eq!(calc().add(Some("1,2 3")), Ok(6));
}

#[test]
fn test_empty_tokens_are_skipped() {
    assert_eq!(calc().add(Some("1,,2")), Ok(3));
    assert_eq!(calc().add(Some("1, 2,")), Ok(3));
    assert_eq!(calc().add(Some(",")), Ok(0));
}

#[test]
fn test_add_with_custom_delimiter() {
    assert_eq!(calc().add(Some("//;\n1;2;3")), Ok(6));
    // Defaults stay active alongside the custom delimiter
    assert_eq!(calc().add(Some("//;\n1;2,3 4")), Ok(10));
}

#[test]
fn test_custom_delimiters_are_literal() {
    assert_eq!(calc().add(Some("//**\n1**2")), Ok(3));
    assert_eq!(calc().add(Some("//.\n1.2")), Ok(3));
    assert_eq!(calc().add(Some("//|\n4|5")), Ok(9));
    assert_eq!(calc().add(Some("//sep\n1sep2sep3")), Ok(6));
}

#[test]
fn test_empty_custom_delimiter_uses_defaults() {
    assert_eq!(calc().add(Some("//\n1,2")), Ok(3));
}

#[test]
fn test_custom_delimiter_without_newline_is_rejected() {
    assert_eq!(
        calc().add(Some("//;1;2")),
        Err(ValidationError::MalformedDelimiter)
    );
    assert_eq!(calc().add(Some("//")), Err(ValidationError::MalformedDelimiter));
}

#[test]
fn test_long_custom_delimiter() {
    let delimiter = "x".repeat(2_000_000);
    let input = format!("//{delimiter}\n1{delimiter}2,3");
    assert_eq!(calc().add(Some(&input)), Ok(6));
}

#[test]
fn test_ignore_numbers_greater_than_100() {
    assert_eq!(calc().add(Some("1,2,100,101")), Ok(103));
    assert_eq!(calc().add(Some("100,101")), Ok(100));
    assert_eq!(calc().add(Some("1000,99999999999999999999999")), Ok(0));
}

#[test]
fn test_non_integer_numbers_rejected() {
    assert_eq!(calc().add(Some("1,2,3.14")), Err(ValidationError::NonInteger));
    assert_eq!(calc().add(Some("1,two")), Err(ValidationError::NonInteger));
    // Newlines are not delimiters outside the custom header
    assert_eq!(calc().add(Some("1\n2")), Err(ValidationError::NonInteger));
}

#[test]
fn test_no_negative_numbers_allowed() {
    assert_eq!(calc().add(Some("1,-2,3")), Err(ValidationError::Negative));
    assert_eq!(calc().add(Some("//;\n1;-2")), Err(ValidationError::Negative));
}

#[test]
fn test_first_bad_token_decides_the_error() {
    assert_eq!(calc().add(Some("x,-1")), Err(ValidationError::NonInteger));
    assert_eq!(calc().add(Some("-1,x")), Err(ValidationError::Negative));
}

#[test]
fn test_trailing_whitespace_is_tolerated() {
    assert_eq!(calc().add(Some("1,2\n")), Ok(3));
}

#[test]
fn test_sum_matches_arithmetic_sum() {
    let values: Vec<u64> = (0..=100).step_by(7).collect();
    let delimiters = [",", " ", ";"];
    let mut input = String::from("//;\n");
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            input.push_str(delimiters[i % delimiters.len()]);
        }
        input.push_str(&v.to_string());
    }

    assert_eq!(calc().add(Some(&input)), Ok(values.iter().sum::<u64>()));

    let mut reversed = values.clone();
    reversed.reverse();
    let joined = reversed
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    assert_eq!(calc().add(Some(&joined)), Ok(values.iter().sum::<u64>()));
}

#[test]
fn test_default_delimiters_are_copies() {
    let mut delimiters = calc().default_delimiters();
    delimiters.push(";".to_string());

    assert_eq!(calc().default_delimiters(), vec![",", " "]);
}

#[test]
fn test_free_function_matches_method() {
    assert_eq!(add(Some("5 5")), calc().add(Some("5 5")));
}
