use super::*;

#[test]
fn parse_result_extracts_url() {
    let body = serde_json::json!({
        "status": true,
        "result": "https://cdn.example.com/out/figure.png"
    })
    .to_string();

    assert_eq!(parse_result(&body).unwrap(), "https://cdn.example.com/out/figure.png");
}

#[test]
fn parse_result_missing_field_is_error() {
    let body = serde_json::json!({ "status": true }).to_string();
    assert!(matches!(parse_result(&body), Err(FigureError::MissingResult)));
}

#[test]
fn parse_result_null_field_is_error() {
    let body = serde_json::json!({ "result": null }).to_string();
    assert!(matches!(parse_result(&body), Err(FigureError::MissingResult)));
}

#[test]
fn parse_result_empty_string_is_error() {
    // An empty URL must never be forwarded to the client.
    let body = serde_json::json!({ "result": "" }).to_string();
    assert!(matches!(parse_result(&body), Err(FigureError::MissingResult)));
}

#[test]
fn parse_result_invalid_json_is_parse_error() {
    assert!(matches!(parse_result("<html>busy</html>"), Err(FigureError::Parse(_))));
}

#[test]
fn missing_result_message() {
    assert_eq!(FigureError::MissingResult.to_string(), "API did not return a result");
}

#[test]
fn status_message_includes_status() {
    assert_eq!(FigureError::Status(502).to_string(), "Figure API returned status 502");
}
