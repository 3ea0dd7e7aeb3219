use super::*;

// =============================================================================
// attachment_filename
// =============================================================================

#[test]
fn filename_from_final_segment() {
    assert_eq!(
        attachment_filename("https://cdn.example.com/out/figure.png", 0),
        "figure.png"
    );
}

#[test]
fn filename_strips_query_string() {
    assert_eq!(attachment_filename("https://cdn.example.com/abc.jpg?x=1&y=2", 0), "abc.jpg");
}

#[test]
fn filename_without_extension_gets_default() {
    assert_eq!(attachment_filename("https://cdn.example.com/abc?x=1", 0), "abc.jpg");
}

#[test]
fn trailing_slash_falls_back_to_timestamped_name() {
    assert_eq!(
        attachment_filename("https://cdn.example.com/out/", 1_700_000_000_000),
        "figure_art_1700000000000.jpg"
    );
}

#[test]
fn bare_query_after_slash_falls_back_to_timestamped_name() {
    assert_eq!(attachment_filename("https://cdn.example.com/?x=1", 42), "figure_art_42.jpg");
}

#[test]
fn dotted_segment_is_kept_verbatim() {
    assert_eq!(
        attachment_filename("https://cdn.example.com/a/b/archive.tar.gz", 0),
        "archive.tar.gz"
    );
}

// =============================================================================
// Missing `url` parameter — handlers reject before any fetch
// =============================================================================

async fn test_state() -> AppState {
    AppState::from_env().expect("client builds")
}

#[tokio::test]
async fn proxy_image_without_url_is_400() {
    let state = test_state().await;
    let response = proxy_image(State(state), Query(RelayQuery { url: None })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn download_without_url_is_400() {
    let state = test_state().await;
    let response = download(State(state), Query(RelayQuery { url: None })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn download_unreachable_url_is_500() {
    let state = test_state().await;
    // Nothing listens on the discard port; connect is refused immediately.
    let response = download(
        State(state),
        Query(RelayQuery { url: Some("http://127.0.0.1:9/none".to_owned()) }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
