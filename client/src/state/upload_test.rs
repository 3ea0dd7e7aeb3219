use super::*;

fn selected_state() -> UploadState {
    let mut state = UploadState::default();
    state.select("photo.jpg".into(), "image/jpeg".into(), 1024);
    state
}

#[test]
fn default_cannot_generate() {
    let state = UploadState::default();
    assert!(!state.can_generate());
    assert_eq!(state.preview(), None);
}

#[test]
fn select_enables_generation_and_clears_result() {
    let mut state = UploadState::default();
    state.result_url = Some("https://cdn.example.com/old.png".into());

    state.select("photo.jpg".into(), "image/jpeg".into(), 1024);
    assert!(state.can_generate());
    assert_eq!(state.result_url, None);
}

#[test]
fn preview_arrives_after_selection() {
    let mut state = selected_state();
    assert_eq!(state.preview(), None);

    state.set_preview("data:image/jpeg;base64,abcd".into());
    assert_eq!(state.preview(), Some("data:image/jpeg;base64,abcd"));
}

#[test]
fn late_preview_after_clear_is_dropped() {
    let mut state = selected_state();
    state.clear_selection();

    state.set_preview("data:image/jpeg;base64,abcd".into());
    assert_eq!(state.preview(), None);
    assert_eq!(state.selected, None);
}

#[test]
fn begin_generate_requires_selection() {
    let mut state = UploadState::default();
    assert!(!state.begin_generate());
    assert!(!state.generating);
}

#[test]
fn begin_generate_is_not_reentrant() {
    let mut state = selected_state();
    assert!(state.begin_generate());
    assert!(!state.begin_generate());
    assert!(state.generating);
    assert!(!state.can_generate());
}

#[test]
fn finish_generate_success_records_result() {
    let mut state = selected_state();
    assert!(state.begin_generate());

    state.finish_generate(Some("https://cdn.example.com/figure.png".into()));
    assert!(!state.generating);
    assert_eq!(state.result_url.as_deref(), Some("https://cdn.example.com/figure.png"));
    assert!(state.can_generate(), "controls re-enable after completion");
}

#[test]
fn finish_generate_failure_keeps_previous_result() {
    let mut state = selected_state();
    state.result_url = Some("https://cdn.example.com/first.png".into());
    assert!(state.begin_generate());

    state.finish_generate(None);
    assert!(!state.generating);
    assert_eq!(state.result_url.as_deref(), Some("https://cdn.example.com/first.png"));
}

#[test]
fn reset_clears_everything() {
    let mut state = selected_state();
    state.set_preview("data:image/jpeg;base64,abcd".into());
    assert!(state.begin_generate());
    state.finish_generate(Some("https://cdn.example.com/figure.png".into()));

    state.reset();
    assert_eq!(state, UploadState::default());
}
