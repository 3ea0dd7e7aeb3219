use super::*;

#[test]
fn fill_style_embeds_opacity() {
    assert_eq!(fill_style(0.35), "rgba(99, 102, 241, 0.35)");
}

#[test]
fn fill_style_full_opacity() {
    assert_eq!(fill_style(0.7), "rgba(99, 102, 241, 0.7)");
}
