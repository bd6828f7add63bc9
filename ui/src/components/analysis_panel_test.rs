use super::*;

#[test]
fn metric_missing_renders_not_available() {
    assert_eq!(format_metric(None), "N/A");
}

#[test]
fn metric_renders_plain_number() {
    assert_eq!(format_metric(Some(1.42)), "1.42");
    assert_eq!(format_metric(Some(2.0)), "2");
    assert_eq!(format_metric(Some(-0.5)), "-0.5");
}

#[test]
fn blank_text_renders_not_available() {
    assert_eq!(format_text(None), "N/A");
    assert_eq!(format_text(Some("  ")), "N/A");
    assert_eq!(format_text(Some("Gri bölge")), "Gri bölge");
}
