use targetboard::{DisplayMode, OverlayLabels, OverlayProps, TargetboardError};

#[test]
fn build_requires_dismiss_callback() {
    let err = OverlayProps::builder().open(true).title("AAPL").build().unwrap_err();
    assert_eq!(err, TargetboardError::missing_field("on_dismiss"));
    assert!(!err.is_actionable());
}

#[test]
fn builder_defaults() {
    let close = || {};
    let props = OverlayProps::builder().on_dismiss(&close).build().unwrap();
    assert!(!props.open);
    assert_eq!(props.title, "");
    assert!(props.records.is_empty());
    assert_eq!(props.mode, DisplayMode::High);
    assert_eq!(*props.labels, OverlayLabels::default());
}

#[test]
fn blank_title_keeps_suffix_only() {
    let close = || {};
    let view = OverlayProps::builder()
        .open(true)
        .title("   ")
        .on_dismiss(&close)
        .build()
        .unwrap()
        .render()
        .unwrap();
    assert_eq!(view.header.title, "Price Targets");
}

#[test]
fn debug_output_omits_callback_and_record_bodies() {
    let close = || {};
    let props = OverlayProps::builder()
        .title("MSFT")
        .on_dismiss(&close)
        .build()
        .unwrap();
    let dbg = format!("{props:?}");
    assert!(dbg.contains("MSFT"));
    assert!(dbg.contains("records: 0"));
}
