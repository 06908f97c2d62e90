use crate::helpers::{DismissCounter, fixture};
use targetboard::{Body, DisplayMode, OverlayLabels, OverlayProps};

#[test]
fn empty_collection_shows_empty_state() {
    let close = || {};
    let view = OverlayProps::builder()
        .open(true)
        .title("EMPTY")
        .records(&[])
        .on_dismiss(&close)
        .build()
        .unwrap()
        .render()
        .unwrap();
    assert_eq!(
        view.body,
        Body::Empty {
            message: "No price target data available.".to_string()
        }
    );
    assert!(view.body.is_empty());
    assert!(view.body.rows().is_empty());
    assert_eq!(view.footer, None);
}

#[test]
fn all_invalid_collection_shows_empty_state_not_a_list() {
    let records = fixture("JUNK");
    let counter = DismissCounter::default();
    let close = || counter.hit();
    for mode in [DisplayMode::High, DisplayMode::Low] {
        let view = OverlayProps::builder()
            .open(true)
            .title("JUNK")
            .records(&records)
            .mode(mode)
            .on_dismiss(&close)
            .build()
            .unwrap()
            .render()
            .unwrap();
        assert!(matches!(view.body, Body::Empty { .. }));
        assert_eq!(view.header.title, "JUNK Price Targets");
    }
    assert_eq!(counter.count(), 0, "rendering never calls back");
}

#[test]
fn custom_labels_drive_the_empty_message() {
    let labels = OverlayLabels {
        empty_message: "Keine Kursziele".to_string(),
        ..OverlayLabels::default()
    };
    let close = || {};
    let view = OverlayProps::builder()
        .open(true)
        .labels(&labels)
        .on_dismiss(&close)
        .build()
        .unwrap()
        .render()
        .unwrap();
    assert_eq!(
        view.body,
        Body::Empty {
            message: "Keine Kursziele".to_string()
        }
    );
}
