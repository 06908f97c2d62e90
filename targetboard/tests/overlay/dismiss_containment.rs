use crate::helpers::{AAPL, DismissCounter, fixture};
use targetboard::{Handler, OverlayProps, Propagation, Region, dispatch_click};

fn open_props<'a>(
    records: &'a [targetboard::PriceTargetRecord],
    close: &'a dyn Fn(),
) -> OverlayProps<'a> {
    OverlayProps::builder()
        .open(true)
        .title(AAPL)
        .records(records)
        .on_dismiss(close)
        .build()
        .unwrap()
}

#[test]
fn panel_click_does_not_dismiss() {
    let records = fixture(AAPL);
    let counter = DismissCounter::default();
    let close = || counter.hit();
    let props = open_props(&records, &close);

    let out = dispatch_click(Region::Panel, &props);
    assert!(!out.dismissed);
    assert_eq!(out.stopped_at, Some(Region::Panel));
    assert_eq!(counter.count(), 0);
}

#[test]
fn backdrop_click_dismisses_exactly_once() {
    let records = fixture(AAPL);
    let counter = DismissCounter::default();
    let close = || counter.hit();
    let props = open_props(&records, &close);

    let out = props.click(Region::Backdrop);
    assert!(out.dismissed);
    assert_eq!(out.stopped_at, None);
    assert_eq!(counter.count(), 1);
}

#[test]
fn dismiss_button_fires_once_and_stops_at_panel() {
    let records = fixture(AAPL);
    let counter = DismissCounter::default();
    let close = || counter.hit();
    let props = open_props(&records, &close);

    let out = props.click(Region::DismissButton);
    assert!(out.dismissed);
    assert_eq!(out.stopped_at, Some(Region::Panel));
    assert_eq!(counter.count(), 1);
}

#[test]
fn repeated_clicks_each_request_closure() {
    // The overlay does not hide itself; the caller owns the open flag.
    let counter = DismissCounter::default();
    let close = || counter.hit();
    let props = open_props(&[], &close);
    props.click(Region::Backdrop);
    props.click(Region::Panel);
    props.click(Region::Backdrop);
    assert_eq!(counter.count(), 2);
    assert!(props.render().is_some());
}

#[test]
fn bubble_paths_and_handlers() {
    assert_eq!(Region::Backdrop.bubble_path(), &[Region::Backdrop]);
    assert_eq!(Region::Panel.bubble_path(), &[Region::Panel, Region::Backdrop]);
    assert_eq!(
        Region::DismissButton.bubble_path(),
        &[Region::DismissButton, Region::Panel, Region::Backdrop]
    );
    assert_eq!(Region::Backdrop.handler(), Handler::RequestClose);
    assert_eq!(Region::DismissButton.handler(), Handler::RequestClose);
    assert_eq!(Region::Panel.handler(), Handler::Absorb);
}

#[test]
fn handlers_report_propagation() {
    let counter = DismissCounter::default();
    let close = || counter.hit();
    assert_eq!(Handler::Absorb.invoke(&close), (Propagation::Stop, false));
    assert_eq!(counter.count(), 0);
    assert_eq!(
        Handler::RequestClose.invoke(&close),
        (Propagation::Continue, true)
    );
    assert_eq!(counter.count(), 1);
}
