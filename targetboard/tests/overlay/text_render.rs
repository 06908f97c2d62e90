use crate::helpers::values;
use targetboard::{DisplayMode, OverlayProps};

#[test]
fn text_rendering_of_a_short_list() {
    let mut records = values(&[1234.5, 98.0]);
    records[0].published_date = "2024-01-05".to_string();
    records[1].published_date = "bogus".to_string();
    records[1].analyst_firm = Some("Wells Fargo".to_string());
    let close = || {};
    let view = OverlayProps::builder()
        .open(true)
        .title("KO")
        .records(&records)
        .mode(DisplayMode::High)
        .on_dismiss(&close)
        .build()
        .unwrap()
        .render()
        .unwrap();

    let expected = "\
KO Price Targets [Close]
  1. Firm 0       $1,234.50  Jan 5, 2024
  2. Wells Fargo     $98.00  Invalid date
  Showing 2 of 2 analyst targets
";
    assert_eq!(view.to_string(), expected);
}

#[test]
fn text_rendering_of_empty_state() {
    let close = || {};
    let view = OverlayProps::builder()
        .open(true)
        .title("KO")
        .on_dismiss(&close)
        .build()
        .unwrap()
        .render()
        .unwrap();
    assert_eq!(
        view.to_string(),
        "KO Price Targets [Close]\n  No price target data available.\n"
    );
}
