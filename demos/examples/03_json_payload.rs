use targetboard::{DisplayMode, OverlayLabels, OverlayProps, records_from_json, summarize};
use targetboard_demos::common::print_view;
use targetboard_mock::MockFeed;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. A payload as the host might receive it, with a few malformed values.
    let json = MockFeed::new().raw_json("TSLA").ok_or("no TSLA payload")?;
    let records = records_from_json(json)?;

    let summary = summarize(&records);
    println!(
        "{} records, {} usable, {} skipped",
        summary.total,
        summary.valid,
        summary.invalid()
    );

    // 2. Custom labels instead of the stock English strings.
    let labels = OverlayLabels {
        title_suffix: "analyst targets (low to high)".to_string(),
        dismiss_label: "x".to_string(),
        ..OverlayLabels::default()
    };
    let close = || {};
    let props = OverlayProps::builder()
        .open(true)
        .title("TSLA")
        .records(&records)
        .mode(DisplayMode::Low)
        .labels(&labels)
        .on_dismiss(&close)
        .build()?;

    println!();
    print_view(props.render().as_ref());
    Ok(())
}
