use std::cell::Cell;

use targetboard::{DisplayMode, OverlayProps, Region};
use targetboard_demos::common::{load_records, print_view};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Human-friendly subscriber with env-based filtering.
    // Suggested: RUST_LOG=targetboard=trace cargo run --example 00_tracing --features tracing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let records = load_records("AAPL")?;
    let open = Cell::new(true);
    let close = || open.set(false);

    let props = OverlayProps::builder()
        .open(open.get())
        .title("AAPL")
        .records(&records)
        .mode(DisplayMode::High)
        .on_dismiss(&close)
        .build()?;
    print_view(props.render().as_ref());

    let outcome = props.click(Region::Backdrop);
    tracing::info!(dismissed = outcome.dismissed, "backdrop clicked");

    Ok(())
}
