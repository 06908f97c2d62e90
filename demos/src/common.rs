use targetboard::{DisplayMode, OverlayView, PriceTargetRecord, TargetboardError};
use targetboard_mock::MockFeed;

/// Records for a demo symbol, as a host would hand them over after loading.
///
/// # Errors
/// Returns an error if the fixture payload for `symbol` fails to decode.
pub fn load_records(symbol: &str) -> Result<Vec<PriceTargetRecord>, TargetboardError> {
    MockFeed::new().records(symbol)
}

/// Demo symbol from the first CLI argument, `AAPL` otherwise.
#[must_use]
pub fn symbol_arg() -> String {
    std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string())
}

/// Mode from the second CLI argument (`high`/`low`), `High` otherwise.
///
/// # Errors
/// Returns `Err(TargetboardError::InvalidArg)` for an unrecognized mode string.
pub fn mode_arg() -> Result<DisplayMode, TargetboardError> {
    std::env::args()
        .nth(2)
        .map_or(Ok(DisplayMode::High), |s| s.parse())
}

/// Print a rendered overlay, or a note when it is hidden.
pub fn print_view(view: Option<&OverlayView>) {
    match view {
        Some(v) => print!("{v}"),
        None => println!("(overlay hidden)"),
    }
}
