use targetboard::OverlayProps;
use targetboard_demos::common::{load_records, mode_arg, print_view, symbol_arg};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Pick the instrument and direction (defaults: AAPL, high).
    let symbol = symbol_arg();
    let mode = mode_arg()?;

    // 2. The host already holds the records; the overlay only borrows them.
    let records = load_records(&symbol)?;
    println!("Loaded {} price targets for {symbol}", records.len());

    // 3. Render once with the overlay open.
    let close = || println!("(dismiss requested)");
    let props = OverlayProps::builder()
        .open(true)
        .title(&symbol)
        .records(&records)
        .mode(mode)
        .on_dismiss(&close)
        .build()?;

    println!();
    print_view(props.render().as_ref());
    Ok(())
}
