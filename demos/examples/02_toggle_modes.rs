use std::cell::Cell;

use targetboard::{DisplayMode, OverlayProps, Region};
use targetboard_demos::common::{load_records, print_view};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let records = load_records("AAPL")?;

    // Host-owned state: visibility and the selected direction.
    let open = Cell::new(true);
    let mode = Cell::new(DisplayMode::High);
    let close = || open.set(false);

    let frame = || {
        OverlayProps::builder()
            .open(open.get())
            .title("AAPL")
            .records(&records)
            .mode(mode.get())
            .on_dismiss(&close)
            .build()
    };

    println!("## Highest");
    print_view(frame()?.render().as_ref());

    mode.set(mode.get().flipped());
    println!("\n## Lowest (same records, re-ranked)");
    print_view(frame()?.render().as_ref());

    // Clicking inside the panel keeps it open; the backdrop closes it.
    frame()?.click(Region::Panel);
    println!("\nAfter panel click: open = {}", open.get());
    frame()?.click(Region::Backdrop);
    println!("After backdrop click: open = {}", open.get());
    print_view(frame()?.render().as_ref());

    Ok(())
}
