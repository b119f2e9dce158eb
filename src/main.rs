use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use led_canvas::constants::{KEYBOARD_LEDS, MOUSE_LEDS};
use led_canvas::utils::random_color;
use led_canvas::{Canvas, Color};

/// Prints one terminal swatch per light-element, 36 per line.
fn print_zone(name: &str, slots: &[Color]) {
    println!("{} ({} elements):", name, slots.len());
    for row in slots.chunks(36) {
        for color in row {
            print!("\x1b[48;2;{};{};{}m  \x1b[0m", color.r, color.g, color.b);
        }
        println!();
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or("info,led_canvas=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // An optional #rrggbb[aa] argument overrides the random fill color
    let color = match std::env::args().nth(1) {
        Some(arg) => Color::from_hex(&arg).with_context(|| format!("Bad color {arg:?}"))?,
        None => random_color(),
    };

    info!("Building a canvas and filling it with {:?}", color);

    let mut canvas = Canvas::new();
    debug!(
        "Fresh canvas: {} slots, all transparent: {}",
        canvas.size(),
        canvas.iter().all(|c| *c == Color::TRANSPARENT)
    );

    canvas.fill_all(color);

    print_zone("keyboard", &canvas.as_slice()[..KEYBOARD_LEDS]);
    print_zone("mouse", &canvas.as_slice()[KEYBOARD_LEDS..]);

    info!(
        "Canvas ready: {} color values to hand off to the daemon",
        MOUSE_LEDS + KEYBOARD_LEDS
    );

    Ok(())
}
