use clap::Parser;
use druid::kurbo::Point;
use druid::{AppLauncher, LocalizedString, PlatformError, WindowDesc};

mod atom;
mod graphics;
mod state;
mod widget;

use atom::Atom;
use state::AppState;
use widget::AtomWidget;

/// Initial window dimensions. The nucleus is centered from these at
/// construction time and stays put; the window is not resizable.
const WINDOW_WIDTH: f64 = 400.0;
const WINDOW_HEIGHT: f64 = 400.0;

/// An animated 2D Bohr-model diagram of a sodium atom
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Start with the debug overlay enabled
    #[arg(long)]
    debug: bool,
    /// Start with the animation paused
    #[arg(long)]
    paused: bool,
}

/// Main function
pub fn main() -> Result<(), PlatformError> {
    let args = Args::parse();
    env_logger::init();

    let main_window = WindowDesc::new(AtomWidget::new())
        .title(LocalizedString::new("Sodium Atom (Na)"))
        .window_size((WINDOW_WIDTH, WINDOW_HEIGHT))
        .resizable(false);

    let initial_state = AppState {
        atom: Atom::sodium(Point::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0)),
        debug: args.debug,
        paused: args.paused,
    };

    log::info!(
        "starting {} {} with {} electrons on {} orbits",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        initial_state.atom.electrons.len(),
        initial_state.atom.orbits.len()
    );

    AppLauncher::with_window(main_window).launch(initial_state)?;

    Ok(())
}
