use crate::atom::Atom;
use druid::Data;

/// Application state
#[derive(Clone, Data)]
pub struct AppState {
    /// The sodium atom being animated
    #[data(same_fn = "PartialEq::eq")]
    pub atom: Atom,
    /// Enable debug overlay
    pub debug: bool,
    /// Animation paused
    pub paused: bool,
}
