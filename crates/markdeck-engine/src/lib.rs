pub mod io;
pub mod layout;
pub mod models;
pub mod nav;
pub mod parsing;
pub mod serialize;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use layout::{Arrangement, TileLayout, select_layout};
pub use models::{ChapterRun, Deck, Slide, SlideKind, SlideLayout};
pub use nav::{Controller, Intent, Phase, TransitionTiming};
pub use parsing::{CompiledDeck, Diagnostic, compile, parse};
pub use serialize::serialize;
