pub mod deck;
pub mod slide;

pub use deck::{ChapterRun, Deck};
pub use slide::{Slide, SlideKind, SlideLayout};
