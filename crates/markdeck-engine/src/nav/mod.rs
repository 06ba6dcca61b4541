pub mod controller;

pub use controller::{Controller, Intent, Phase, TransitionTiming};
