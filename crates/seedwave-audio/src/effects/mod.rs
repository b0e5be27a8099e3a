//! Post-mix effects.

pub mod delay_line;
pub mod reverb;

pub use delay_line::FeedbackDelay;
pub use reverb::ReverbUnit;
