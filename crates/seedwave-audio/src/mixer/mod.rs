//! Two-pass mixing: render every event of a track into that track's bus,
//! then sum the buses into one mix buffer.

mod bus;
mod mixer;

pub use bus::TrackBus;
pub use mixer::Mixer;
