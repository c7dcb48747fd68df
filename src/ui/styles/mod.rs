//! UI styling for the overlay

pub mod colors;

pub use colors::*;
