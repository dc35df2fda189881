//! Reusable widgets shared by screens.

pub mod lightbox;
