//! Library side of the `abjad` command: logging, settings and report rendering.

pub mod logging;
pub mod settings;
pub mod summary;
