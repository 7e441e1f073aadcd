//! voxalign: speech audio with word-level timestamps from the command line.

pub mod cli;
pub mod config;
pub mod generate;
pub mod voice;
