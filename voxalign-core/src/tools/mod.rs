//! Subprocess-backed implementations of the tool traits.

mod aligner;
mod ffmpeg;
mod piper;

pub use aligner::CommandAligner;
pub use ffmpeg::Ffmpeg;
pub use piper::Piper;
