//! voxalign-core: text-to-speech with word-level timestamps.
//!
//! This crate drives three external programs in sequence and keeps the
//! bookkeeping between them: temporary files, timestamp offsets and the JSON
//! sidecar.
//!
//! # Architecture
//!
//! The pipeline is built around three tool traits:
//!
//! - [`traits::Synthesizer`]: speaks text into an unpadded WAV file (Piper)
//! - [`traits::Aligner`]: maps transcript words to time spans (forced aligner)
//! - [`traits::Padder`]: adds silence around the recording (FFmpeg)
//!
//! # Quick Start
//!
//! ```no_run
//! use voxalign_core::config::{Config, VoiceModel};
//! use voxalign_core::pipeline::DefaultPipeline;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new(VoiceModel {
//!     id: "en_US-lessac-medium".to_string(),
//!     path: "models/en_US-lessac-medium.onnx".into(),
//! });
//!
//! let pipeline = DefaultPipeline::with_default_tools(config);
//! let generation = pipeline.generate("Hello world", Path::new("/tmp/hello"))?;
//! println!("{} words", generation.result.timestamps.len());
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod process;
pub mod timing;
pub mod tools;
pub mod traits;
pub mod types;
