#![warn(clippy::uninlined_format_args)]

pub mod compressor;

pub use compressor::LzStringCompressor;
