//! The decode pipeline: per-frame stage composition and final stream
//! reassembly.

mod orchestrator;


pub use orchestrator::decode_container;
