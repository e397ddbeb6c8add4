mod api;
pub mod error;
mod interop;

pub use api::*;
