//! Data models for spot positions.

mod position;

pub use position::Position;
