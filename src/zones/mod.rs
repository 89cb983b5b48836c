//! Card containers.
//!
//! Reserves and foundations are single slots stored directly on the
//! board; cascades are the only multi-card container.

pub mod cascade;

pub use cascade::{Cascade, CardRun, CASCADE_CAPACITY};
