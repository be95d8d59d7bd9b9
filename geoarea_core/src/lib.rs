//! Shared value model for the geoarea workspace.
//!
//! Geometry data that arrives under string-literal keys is represented as
//! an already-decoded tree of [`value::Value`] nodes. Producing that tree
//! from a serialized format is the caller's job; this crate only models it.

pub mod value;
