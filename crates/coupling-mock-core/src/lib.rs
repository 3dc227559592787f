//! Core fixture for coupling-mock-rs.
//!
//! This crate provides the pieces every front end shares:
//! - [`Dataset`], [`VertexSet`] and [`BoundingBox`] describing the fabricated mesh
//! - [`ExchangeBuffer`], the one buffer all data writes and reads go through
//! - [`Adapter`], the addressing-agnostic mock participant
//! - [`MockOptions`] holding the fabricated constants

// The fixture answers constants from many `&self` methods
#![allow(clippy::unused_self)]
// Vertex counts and indices become coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod action;
pub mod adapter;
pub mod buffer;
pub mod dataset;
pub mod error;
pub mod options;
pub mod phase;

pub use action::Action;
pub use adapter::{Adapter, Connectivity, ParticipantInfo, FINALIZE_MESSAGE};
pub use buffer::{ExchangeBuffer, ValueShape};
pub use dataset::{BoundingBox, Dataset, VertexId, VertexSet, DIMENSIONS};
pub use error::{MockError, Result};
pub use options::MockOptions;
pub use phase::Phase;

// Re-export glam types for convenience
pub use glam::DVec3;
