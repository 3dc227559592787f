//! coupling-mock-rs: a stand-in for a multi-physics coupling library.
//!
//! Solver adapters call a coupling library to register meshes, exchange data
//! and step through time windows. This crate answers those calls from a
//! small fabricated fixture so the solver side can be unit tested without
//! the real coupling engine.
//!
//! # Quick Start
//!
//! ```
//! use coupling_mock::*;
//!
//! fn main() -> Result<()> {
//!     let mut participant = Participant::create("Fluid", "precice-config.xml", 0, 1);
//!
//!     let ids = participant.set_mesh_vertices("FakeMesh", &[0.0; 9])?;
//!     assert_eq!(ids, vec![0, 1, 2]);
//!
//!     participant.initialize();
//!     while participant.is_coupling_ongoing() {
//!         // Never entered: the fixture reports coupling as finished.
//!     }
//!     participant.finalize();
//!     Ok(())
//! }
//! ```
//!
//! # Addressing
//!
//! Both front ends drive the same [`Adapter`]:
//!
//! - [`Participant`] names meshes and data by string.
//! - [`SolverInterface`] names them by integer ids and uses [`Action`] tokens
//!   for checkpointing.
//!
//! # Fixture
//!
//! Three vertices in three dimensions with ids `0, 1, 2`, bounding box
//! `[0, 1, 2, 3, 4, 5]`, mesh `"FakeMesh"`, data `"FakeData"`. Writes and reads
//! share one buffer addressed from offset 0, so the latest write is what the
//! next read of the same or a smaller shape sees.

// The fixture answers constants from many `&self` methods
#![allow(clippy::unused_self)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Argument lists mirror the coupling API
#![allow(clippy::too_many_arguments)]

pub mod participant;
pub mod solver_interface;

pub use participant::Participant;
pub use solver_interface::{
    DataId, EdgeId, MeshId, SolverInterface, LEGACY_TIME_STEP_SENTINEL, NO_EDGE,
};

// Re-export core types
pub use coupling_mock_core::{
    action::Action,
    adapter::{Adapter, Connectivity, ParticipantInfo, FINALIZE_MESSAGE},
    buffer::{ExchangeBuffer, ValueShape},
    dataset::{BoundingBox, Dataset, VertexId, VertexSet, DIMENSIONS},
    error::{MockError, Result},
    options::MockOptions,
    phase::Phase,
    DVec3,
};
