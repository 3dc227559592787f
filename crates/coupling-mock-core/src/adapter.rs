//! The mock adapter shared by every addressing front end.
//!
//! An [`Adapter`] owns the whole fixture: descriptive constants, vertices,
//! bounding box and the exchange buffer. It knows nothing about how callers
//! address meshes and data; the front ends resolve names or IDs first and
//! then call in here.

use std::path::{Path, PathBuf};

use crate::action::Action;
use crate::buffer::{ExchangeBuffer, ValueShape};
use crate::dataset::{BoundingBox, Dataset, VertexId, VertexSet, DIMENSIONS};
use crate::error::{MockError, Result};
use crate::options::MockOptions;
use crate::phase::Phase;

/// Confirmation emitted on finalize.
pub const FINALIZE_MESSAGE: &str = "Finalizing solver interface";

/// Who created the adapter. Recorded, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantInfo {
    /// Participant name as passed to create.
    pub name: String,
    /// Configuration path as passed to create. Never opened.
    pub configuration_path: PathBuf,
    /// Rank of the calling solver process.
    pub process_index: i32,
    /// Number of solver processes.
    pub process_count: i32,
    /// Whether a communicator was supplied.
    pub has_communicator: bool,
}

impl ParticipantInfo {
    /// Creates participant info without a communicator.
    pub fn new(
        name: impl Into<String>,
        configuration_path: impl AsRef<Path>,
        process_index: i32,
        process_count: i32,
    ) -> Self {
        Self {
            name: name.into(),
            configuration_path: configuration_path.as_ref().to_path_buf(),
            process_index,
            process_count,
            has_communicator: false,
        }
    }

    /// Marks the participant as created with a communicator.
    #[must_use]
    pub fn with_communicator(mut self) -> Self {
        self.has_communicator = true;
        self
    }
}

/// Mesh connectivity kinds the fixture accepts and discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connectivity {
    Edge,
    Triangle,
    Quad,
    Tetrahedron,
}

impl Connectivity {
    /// Number of vertex (or edge) ids that make up one element.
    pub fn arity(self) -> usize {
        match self {
            Self::Edge => 2,
            Self::Triangle => 3,
            Self::Quad | Self::Tetrahedron => 4,
        }
    }
}

/// Deterministic stand-in for a coupling participant.
#[derive(Debug, Clone)]
pub struct Adapter {
    participant: ParticipantInfo,
    options: MockOptions,
    dataset: Dataset,
    vertices: VertexSet,
    bounding_box: BoundingBox,
    buffer: ExchangeBuffer,
    phase: Phase,
}

impl Adapter {
    /// Creates an adapter with the default fixture.
    pub fn new(participant: ParticipantInfo) -> Self {
        Self::with_options(participant, MockOptions::default())
    }

    /// Creates an adapter with a custom fixture.
    pub fn with_options(participant: ParticipantInfo, options: MockOptions) -> Self {
        let dataset = Dataset::from_options(&options);
        let vertices = VertexSet::fabricate(dataset.vertex_count());
        let buffer = ExchangeBuffer::for_vertices(dataset.vertex_count());
        log::info!(
            "created mock participant '{}' (rank {} of {}, config {})",
            participant.name,
            participant.process_index,
            participant.process_count,
            participant.configuration_path.display()
        );
        Self {
            participant,
            options,
            dataset,
            vertices,
            bounding_box: BoundingBox::fabricate(),
            buffer,
            phase: Phase::Created,
        }
    }

    /// Returns the creating participant.
    pub fn participant(&self) -> &ParticipantInfo {
        &self.participant
    }

    /// Returns the options the fixture was built from.
    pub fn options(&self) -> &MockOptions {
        &self.options
    }

    /// Returns the descriptive constants.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the fixture vertices.
    pub fn vertices(&self) -> &VertexSet {
        &self.vertices
    }

    /// Returns the fixture bounding box.
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// Returns the exchange buffer.
    pub fn buffer(&self) -> &ExchangeBuffer {
        &self.buffer
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Initializes coupling. Returns immediately with the fixed time step.
    pub fn initialize(&mut self) -> f64 {
        self.set_phase(self.phase.on_initialize());
        log::info!("initialized mock participant '{}'", self.participant.name);
        self.options.max_time_step_size
    }

    /// Pretends to advance by `dt`. Simulated time never moves.
    pub fn advance(&mut self, dt: f64) -> f64 {
        log::debug!("advance({dt}) ignored");
        self.set_phase(self.phase.on_advance());
        self.options.max_time_step_size
    }

    /// Marks the adapter finalized and emits the confirmation.
    ///
    /// Fixture memory is released when the adapter is dropped.
    pub fn finalize(&mut self) {
        self.set_phase(self.phase.on_finalize());
        log::info!("{FINALIZE_MESSAGE}");
    }

    /// Returns the fixed maximum time step size.
    pub fn max_time_step_size(&self) -> f64 {
        self.options.max_time_step_size
    }

    fn set_phase(&mut self, next: Phase) {
        if next != self.phase {
            log::debug!("phase {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }

    // ------------------------------------------------------------------
    // Status queries. The fixture never reports ongoing coupling, so
    // solver loops driven by it exit right away.
    // ------------------------------------------------------------------

    /// Always false.
    pub fn is_coupling_ongoing(&self) -> bool {
        false
    }

    /// Always false.
    pub fn is_time_window_complete(&self) -> bool {
        false
    }

    /// Always false, for every action.
    pub fn is_action_required(&self, action: Action) -> bool {
        log::trace!("is_action_required({action})");
        false
    }

    /// Accepts the acknowledgement and records nothing.
    pub fn mark_action_fulfilled(&mut self, action: Action) {
        log::debug!("action {action} marked fulfilled");
    }

    /// Always false, even for the fixture mesh.
    pub fn has_mesh(&self, _mesh: &str) -> bool {
        false
    }

    /// Always false, even for the fixture data.
    pub fn has_data(&self, _mesh: &str, _data: &str) -> bool {
        false
    }

    /// Always false: the fixture does not model topology.
    pub fn requires_mesh_connectivity(&self, _mesh: &str) -> bool {
        false
    }

    /// Always false.
    pub fn requires_gradient_data(&self, _mesh: &str, _data: &str) -> bool {
        false
    }

    /// Returns the fixed version literal.
    pub fn version_information(&self) -> &str {
        &self.options.version
    }

    // ------------------------------------------------------------------
    // Mesh
    // ------------------------------------------------------------------

    /// Spatial dimensionality of every mesh.
    pub fn mesh_dimensions(&self) -> usize {
        DIMENSIONS
    }

    /// Components per vertex of every data field.
    pub fn data_dimensions(&self) -> usize {
        self.dataset.data_dimensions()
    }

    /// Number of fixture vertices.
    pub fn vertex_count(&self) -> usize {
        self.dataset.vertex_count()
    }

    /// Accepts a single vertex; always answers id 0.
    pub fn set_vertex(&mut self, position: [f64; DIMENSIONS]) -> VertexId {
        log::trace!("set_vertex({position:?}) ignored");
        0
    }

    /// Accepts exactly one position per fixture vertex and answers the
    /// fixture ids. The positions themselves are ignored.
    pub fn set_vertices(&mut self, positions: &[f64]) -> Result<Vec<VertexId>> {
        warn_on_err("set_vertices", self.check_positions(positions))?;
        Ok(self.vertices.ids().to_vec())
    }

    /// Same contract as [`Adapter::set_vertices`].
    pub fn vertex_ids_from_positions(&self, positions: &[f64]) -> Result<Vec<VertexId>> {
        warn_on_err("vertex_ids_from_positions", self.check_positions(positions))?;
        Ok(self.vertices.ids().to_vec())
    }

    /// Returns the fixture ids and coordinates of `mesh`.
    pub fn vertices_and_ids(&self, mesh: &str, size: usize) -> Result<(Vec<VertexId>, Vec<f64>)> {
        warn_on_err("vertices_and_ids", self.dataset.check_vertex_count(size))?;
        warn_on_err("vertices_and_ids", self.dataset.check_mesh(mesh))?;
        Ok((self.vertices.ids().to_vec(), self.vertices.coordinates()))
    }

    /// Synthetic coordinates for the first `count` vertices, unchecked.
    ///
    /// Follows the fixture layout `(i, i + n, i + 2n)` past the vertex count.
    pub fn synthetic_coordinates(&self, count: usize) -> Vec<f64> {
        let n = self.vertex_count() as f64;
        (0..count)
            .flat_map(|i| {
                let i = i as f64;
                [i, i + n, i + 2.0 * n]
            })
            .collect()
    }

    /// Verifies that `bounding_box` is exactly the fixture box on `mesh`.
    /// Nothing is stored.
    pub fn verify_access_region(&self, mesh: &str, bounding_box: &[f64]) -> Result<()> {
        warn_on_err("verify_access_region", self.dataset.check_mesh(mesh))?;
        warn_on_err(
            "verify_access_region",
            self.bounding_box.verify(bounding_box),
        )
    }

    /// Accepts connectivity elements and discards them.
    pub fn ignore_connectivity(&mut self, kind: Connectivity, vertices: &[VertexId]) {
        log::trace!(
            "ignoring {} {kind:?} element(s)",
            vertices.len() / kind.arity()
        );
    }

    fn check_positions(&self, positions: &[f64]) -> Result<()> {
        let expected = self.vertex_count() * DIMENSIONS;
        if positions.len() == expected {
            Ok(())
        } else {
            Err(MockError::SizeMismatch {
                expected,
                actual: positions.len(),
            })
        }
    }

    // ------------------------------------------------------------------
    // Data
    // ------------------------------------------------------------------

    /// Copies `values` for `indices` into the exchange buffer from offset 0.
    pub fn write(&mut self, shape: ValueShape, indices: &[VertexId], values: &[f64]) -> Result<()> {
        log::debug!("write {shape:?} for {} index(es)", indices.len());
        warn_on_err("write", self.buffer.write(shape, indices.len(), values))
    }

    /// Copies the values for `indices` out of the exchange buffer.
    pub fn read(&self, shape: ValueShape, indices: &[VertexId]) -> Result<Vec<f64>> {
        log::debug!("read {shape:?} for {} index(es)", indices.len());
        warn_on_err("read", self.buffer.read(shape, indices.len()))
    }

    /// Copies the values for `indices` into caller storage.
    pub fn read_into(&self, shape: ValueShape, indices: &[VertexId], out: &mut [f64]) -> Result<()> {
        log::debug!("read {shape:?} for {} index(es)", indices.len());
        warn_on_err("read", self.buffer.read_into(shape, indices.len(), out))
    }
}

fn warn_on_err<T>(operation: &str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        log::warn!("{operation}: contract violation: {err}");
    }
    result
}
