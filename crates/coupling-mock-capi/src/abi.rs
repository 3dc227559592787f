//! The `precicec_*` symbols of the name-based C API.
//!
//! Each function converts its raw arguments, forwards to the global
//! [`Participant`](coupling_mock::Participant) and copies results into
//! caller storage. Contract violations abort the process.

use std::ffi::{c_char, c_double, c_int, c_void};

use coupling_mock::{Participant, DIMENSIONS, FINALIZE_MESSAGE};

use crate::args::{c_bool, count_arg, expect_contract, slice_arg, slice_out, str_arg};
use crate::state::{self, with_context, with_context_mut};

fn init_logging() {
    let _ = env_logger::try_init();
}

fn data_len(size: c_int, components: usize) -> usize {
    count_arg(size) * components
}

// ----------------------------------------------------------------------
// Lifecycle
// ----------------------------------------------------------------------

/// Creates the global mock participant.
///
/// # Safety
///
/// Both strings must be valid NUL-terminated UTF-8.
#[no_mangle]
pub unsafe extern "C" fn precicec_createParticipant(
    participant_name: *const c_char,
    configuration_file_name: *const c_char,
    solver_process_index: c_int,
    solver_process_size: c_int,
) {
    init_logging();
    let participant = Participant::create(
        unsafe { str_arg(participant_name) },
        unsafe { str_arg(configuration_file_name) },
        solver_process_index,
        solver_process_size,
    );
    state::install(participant);
}

/// Creates the global mock participant with an opaque communicator.
///
/// # Safety
///
/// Both strings must be valid NUL-terminated UTF-8. The communicator is
/// never dereferenced.
#[no_mangle]
pub unsafe extern "C" fn precicec_createParticipant_withCommunicator(
    participant_name: *const c_char,
    configuration_file_name: *const c_char,
    solver_process_index: c_int,
    solver_process_size: c_int,
    communicator: *mut c_void,
) {
    init_logging();
    let participant = Participant::create_with_communicator(
        unsafe { str_arg(participant_name) },
        unsafe { str_arg(configuration_file_name) },
        solver_process_index,
        solver_process_size,
        &communicator,
    );
    state::install(participant);
}

#[no_mangle]
pub extern "C" fn precicec_initialize() {
    with_context_mut(|ctx| {
        ctx.participant.initialize();
    });
}

#[no_mangle]
pub extern "C" fn precicec_advance(computed_time_step_size: c_double) {
    with_context_mut(|ctx| {
        ctx.participant.advance(computed_time_step_size);
    });
}

/// Finalizes the participant and prints the confirmation to stdout.
#[no_mangle]
pub extern "C" fn precicec_finalize() {
    with_context_mut(|ctx| ctx.participant.finalize());
    println!("{FINALIZE_MESSAGE}");
}

// ----------------------------------------------------------------------
// Status
// ----------------------------------------------------------------------

/// # Safety
///
/// `mesh_name` must be a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn precicec_getMeshDimensions(mesh_name: *const c_char) -> c_int {
    let mesh = unsafe { str_arg(mesh_name) };
    with_context(|ctx| ctx.participant.get_mesh_dimensions(mesh) as c_int)
}

/// # Safety
///
/// Both names must be valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn precicec_getDataDimensions(
    mesh_name: *const c_char,
    data_name: *const c_char,
) -> c_int {
    let (mesh, data) = unsafe { (str_arg(mesh_name), str_arg(data_name)) };
    with_context(|ctx| ctx.participant.get_data_dimensions(mesh, data) as c_int)
}

#[no_mangle]
pub extern "C" fn precicec_isCouplingOngoing() -> c_int {
    with_context(|ctx| c_bool(ctx.participant.is_coupling_ongoing()))
}

#[no_mangle]
pub extern "C" fn precicec_isTimeWindowComplete() -> c_int {
    with_context(|ctx| c_bool(ctx.participant.is_time_window_complete()))
}

#[no_mangle]
pub extern "C" fn precicec_getMaxTimeStepSize() -> c_double {
    with_context(|ctx| ctx.participant.get_max_time_step_size())
}

#[no_mangle]
pub extern "C" fn precicec_requiresInitialData() -> c_int {
    with_context(|ctx| c_bool(ctx.participant.requires_initial_data()))
}

#[no_mangle]
pub extern "C" fn precicec_requiresWritingCheckpoint() -> c_int {
    with_context(|ctx| c_bool(ctx.participant.requires_writing_checkpoint()))
}

#[no_mangle]
pub extern "C" fn precicec_requiresReadingCheckpoint() -> c_int {
    with_context(|ctx| c_bool(ctx.participant.requires_reading_checkpoint()))
}

/// # Safety
///
/// `mesh_name` must be a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn precicec_hasMesh(mesh_name: *const c_char) -> c_int {
    let mesh = unsafe { str_arg(mesh_name) };
    with_context(|ctx| c_bool(ctx.participant.has_mesh(mesh)))
}

/// # Safety
///
/// Both names must be valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn precicec_hasData(mesh_name: *const c_char, data_name: *const c_char) -> c_int {
    let (mesh, data) = unsafe { (str_arg(mesh_name), str_arg(data_name)) };
    with_context(|ctx| c_bool(ctx.participant.has_data(mesh, data)))
}

/// # Safety
///
/// `mesh_name` must be a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn precicec_requiresMeshConnectivityFor(mesh_name: *const c_char) -> c_int {
    let mesh = unsafe { str_arg(mesh_name) };
    with_context(|ctx| c_bool(ctx.participant.requires_mesh_connectivity_for(mesh)))
}

/// # Safety
///
/// Both names must be valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn precicec_requiresGradientDataFor(
    mesh_name: *const c_char,
    data_name: *const c_char,
) -> c_int {
    let (mesh, data) = unsafe { (str_arg(mesh_name), str_arg(data_name)) };
    with_context(|ctx| c_bool(ctx.participant.requires_gradient_data_for(mesh, data)))
}

/// Returns the version literal. The pointer stays valid until the next create.
#[no_mangle]
pub extern "C" fn precicec_getVersionInformation() -> *const c_char {
    with_context(|ctx| ctx.version.as_ptr())
}

// ----------------------------------------------------------------------
// Mesh
// ----------------------------------------------------------------------

/// # Safety
///
/// `position` must point to `DIMENSIONS` doubles.
#[no_mangle]
pub unsafe extern "C" fn precicec_setMeshVertex(mesh_name: *const c_char, position: *const c_double) -> c_int {
    let mesh = unsafe { str_arg(mesh_name) };
    let position = unsafe { slice_arg(position, DIMENSIONS) };
    let position = coupling_mock::DVec3::from_slice(position);
    with_context_mut(|ctx| ctx.participant.set_mesh_vertex(mesh, position))
}

/// Aborts unless `size` equals the fixture vertex count.
///
/// # Safety
///
/// `positions` must hold `size * DIMENSIONS` doubles and `ids` room for
/// `size` ints.
#[no_mangle]
pub unsafe extern "C" fn precicec_setMeshVertices(
    mesh_name: *const c_char,
    size: c_int,
    positions: *const c_double,
    ids: *mut c_int,
) {
    let mesh = unsafe { str_arg(mesh_name) };
    let positions = unsafe { slice_arg(positions, data_len(size, DIMENSIONS)) };
    let answer = with_context_mut(|ctx| {
        expect_contract("setMeshVertices", ctx.participant.set_mesh_vertices(mesh, positions))
    });
    unsafe { slice_out(ids, answer.len()) }.copy_from_slice(&answer);
}

/// # Safety
///
/// `mesh_name` must be a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn precicec_getMeshVertexSize(mesh_name: *const c_char) -> c_int {
    let mesh = unsafe { str_arg(mesh_name) };
    with_context(|ctx| ctx.participant.get_mesh_vertex_size(mesh) as c_int)
}

/// # Safety
///
/// `mesh_name` must be a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn precicec_setMeshEdge(mesh_name: *const c_char, first_vertex_id: c_int, second_vertex_id: c_int) {
    let mesh = unsafe { str_arg(mesh_name) };
    with_context_mut(|ctx| {
        ctx.participant
            .set_mesh_edge(mesh, first_vertex_id, second_vertex_id);
    });
}

/// # Safety
///
/// `vertices` must hold `2 * size` ints.
#[no_mangle]
pub unsafe extern "C" fn precicec_setMeshEdges(mesh_name: *const c_char, size: c_int, vertices: *const c_int) {
    let mesh = unsafe { str_arg(mesh_name) };
    let vertices = unsafe { slice_arg(vertices, data_len(size, 2)) };
    with_context_mut(|ctx| ctx.participant.set_mesh_edges(mesh, vertices));
}

/// # Safety
///
/// `mesh_name` must be a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn precicec_setMeshTriangle(
    mesh_name: *const c_char,
    first_vertex_id: c_int,
    second_vertex_id: c_int,
    third_vertex_id: c_int,
) {
    let mesh = unsafe { str_arg(mesh_name) };
    with_context_mut(|ctx| {
        ctx.participant
            .set_mesh_triangle(mesh, first_vertex_id, second_vertex_id, third_vertex_id);
    });
}

/// # Safety
///
/// `vertices` must hold `3 * size` ints.
#[no_mangle]
pub unsafe extern "C" fn precicec_setMeshTriangles(mesh_name: *const c_char, size: c_int, vertices: *const c_int) {
    let mesh = unsafe { str_arg(mesh_name) };
    let vertices = unsafe { slice_arg(vertices, data_len(size, 3)) };
    with_context_mut(|ctx| ctx.participant.set_mesh_triangles(mesh, vertices));
}

/// # Safety
///
/// `mesh_name` must be a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn precicec_setMeshQuad(
    mesh_name: *const c_char,
    first_vertex_id: c_int,
    second_vertex_id: c_int,
    third_vertex_id: c_int,
    fourth_vertex_id: c_int,
) {
    let mesh = unsafe { str_arg(mesh_name) };
    with_context_mut(|ctx| {
        ctx.participant.set_mesh_quad(
            mesh,
            first_vertex_id,
            second_vertex_id,
            third_vertex_id,
            fourth_vertex_id,
        );
    });
}

/// # Safety
///
/// `vertices` must hold `4 * size` ints.
#[no_mangle]
pub unsafe extern "C" fn precicec_setMeshQuads(mesh_name: *const c_char, size: c_int, vertices: *const c_int) {
    let mesh = unsafe { str_arg(mesh_name) };
    let vertices = unsafe { slice_arg(vertices, data_len(size, 4)) };
    with_context_mut(|ctx| ctx.participant.set_mesh_quads(mesh, vertices));
}

/// # Safety
///
/// `mesh_name` must be a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn precicec_setMeshTetrahedron(
    mesh_name: *const c_char,
    first_vertex_id: c_int,
    second_vertex_id: c_int,
    third_vertex_id: c_int,
    fourth_vertex_id: c_int,
) {
    let mesh = unsafe { str_arg(mesh_name) };
    with_context_mut(|ctx| {
        ctx.participant.set_mesh_tetrahedron(
            mesh,
            first_vertex_id,
            second_vertex_id,
            third_vertex_id,
            fourth_vertex_id,
        );
    });
}

/// # Safety
///
/// `vertices` must hold `4 * size` ints.
#[no_mangle]
pub unsafe extern "C" fn precicec_setMeshTetrahedra(mesh_name: *const c_char, size: c_int, vertices: *const c_int) {
    let mesh = unsafe { str_arg(mesh_name) };
    let vertices = unsafe { slice_arg(vertices, data_len(size, 4)) };
    with_context_mut(|ctx| ctx.participant.set_mesh_tetrahedra(mesh, vertices));
}

/// Aborts unless the box equals the fixture box element by element.
///
/// # Safety
///
/// `bounding_box` must hold `2 * DIMENSIONS` doubles.
#[no_mangle]
pub unsafe extern "C" fn precicec_setMeshAccessRegion(mesh_name: *const c_char, bounding_box: *const c_double) {
    let mesh = unsafe { str_arg(mesh_name) };
    let bounding_box = unsafe { slice_arg(bounding_box, 2 * DIMENSIONS) };
    with_context_mut(|ctx| {
        expect_contract(
            "setMeshAccessRegion",
            ctx.participant.set_mesh_access_region(mesh, bounding_box),
        );
    });
}

/// Aborts unless `size` equals the vertex count and the mesh is the fixture mesh.
///
/// # Safety
///
/// `ids` must have room for `size` ints and `coordinates` for
/// `size * DIMENSIONS` doubles.
#[no_mangle]
pub unsafe extern "C" fn precicec_getMeshVerticesAndIDs(
    mesh_name: *const c_char,
    size: c_int,
    ids: *mut c_int,
    coordinates: *mut c_double,
) {
    let mesh = unsafe { str_arg(mesh_name) };
    let (answer_ids, answer_coordinates) = with_context(|ctx| {
        expect_contract(
            "getMeshVerticesAndIDs",
            ctx.participant.get_mesh_vertices_and_ids(mesh, count_arg(size)),
        )
    });
    unsafe { slice_out(ids, answer_ids.len()) }.copy_from_slice(&answer_ids);
    unsafe { slice_out(coordinates, answer_coordinates.len()) }
        .copy_from_slice(&answer_coordinates);
}

// ----------------------------------------------------------------------
// Data
// ----------------------------------------------------------------------

/// Copies `size * getDataDimensions` values into the exchange buffer.
///
/// # Safety
///
/// `value_indices` must hold `size` ints and `values` the data values.
#[no_mangle]
pub unsafe extern "C" fn precicec_writeData(
    mesh_name: *const c_char,
    data_name: *const c_char,
    size: c_int,
    value_indices: *const c_int,
    values: *const c_double,
) {
    let (mesh, data) = unsafe { (str_arg(mesh_name), str_arg(data_name)) };
    with_context_mut(|ctx| {
        let components = ctx.participant.get_data_dimensions(mesh, data);
        let indices = unsafe { slice_arg(value_indices, count_arg(size)) };
        let values = unsafe { slice_arg(values, data_len(size, components)) };
        expect_contract(
            "writeData",
            ctx.participant.write_data(mesh, data, indices, values),
        );
    });
}

/// Copies `size * getDataDimensions` values out of the exchange buffer.
///
/// # Safety
///
/// `value_indices` must hold `size` ints and `values` room for the data.
#[no_mangle]
pub unsafe extern "C" fn precicec_readData(
    mesh_name: *const c_char,
    data_name: *const c_char,
    size: c_int,
    value_indices: *const c_int,
    values: *mut c_double,
) {
    let (mesh, data) = unsafe { (str_arg(mesh_name), str_arg(data_name)) };
    with_context(|ctx| {
        let components = ctx.participant.get_data_dimensions(mesh, data);
        let indices = unsafe { slice_arg(value_indices, count_arg(size)) };
        let values = unsafe { slice_out(values, data_len(size, components)) };
        expect_contract(
            "readData",
            ctx.participant.read_data_into(mesh, data, indices, values),
        );
    });
}

/// Copies one gradient per index into the exchange buffer.
///
/// # Safety
///
/// `value_indices` must hold `size` ints and `gradients`
/// `size * getDataDimensions * getMeshDimensions` doubles.
#[no_mangle]
pub unsafe extern "C" fn precicec_writeGradientData(
    mesh_name: *const c_char,
    data_name: *const c_char,
    size: c_int,
    value_indices: *const c_int,
    gradients: *const c_double,
) {
    let (mesh, data) = unsafe { (str_arg(mesh_name), str_arg(data_name)) };
    with_context_mut(|ctx| {
        let components =
            ctx.participant.get_data_dimensions(mesh, data) * ctx.participant.get_mesh_dimensions(mesh);
        let indices = unsafe { slice_arg(value_indices, count_arg(size)) };
        let gradients = unsafe { slice_arg(gradients, data_len(size, components)) };
        expect_contract(
            "writeGradientData",
            ctx.participant
                .write_gradient_data(mesh, data, indices, gradients),
        );
    });
}

/// Older spelling of [`precicec_writeGradientData`].
///
/// # Safety
///
/// Same as [`precicec_writeGradientData`].
#[no_mangle]
pub unsafe extern "C" fn precicec_writeBlockVectorGradientData(
    mesh_name: *const c_char,
    data_name: *const c_char,
    size: c_int,
    value_indices: *const c_int,
    gradients: *const c_double,
) {
    unsafe { precicec_writeGradientData(mesh_name, data_name, size, value_indices, gradients) }
}
