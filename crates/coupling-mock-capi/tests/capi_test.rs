//! Integration tests for the C ABI.
//!
//! Note: the C ABI keeps its participant in one process-wide slot, so all
//! checks run in sequence inside a single test function.
//!
//! Contract violations abort the process; they are covered by
//! `contract_abort_test.rs`, which runs each one in a child process.

use std::ffi::{CStr, CString};
use std::ptr;

use coupling_mock_capi::*;

fn cstr(s: &str) -> CString {
    CString::new(s).expect("CString::new failed")
}

#[test]
fn capi_tests() {
    let mesh = cstr("FakeMesh");
    let data = cstr("FakeData");

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    unsafe {
        precicec_createParticipant(cstr("SolverOne").as_ptr(), cstr("config.xml").as_ptr(), 0, 1);
    }
    assert!(state::is_created());
    state::with_context(|ctx| {
        assert_eq!(ctx.participant.adapter().participant().name, "SolverOne");
        assert!(!ctx.participant.adapter().participant().has_communicator);
    });

    precicec_initialize();
    precicec_advance(0.5);
    assert_eq!(precicec_getMaxTimeStepSize(), 1.0);

    // ========================================================================
    // STATUS
    // ========================================================================

    assert_eq!(precicec_isCouplingOngoing(), 0);
    assert_eq!(precicec_isTimeWindowComplete(), 0);
    assert_eq!(precicec_requiresInitialData(), 0);
    assert_eq!(precicec_requiresWritingCheckpoint(), 0);
    assert_eq!(precicec_requiresReadingCheckpoint(), 0);
    unsafe {
        assert_eq!(precicec_getMeshDimensions(mesh.as_ptr()), 3);
        assert_eq!(precicec_getDataDimensions(mesh.as_ptr(), data.as_ptr()), 3);
        assert_eq!(precicec_hasMesh(mesh.as_ptr()), 0);
        assert_eq!(precicec_hasData(mesh.as_ptr(), data.as_ptr()), 0);
        assert_eq!(precicec_requiresMeshConnectivityFor(mesh.as_ptr()), 0);
        assert_eq!(precicec_requiresGradientDataFor(mesh.as_ptr(), data.as_ptr()), 0);
    }
    let version = unsafe { CStr::from_ptr(precicec_getVersionInformation()) };
    assert_eq!(version.to_str().unwrap(), "dummy");

    // ========================================================================
    // MESH
    // ========================================================================

    unsafe {
        assert_eq!(precicec_getMeshVertexSize(mesh.as_ptr()), 3);
        assert_eq!(precicec_setMeshVertex(mesh.as_ptr(), [1.0, 2.0, 3.0].as_ptr()), 0);

        let positions = [0.0; 9];
        let mut ids = [-1; 3];
        precicec_setMeshVertices(mesh.as_ptr(), 3, positions.as_ptr(), ids.as_mut_ptr());
        assert_eq!(ids, [0, 1, 2]);

        let mut ids = [-1; 3];
        let mut coordinates = [0.0; 9];
        precicec_getMeshVerticesAndIDs(mesh.as_ptr(), 3, ids.as_mut_ptr(), coordinates.as_mut_ptr());
        assert_eq!(ids, [0, 1, 2]);
        assert_eq!(coordinates, [0.0, 3.0, 6.0, 1.0, 4.0, 7.0, 2.0, 5.0, 8.0]);

        precicec_setMeshAccessRegion(mesh.as_ptr(), [0.0, 1.0, 2.0, 3.0, 4.0, 5.0].as_ptr());

        let vertices = [0, 1, 2, 0];
        precicec_setMeshEdge(mesh.as_ptr(), 0, 1);
        precicec_setMeshEdges(mesh.as_ptr(), 2, vertices.as_ptr());
        precicec_setMeshTriangle(mesh.as_ptr(), 0, 1, 2);
        precicec_setMeshTriangles(mesh.as_ptr(), 1, vertices.as_ptr());
        precicec_setMeshQuad(mesh.as_ptr(), 0, 1, 2, 0);
        precicec_setMeshQuads(mesh.as_ptr(), 1, vertices.as_ptr());
        precicec_setMeshTetrahedron(mesh.as_ptr(), 0, 1, 2, 0);
        precicec_setMeshTetrahedra(mesh.as_ptr(), 1, vertices.as_ptr());
        precicec_setMeshTetrahedra(mesh.as_ptr(), 0, ptr::null());
    }

    // ========================================================================
    // DATA
    // ========================================================================

    unsafe {
        let indices = [0, 1];
        let values = [1.5, 2.5, 3.5, 4.5, 5.5, 6.5];
        precicec_writeData(mesh.as_ptr(), data.as_ptr(), 2, indices.as_ptr(), values.as_ptr());

        let mut out = [0.0; 6];
        precicec_readData(mesh.as_ptr(), data.as_ptr(), 2, indices.as_ptr(), out.as_mut_ptr());
        assert_eq!(out, values);

        let gradients: Vec<f64> = (0..9).map(f64::from).collect();
        precicec_writeGradientData(mesh.as_ptr(), data.as_ptr(), 1, indices.as_ptr(), gradients.as_ptr());
        let mut out = [0.0; 3];
        precicec_readData(mesh.as_ptr(), data.as_ptr(), 1, indices.as_ptr(), out.as_mut_ptr());
        assert_eq!(out, [0.0, 1.0, 2.0]);

        let gradients = [9.0; 9];
        precicec_writeBlockVectorGradientData(mesh.as_ptr(), data.as_ptr(), 1, indices.as_ptr(), gradients.as_ptr());
        precicec_readData(mesh.as_ptr(), data.as_ptr(), 1, indices.as_ptr(), out.as_mut_ptr());
        assert_eq!(out, [9.0; 3]);
    }

    // ========================================================================
    // FINALIZE AND RE-CREATE
    // ========================================================================

    precicec_finalize();
    state::with_context(|ctx| assert!(ctx.participant.adapter().phase().is_finalized()));
    // Calls after finalize are still answered.
    assert_eq!(precicec_isCouplingOngoing(), 0);

    let mut communicator = 0_i32;
    unsafe {
        precicec_createParticipant_withCommunicator(
            cstr("SolverTwo").as_ptr(),
            cstr("config.xml").as_ptr(),
            1,
            2,
            ptr::addr_of_mut!(communicator).cast(),
        );
    }
    state::with_context(|ctx| {
        let info = ctx.participant.adapter().participant();
        assert_eq!(info.name, "SolverTwo");
        assert!(info.has_communicator);
        // The new participant starts with a clean buffer.
        assert!(ctx.participant.adapter().buffer().as_slice().iter().all(|&v| v == 0.0));
    });

    state::clear();
    assert!(!state::is_created());
}
