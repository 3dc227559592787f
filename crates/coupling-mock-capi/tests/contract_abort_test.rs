//! Caller bugs at the C boundary abort the process.
//!
//! An abort takes the whole test binary down, so every case re-runs this
//! binary as a child process restricted to `abort_case`, with the case name
//! in an environment variable, and inspects how the child exited.

use std::env;
use std::ffi::CString;
use std::process::{Command, Output};
use std::ptr;

use coupling_mock_capi::*;

const CASE_VAR: &str = "COUPLING_MOCK_ABORT_CASE";

#[cfg(unix)]
const SIGABRT: i32 = 6;

fn cstr(s: &str) -> CString {
    CString::new(s).expect("CString::new failed")
}

fn create() {
    unsafe {
        precicec_createParticipant(cstr("SolverOne").as_ptr(), cstr("config.xml").as_ptr(), 0, 1);
    }
}

/// Child side. Does nothing unless `CASE_VAR` names a case.
#[test]
fn abort_case() {
    let Ok(case) = env::var(CASE_VAR) else {
        return;
    };
    let mesh = cstr("FakeMesh");
    unsafe {
        match case.as_str() {
            "not_created" => precicec_initialize(),
            "access_region" => {
                create();
                precicec_setMeshAccessRegion(mesh.as_ptr(), [9.0; 6].as_ptr());
            }
            "vertex_count" => {
                create();
                let positions = [0.0; 6];
                let mut ids = [-1; 2];
                precicec_setMeshVertices(mesh.as_ptr(), 2, positions.as_ptr(), ids.as_mut_ptr());
            }
            "wrong_mesh" => {
                create();
                let mut ids = [-1; 3];
                let mut coordinates = [0.0; 9];
                precicec_getMeshVerticesAndIDs(
                    cstr("OtherMesh").as_ptr(),
                    3,
                    ids.as_mut_ptr(),
                    coordinates.as_mut_ptr(),
                );
            }
            "negative_size" => {
                create();
                precicec_getMeshVerticesAndIDs(mesh.as_ptr(), -1, ptr::null_mut(), ptr::null_mut());
            }
            "null_name" => {
                create();
                precicec_getMeshVertexSize(ptr::null());
            }
            other => panic!("unknown abort case {other}"),
        }
    }
}

fn run_case(case: &str) -> Output {
    let exe = env::current_exe().expect("test binary path");
    Command::new(exe)
        .args(["abort_case", "--exact", "--nocapture", "--test-threads=1"])
        .env(CASE_VAR, case)
        .output()
        .expect("failed to spawn child test process")
}

fn assert_aborted(case: &str, message: &str) {
    let output = run_case(case);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !output.status.success(),
        "{case}: child exited normally, stderr: {stderr}"
    );
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(
            output.status.signal(),
            Some(SIGABRT),
            "{case}: expected an abort, got {:?}",
            output.status
        );
    }
    assert!(stderr.contains(message), "{case}: stderr was {stderr}");
}

#[test]
fn test_call_before_create_aborts() {
    assert_aborted("not_created", "mock participant not created");
}

#[test]
fn test_foreign_access_region_aborts() {
    assert_aborted(
        "access_region",
        "setMeshAccessRegion: bounding box mismatch at index 0",
    );
}

#[test]
fn test_vertex_count_mismatch_aborts() {
    assert_aborted(
        "vertex_count",
        "setMeshVertices: data size mismatch: expected 9, got 6",
    );
}

#[test]
fn test_wrong_mesh_aborts() {
    assert_aborted(
        "wrong_mesh",
        "getMeshVerticesAndIDs: mesh 'OtherMesh' is not the fixture mesh",
    );
}

#[test]
fn test_negative_size_aborts() {
    assert_aborted("negative_size", "negative size argument: -1");
}

#[test]
fn test_null_name_aborts() {
    assert_aborted("null_name", "null string argument");
}
