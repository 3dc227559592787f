//! The process-wide participant behind the C ABI.
//!
//! C callers have no handle to pass around, so the participant created by
//! `precicec_createParticipant` lives in one global slot. Creating again
//! replaces it.

use std::ffi::CString;
use std::sync::{OnceLock, PoisonError, RwLock};

use coupling_mock::Participant;

use crate::args::violation;

const NOT_CREATED: &str = "mock participant not created - call precicec_createParticipant first";

/// Global slot, empty until the first create.
static CONTEXT: OnceLock<RwLock<Option<Context>>> = OnceLock::new();

/// Everything the C ABI keeps between calls.
pub struct Context {
    /// The participant all calls are forwarded to.
    pub participant: Participant,

    /// Version literal handed out as a C string.
    pub version: CString,
}

impl Context {
    fn new(participant: Participant) -> Self {
        let version = CString::new(participant.get_version_information()).unwrap_or_default();
        Self {
            participant,
            version,
        }
    }
}

fn slot() -> &'static RwLock<Option<Context>> {
    CONTEXT.get_or_init(|| RwLock::new(None))
}

/// Stores a freshly created participant, dropping any previous one.
pub fn install(participant: Participant) {
    let mut guard = slot().write().unwrap_or_else(PoisonError::into_inner);
    if guard.is_some() {
        log::debug!("replacing existing mock participant");
    }
    *guard = Some(Context::new(participant));
}

/// Returns whether a participant has been created.
pub fn is_created() -> bool {
    slot().read().map_or(false, |guard| guard.is_some())
}

/// Drops the participant, if any.
pub fn clear() {
    if let Ok(mut guard) = slot().write() {
        *guard = None;
    }
}

/// Access the participant for reading.
///
/// Aborts the process if no participant has been created.
pub fn with_context<F, R>(f: F) -> R
where
    F: FnOnce(&Context) -> R,
{
    let guard = slot().read().unwrap_or_else(PoisonError::into_inner);
    let Some(ctx) = guard.as_ref() else {
        violation(format_args!("{NOT_CREATED}"));
    };
    f(ctx)
}

/// Access the participant for writing.
///
/// Aborts the process if no participant has been created.
pub fn with_context_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Context) -> R,
{
    let mut guard = slot().write().unwrap_or_else(PoisonError::into_inner);
    let Some(ctx) = guard.as_mut() else {
        violation(format_args!("{NOT_CREATED}"));
    };
    f(ctx)
}
