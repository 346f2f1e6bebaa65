use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Serializes tests that touch the process-wide installed state.
///
/// The harness runs test functions on multiple threads; every test that
/// installs or uninstalls holds this guard so its assertions only ever see
/// its own bindings.
pub fn state_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Detach everything so a test starts from a clean slate.
pub fn detach_all() {
    opshelf::uninstall(&[]).expect("niladic uninstall resolves the whole catalog");
}
