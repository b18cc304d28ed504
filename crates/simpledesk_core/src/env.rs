//! Process-global environment mutation helpers.
//!
//! Environment variables are shared by every thread in the process, so any
//! code that changes them (mostly config tests) goes through [`EnvGuard`].

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Global lock serializing environment mutation.
pub fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Set or remove one variable. `None` removes it.
#[allow(unused_unsafe)]
fn write_var(key: &str, value: Option<&str>) {
    // SAFETY: only called while `env_lock` is held.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

/// A set of environment overrides, undone on drop.
///
/// The guard holds [`env_lock`] for its whole lifetime, so two guards never
/// interleave and previous values are restored before the lock is released.
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    /// Apply `overrides` in order; a `None` value removes the variable.
    pub fn apply(overrides: &[(&str, Option<&str>)]) -> Self {
        let lock = env_lock().lock().unwrap_or_else(PoisonError::into_inner);
        let saved = overrides
            .iter()
            .map(|(key, value)| {
                let previous = std::env::var(key).ok();
                write_var(key, *value);
                (key.to_string(), previous)
            })
            .collect();
        Self { saved, _lock: lock }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.saved.iter().rev() {
            write_var(key, previous.as_deref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EnvGuard;

    #[test]
    fn overrides_are_restored_in_reverse_order() {
        let key = "SIMPLEDESK_TEST_ENV_GUARD_RESTORE";
        {
            let _guard = EnvGuard::apply(&[(key, Some("first")), (key, Some("second"))]);
            assert_eq!(std::env::var(key).ok().as_deref(), Some("second"));
        }
        assert!(std::env::var(key).is_err());
    }

    #[test]
    fn panicking_holder_still_restores_and_unlocks() {
        let key = "SIMPLEDESK_TEST_ENV_GUARD_POISON";
        let _ = std::thread::spawn(move || {
            let _guard = EnvGuard::apply(&[(key, Some("set before panic"))]);
            panic!("poison the env lock");
        })
        .join();
        assert!(std::env::var(key).is_err());

        let _guard = EnvGuard::apply(&[(key, Some("after")), ("SIMPLEDESK_TEST_UNSET", None)]);
        assert_eq!(std::env::var(key).ok().as_deref(), Some("after"));
    }
}
