//! Core counts for sizing campaigns.

use std::{num::NonZeroUsize, sync::OnceLock};

static LOGICAL: OnceLock<NonZeroUsize> = OnceLock::new();

/// Available logical CPUs (hardware threads). Lazily evaluated, returns 1
/// on errors.
pub fn logical_cores() -> u32 {
    let threads = *LOGICAL.get_or_init(|| {
        std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
    });
    u32::try_from(threads.get()).unwrap_or(u32::MAX)
}

/// Physical cores, hyperthreads excluded. The Pony runtime degrades badly
/// when given more scheduler threads than physical cores, so those runs are
/// skipped rather than measured wrong.
pub fn physical_cores() -> u32 {
    u32::try_from(num_cpus::get_physical()).unwrap_or(u32::MAX)
}
