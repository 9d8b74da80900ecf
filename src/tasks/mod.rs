//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the REPL.
//!
//! # Tasks
//! - Reaper: Removes stale cache entries at a fixed interval

mod reaper;

pub use reaper::{spawn_reap_task, ReaperHandle};
