//! Application state and core logic

pub mod state;

pub use state::{Alert, App};
