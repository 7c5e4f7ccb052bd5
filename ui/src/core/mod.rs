//! State and workflows shared by every view. Rendering happens elsewhere.

pub mod config;
pub mod files;
pub mod markdown;
pub mod session;
pub mod state;
pub mod workflow;
