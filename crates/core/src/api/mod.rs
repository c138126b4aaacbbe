//! Public batch API.

pub mod high_level;
