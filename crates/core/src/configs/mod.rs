//! Configuration file parsing

pub mod pnpm;
pub mod workspace;
