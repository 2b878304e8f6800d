//! Lift Common Library
//!
//! Shared types, constants and configuration loading utilities for the
//! lift dispatch workspace crates.
//!
//! # Module Structure
//!
//! - [`types`] - Direction, status and identifier types shared by every crate
//! - [`consts`] - Building limits and defaults
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use lift_common::prelude::*;
//!
//! let dir = Direction::toward(0, 3);
//! assert_eq!(dir, Direction::Up);
//! ```

pub mod config;
pub mod consts;
pub mod prelude;
pub mod types;
