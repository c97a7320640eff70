//! # Config Crate
//!
//! Centralized configuration constants for the z-data surface pipeline.
//! Defaults for the surface operator, safety limits and numeric tolerances
//! live here so the loader, the mesh builder and the command line tool agree.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_OBJECT_NAME, DEFAULT_LOOP, EPSILON};
//!
//! assert_eq!(DEFAULT_OBJECT_NAME, "ZDataSurface");
//! assert!(!DEFAULT_LOOP);
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Compatible**: Defaults match the Z Data Surface operator settings

pub mod constants;
