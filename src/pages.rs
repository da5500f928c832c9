//! Page generation modules
//!
//! The portfolio is a single index page assembled from the shared
//! components module.

pub mod index;
