//! API Routes
//!
//! Route handlers organized by functionality.

pub mod correlations;
pub mod dashboard;
pub mod dataset;
pub mod health;
pub mod pages;
pub mod upload;
