//! Credit card recommendation engine.
//!
//! The catalog is loaded once at startup and stays immutable for the process
//! lifetime; every request builds a fresh [`recommend::UserProfile`] from
//! questionnaire answers, filters the catalog by hard eligibility, scores the
//! survivors by weighted cosine similarity, and explains each pick.

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommend;
pub mod telemetry;
