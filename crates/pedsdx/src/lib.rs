//! Pediatric emergency reasoning core.
//!
//! Turns a structured bedside survey into ranked differentials, shock etiology analyses, and a
//! tiered care plan for the leading diagnosis. Everything under [`reasoning`] is pure and
//! synchronous; the remaining modules carry the configuration, telemetry, and error plumbing used
//! by the HTTP service and CLI.

pub mod config;
pub mod error;
pub mod reasoning;
pub mod telemetry;
