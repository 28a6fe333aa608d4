//! Rule-based Ayurvedic constitution scoring with canned wellness recommendations.
//!
//! The [`advisory`] module carries the knowledge tables and scoring rules; the
//! remaining modules provide the configuration, logging and error plumbing used by
//! the command line and HTTP front ends.

pub mod advisory;
pub mod config;
pub mod error;
pub mod telemetry;
