//! hello-probe: container health check for the `/hello` endpoint.
//!
//! One GET against a fixed local URL; exit 0 on HTTP 200, 1 on anything else.

pub mod config;
pub mod error;
pub mod probe;

pub use error::ProbeError;
pub use probe::{check, run, ProbeOutcome};
