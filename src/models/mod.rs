//! Domain models
//!
//! This module contains the rule, payload and report types shared by the
//! validation services and the HTTP handlers.

pub mod payload;
pub mod report;
pub mod rule;

pub use payload::*;
pub use report::*;
pub use rule::*;
