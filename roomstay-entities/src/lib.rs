#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # roomstay-entities
//!
//! Reusable, agnostic domain entities for Roomstay.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod contact;
pub mod geo;
pub mod id;
pub mod listing;
pub mod status;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
