#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # carnet-entities
//!
//! Reusable, agnostic domain entities for Carnet.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod geo;
pub mod record;
