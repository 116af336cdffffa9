//! Constant parameter sets for the cmce workspace
//!
//! Every scheme-level constant lives here so that the generic algorithm code
//! only ever receives a validated configuration structure.

#![no_std]

pub mod pqc;
