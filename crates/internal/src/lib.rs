//! Internal utilities shared by the cmce crates.
//!
//! Nothing in here is part of the public API contract; the helpers exist so that
//! the arithmetic kernels in `cmce-algorithms` can express masked, branch-free
//! updates in one place.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
