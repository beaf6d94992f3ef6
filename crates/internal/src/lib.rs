//! Internal utilities for the polysample library

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
