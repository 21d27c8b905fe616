//! Structural models.
//!
//! This module contains models for structural behavior of process equipment,
//! such as vibration of heat exchanger tubes.

pub mod tube_vibration;
