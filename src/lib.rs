//! # Tube Vibration Models
//!
//! Flow-induced vibration screening for heat exchanger tube bundles, built as
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! Given a tube's geometry and material, the models compute its section
//! properties and fundamental natural frequency. Given the shell-side flow
//! velocity and bundle arrangement, they also compute the fluid-elastic
//! critical velocity and classify the span as stable or unstable.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Logging
//!
//! Evaluations are logged through the [`log`] facade. The crate never installs
//! a logger; binaries decide where the records go.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
