// SPDX-License-Identifier: GPL-2.0

//! The Rust kernel crate.
//!
//! Core support for loadable kernel modules: the printk ring buffer, the
//! module loader with its license gate, and the metadata convention every
//! module declares through the `module!` macro. This crate is the surface a
//! module binds against; the rest of a running kernel is outside it.

#![no_std]

extern crate alloc;

pub mod error;
pub mod license;
pub mod loader; // Module registry and lifecycle
pub mod module;
pub mod prelude;
pub mod printk; // Kernel log ring buffer
pub mod symbol;
pub mod sync;

/// Kernel version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "Rust Kernel";
