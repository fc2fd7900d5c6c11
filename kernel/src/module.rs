// SPDX-License-Identifier: GPL-2.0

//! Kernel module support
//!
//! The metadata record and the trait every loadable module implements.
//! Modules declare both through the `module!` macro rather than hand-rolling
//! the records, so the loader finds metadata and entry points at fixed
//! names.

use crate::error::Result;
use crate::license;

/// Module metadata
pub struct ThisModule {
	pub name: &'static str,
	pub author: &'static str,
	pub description: &'static str,
	pub license: &'static str,
}

impl ThisModule {
	/// Whether the declared license permits binding GPL-only exports.
	pub fn is_gpl_compatible(&self) -> bool {
		license::is_gpl_compatible(self.license)
	}
}

/// Trait for kernel modules
pub trait Module: Sized {
	/// Initialize the module
	///
	/// Runs once, after the image is mapped and before the module counts
	/// as resident. An error aborts the load.
	fn init(module: &'static ThisModule) -> Result<Self>;

	/// Clean up the module
	///
	/// Runs once, before the image is released, and only if init
	/// succeeded. Infallible.
	fn exit(_module: &'static ThisModule) {
		// Default implementation does nothing
	}
}
