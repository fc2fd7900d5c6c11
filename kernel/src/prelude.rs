// SPDX-License-Identifier: GPL-2.0

//! Kernel prelude - commonly used types and traits

// Re-export macros
pub use alloc::vec;
// Re-export common alloc types
pub use alloc::{
	boxed::Box,
	format,
	string::{String, ToString},
	vec::Vec,
};

pub use crate::error::{Error, Result};
pub use crate::loader::ModuleImage;
pub use crate::module::{Module, ThisModule};
pub use crate::printk::LogLevel;
pub use crate::sync::{Mutex, RwLock, Spinlock};
pub use crate::{
	module, pr_alert, pr_crit, pr_debug, pr_emerg, pr_err, pr_info, pr_notice, pr_warn,
};

/// Module definition macro
///
/// Declares the metadata record, the slot holding the module instance
/// between init and exit, the `init_module` / `cleanup_module` entry
/// points speaking the loader's status-code convention, and the `MODULE`
/// image the loader consumes.
#[macro_export]
macro_rules! module {
	(
		type: $type:ty,
		name: $name:expr,
		author: $author:expr,
		description: $description:expr,
		license: $license:expr $(,)?
	) => {
		static __THIS_MODULE: $crate::module::ThisModule = $crate::module::ThisModule {
			name: $name,
			author: $author,
			description: $description,
			license: $license,
		};

		static __MODULE_INSTANCE: $crate::sync::Spinlock<::core::option::Option<$type>> =
			$crate::sync::Spinlock::new(::core::option::Option::None);

		/// Entry point the loader invokes once after the image is mapped.
		#[no_mangle]
		pub extern "C" fn init_module() -> ::core::ffi::c_int {
			match <$type as $crate::module::Module>::init(&__THIS_MODULE) {
				::core::result::Result::Ok(instance) => {
					*__MODULE_INSTANCE.lock() = ::core::option::Option::Some(instance);
					0
				}
				::core::result::Result::Err(e) => e.to_errno(),
			}
		}

		/// Entry point the loader invokes once before the image is
		/// released. The instance from init does not outlive this call.
		#[no_mangle]
		pub extern "C" fn cleanup_module() {
			<$type as $crate::module::Module>::exit(&__THIS_MODULE);
			__MODULE_INSTANCE.lock().take();
		}

		/// The image the loader consumes: metadata plus entry points.
		pub static MODULE: $crate::loader::ModuleImage = $crate::loader::ModuleImage {
			meta: &__THIS_MODULE,
			init: init_module,
			exit: cleanup_module,
		};
	};
}
