// SPDX-License-Identifier: GPL-2.0

//! Module loader
//!
//! Registry of resident modules. Loads and unloads are serialized by the
//! module-subsystem lock; the init hook runs at most once per cycle and the
//! exit hook only after a successful init. A failed init rolls the load
//! back without leaving a trace in the registry.

use alloc::vec::Vec;
use core::ffi::c_int;
use core::sync::atomic::{AtomicU32, Ordering};

use spin::Mutex;

use crate::error::{Error, Result};
use crate::module::ThisModule;
use crate::symbol;
use crate::{pr_debug, pr_warn};

bitflags::bitflags! {
	/// Kernel-wide taint flags; sticky once set.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct Taint: u32 {
		/// A module with a non-GPL-compatible license was loaded
		const PROPRIETARY_MODULE = 1 << 0;
		/// An out-of-tree module was loaded
		const OUT_OF_TREE_MODULE = 1 << 1;
	}
}

static TAINT: AtomicU32 = AtomicU32::new(0);

/// Current kernel taint flags
pub fn taint() -> Taint {
	Taint::from_bits_truncate(TAINT.load(Ordering::Relaxed))
}

fn add_taint(flag: Taint) {
	TAINT.fetch_or(flag.bits(), Ordering::Relaxed);
}

/// Module lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
	/// Init hook not yet finished
	Coming,
	/// Resident and quiescent
	Live,
	/// Exit hook running
	Going,
}

/// What the loader consumes: metadata plus the two entry points.
///
/// The in-tree stand-in for a relocatable module object; the `module!`
/// macro emits one per module.
pub struct ModuleImage {
	pub meta: &'static ThisModule,
	pub init: extern "C" fn() -> c_int,
	pub exit: extern "C" fn(),
}

/// Registry entry for a resident module
struct LoadedModule {
	image: &'static ModuleImage,
	state: ModuleState,
	refcount: u32,
	gplok: bool,
}

/// Metadata snapshot answering modinfo-style queries
#[derive(Debug, Clone)]
pub struct ModuleInfo {
	pub name: &'static str,
	pub author: &'static str,
	pub description: &'static str,
	pub license: &'static str,
	pub state: ModuleState,
	pub refcount: u32,
}

/// Module subsystem lock and registry, kept in load order
static MODULES: Mutex<Vec<LoadedModule>> = Mutex::new(Vec::new());

/// Load a module: register it and run its init hook.
///
/// The entry reaches `Live` only if init returns 0. A nonzero status rolls
/// the registration back and surfaces the mapped error; the exit hook is
/// never invoked for that cycle.
pub fn load(image: &'static ModuleImage) -> Result<()> {
	let meta = image.meta;
	if meta.name.is_empty() {
		return Err(Error::EINVAL);
	}

	symbol::init_core_exports();

	let mut modules = MODULES.lock();
	if modules.iter().any(|m| m.image.meta.name == meta.name) {
		return Err(Error::EEXIST);
	}

	let gplok = meta.is_gpl_compatible();
	if !gplok {
		pr_warn!(
			"module {}: license '{}' taints kernel\n",
			meta.name,
			meta.license
		);
		add_taint(Taint::PROPRIETARY_MODULE);
	}
	add_taint(Taint::OUT_OF_TREE_MODULE);

	modules.push(LoadedModule {
		image,
		state: ModuleState::Coming,
		refcount: 0,
		gplok,
	});

	let status = (image.init)();
	if status != 0 {
		modules.retain(|m| m.image.meta.name != meta.name);
		return Err(Error::from_errno(status));
	}

	if let Some(entry) = modules.iter_mut().find(|m| m.image.meta.name == meta.name) {
		entry.state = ModuleState::Live;
	}

	pr_debug!("module {} is now live\n", meta.name);
	Ok(())
}

/// Unload a module: run its exit hook and drop the registration.
pub fn unload(name: &str) -> Result<()> {
	let mut modules = MODULES.lock();
	let index = modules
		.iter()
		.position(|m| m.image.meta.name == name)
		.ok_or(Error::ENOENT)?;

	if modules[index].refcount > 0 {
		return Err(Error::EBUSY);
	}

	modules[index].state = ModuleState::Going;
	(modules[index].image.exit)();
	modules.remove(index);

	pr_debug!("module {} unloaded\n", name);
	Ok(())
}

/// Take a usage reference; the loader refuses to unload while one is held.
pub fn module_get(name: &str) -> Result<()> {
	let mut modules = MODULES.lock();
	let entry = modules
		.iter_mut()
		.find(|m| m.image.meta.name == name)
		.ok_or(Error::ENOENT)?;
	entry.refcount += 1;
	Ok(())
}

/// Drop a usage reference.
pub fn module_put(name: &str) -> Result<()> {
	let mut modules = MODULES.lock();
	let entry = modules
		.iter_mut()
		.find(|m| m.image.meta.name == name)
		.ok_or(Error::ENOENT)?;
	if entry.refcount == 0 {
		return Err(Error::EINVAL);
	}
	entry.refcount -= 1;
	Ok(())
}

pub fn is_loaded(name: &str) -> bool {
	MODULES.lock().iter().any(|m| m.image.meta.name == name)
}

/// Metadata of one resident module
pub fn info(name: &str) -> Option<ModuleInfo> {
	MODULES
		.lock()
		.iter()
		.find(|m| m.image.meta.name == name)
		.map(snapshot)
}

/// All resident modules, in load order
pub fn modules() -> Vec<ModuleInfo> {
	MODULES.lock().iter().map(snapshot).collect()
}

fn snapshot(entry: &LoadedModule) -> ModuleInfo {
	ModuleInfo {
		name: entry.image.meta.name,
		author: entry.image.meta.author,
		description: entry.image.meta.description,
		license: entry.image.meta.license,
		state: entry.state,
		refcount: entry.refcount,
	}
}

/// Resolve an exported symbol on behalf of a resident module, honoring the
/// GPL gate on its license tag.
pub fn lookup_symbol(module: &str, name: &str) -> Result<usize> {
	let modules = MODULES.lock();
	let entry = modules
		.iter()
		.find(|m| m.image.meta.name == module)
		.ok_or(Error::ENOENT)?;
	symbol::lookup(name, entry.gplok)
}
