// SPDX-License-Identifier: GPL-2.0

//! Exported-symbol table
//!
//! What EXPORT_SYMBOL and EXPORT_SYMBOL_GPL publish. Lookups are made on
//! behalf of a module, and GPL-only exports resolve only for modules whose
//! license tag is GPL-compatible.

use alloc::string::String;
use alloc::vec::Vec;

use spin::{Once, RwLock};

use crate::error::{Error, Result};

/// One exported symbol
#[derive(Debug, Clone)]
pub struct ExportedSymbol {
	pub name: String,
	pub addr: usize,
	/// EXPORT_SYMBOL_GPL semantics when set
	pub gpl_only: bool,
}

static EXPORTS: RwLock<Vec<ExportedSymbol>> = RwLock::new(Vec::new());
static CORE_EXPORTS: Once<()> = Once::new();

/// Publish a symbol; a later export of the same name replaces the earlier
/// one.
pub fn export(name: &str, addr: usize, gpl_only: bool) {
	let mut exports = EXPORTS.write();
	let entry = ExportedSymbol {
		name: String::from(name),
		addr,
		gpl_only,
	};
	if let Some(pos) = exports.iter().position(|s| s.name == name) {
		exports[pos] = entry;
	} else {
		exports.push(entry);
	}
}

/// Withdraw a symbol; true if it was present.
pub fn unexport(name: &str) -> bool {
	let mut exports = EXPORTS.write();
	if let Some(pos) = exports.iter().position(|s| s.name == name) {
		exports.remove(pos);
		true
	} else {
		false
	}
}

/// Resolve a symbol on behalf of a requester whose GPL standing is
/// `gpl_ok`.
pub fn lookup(name: &str, gpl_ok: bool) -> Result<usize> {
	let exports = EXPORTS.read();
	let sym = exports
		.iter()
		.find(|s| s.name == name)
		.ok_or(Error::ENOENT)?;
	if sym.gpl_only && !gpl_ok {
		return Err(Error::EPERM);
	}
	Ok(sym.addr)
}

/// Copy of the export table
pub fn symbols() -> Vec<ExportedSymbol> {
	EXPORTS.read().clone()
}

/// Register the kernel's own exports; runs once, on first load.
pub(crate) fn init_core_exports() {
	CORE_EXPORTS.call_once(|| {
		export("printk", crate::printk::printk as usize, false);
		export(
			"klog_entries_since",
			crate::printk::entries_since as usize,
			true,
		);
	});
}
