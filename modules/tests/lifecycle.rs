// SPDX-License-Identifier: GPL-2.0

//! Full load/unload cycles of the hello module, observed through the
//! kernel log and the loader the way dmesg, lsmod and modinfo would
//! observe them.

use std::thread;
use std::time::Duration;

use kernel::loader::{self, ModuleState, Taint};
use kernel::printk::{self, LogLevel};
use kernel::sync::Mutex;
use modules::hello;

/// Origin stamped on the hello module's records
const HELLO_ORIGIN: &str = "modules::hello";

/// The loader registry and the log ring are kernel-wide; cycles must not
/// interleave.
static CYCLE: Mutex<()> = Mutex::new(());

#[test]
fn single_cycle_emits_hello_then_adios() {
	let _cycle = CYCLE.lock();
	let before = printk::cursor();

	loader::load(&hello::MODULE).unwrap();

	let after_load = printk::entries_since(before);
	assert_eq!(after_load.len(), 1);
	assert_eq!(after_load[0].message, "Hello world");
	assert_eq!(after_load[0].level, LogLevel::Alert);
	assert_eq!(after_load[0].origin, HELLO_ORIGIN);
	assert_eq!(printk::last().unwrap().message, "Hello world");
	assert!(printk::dump().contains("Hello world"));

	let mid = printk::cursor();
	loader::unload("hello").unwrap();

	let after_unload = printk::entries_since(mid);
	assert_eq!(after_unload.len(), 1);
	assert_eq!(after_unload[0].message, "Adios");
	assert_eq!(after_unload[0].level, LogLevel::Info);
	assert!(after_unload[0].seq > after_load[0].seq);
	assert_eq!(printk::last().unwrap().message, "Adios");
}

#[test]
fn repeated_cycles_alternate_from_hello() {
	let _cycle = CYCLE.lock();
	printk::clear();

	for _ in 0..3 {
		loader::load(&hello::MODULE).unwrap();
		loader::unload("hello").unwrap();
	}

	let messages: Vec<_> = printk::snapshot()
		.iter()
		.map(|e| e.message.clone())
		.collect();
	assert_eq!(
		messages,
		[
			"Hello world",
			"Adios",
			"Hello world",
			"Adios",
			"Hello world",
			"Adios"
		]
	);
}

#[test]
fn metadata_is_visible_while_resident() {
	let _cycle = CYCLE.lock();

	loader::load(&hello::MODULE).unwrap();

	let info = loader::info("hello").unwrap();
	assert!(info.author.contains("Devicedriver in c"));
	assert!(info.description.contains("A simple hello world module"));
	assert_eq!(info.license, "GPL");
	assert_eq!(info.state, ModuleState::Live);
	assert_eq!(info.refcount, 0);
	assert!(loader::modules().iter().any(|m| m.name == "hello"));

	loader::unload("hello").unwrap();
	assert!(loader::info("hello").is_none());
}

#[test]
fn gpl_license_passes_the_gate() {
	let _cycle = CYCLE.lock();

	assert!(kernel::license::is_gpl_compatible(hello::MODULE.meta.license));

	loader::load(&hello::MODULE).unwrap();
	assert!(loader::lookup_symbol("hello", "printk").is_ok());
	assert!(loader::lookup_symbol("hello", "klog_entries_since").is_ok());
	assert!(loader::taint().contains(Taint::OUT_OF_TREE_MODULE));
	// Nothing in this binary loads a non-GPL module
	assert!(!loader::taint().contains(Taint::PROPRIETARY_MODULE));
	loader::unload("hello").unwrap();
}

#[test]
fn resident_module_is_quiescent() {
	let _cycle = CYCLE.lock();

	loader::load(&hello::MODULE).unwrap();

	let resident = printk::cursor();
	let stats_before = printk::stats();
	thread::sleep(Duration::from_millis(150));
	assert!(printk::entries_since(resident).is_empty());
	assert_eq!(printk::stats().total, stats_before.total);

	loader::unload("hello").unwrap();
}

#[test]
fn duplicate_load_and_stray_unload_leave_no_lines() {
	let _cycle = CYCLE.lock();

	loader::load(&hello::MODULE).unwrap();
	let resident = printk::cursor();
	assert_eq!(loader::load(&hello::MODULE), Err(kernel::error::Error::EEXIST));
	assert!(printk::entries_since(resident).is_empty());

	loader::unload("hello").unwrap();
	assert_eq!(loader::unload("hello"), Err(kernel::error::Error::ENOENT));
	assert_eq!(printk::last().unwrap().message, "Adios");
}

#[test]
fn loader_progress_is_visible_at_debug_level() {
	let _cycle = CYCLE.lock();

	printk::set_min_level(LogLevel::Debug);
	let before = printk::cursor();
	loader::load(&hello::MODULE).unwrap();
	loader::unload("hello").unwrap();
	let entries = printk::entries_since(before);
	printk::set_min_level(LogLevel::Info);

	assert!(entries
		.iter()
		.any(|e| e.origin == "kernel::loader" && e.message == "module hello is now live"));
	assert!(entries
		.iter()
		.any(|e| e.origin == "kernel::loader" && e.message == "module hello unloaded"));
}

#[test]
fn entry_points_speak_the_status_convention() {
	let _cycle = CYCLE.lock();
	let before = printk::cursor();

	assert_eq!(hello::init_module(), 0);
	let lines = printk::entries_since(before);
	assert_eq!(lines.last().unwrap().message, "Hello world");

	hello::cleanup_module();
	assert_eq!(printk::last().unwrap().message, "Adios");
}
