// SPDX-License-Identifier: GPL-2.0

//! Kernel log ring buffer
//!
//! printk-style sink: severity-tagged records kept in a bounded ring that
//! in-kernel readers inspect the way dmesg would. The sink never fails
//! observably; a full ring drops its oldest record and counts the loss.
//! Records below the configured minimum level are counted but not stored.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::sync::Spinlock;

/// Log levels (compatible with Linux kernel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
	Emergency = 0, // KERN_EMERG
	Alert = 1,     // KERN_ALERT
	Critical = 2,  // KERN_CRIT
	Error = 3,     // KERN_ERR
	Warning = 4,   // KERN_WARNING
	Notice = 5,    // KERN_NOTICE
	Info = 6,      // KERN_INFO
	Debug = 7,     // KERN_DEBUG
}

impl LogLevel {
	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Emergency => "EMERG",
			LogLevel::Alert => "ALERT",
			LogLevel::Critical => "CRIT",
			LogLevel::Error => "ERROR",
			LogLevel::Warning => "WARN",
			LogLevel::Notice => "NOTICE",
			LogLevel::Info => "INFO",
			LogLevel::Debug => "DEBUG",
		}
	}
}

/// One stored log record
#[derive(Debug, Clone)]
pub struct LogEntry {
	/// Position in the stored stream; strictly increasing
	pub seq: u64,
	pub level: LogLevel,
	/// Module path of the recording call site
	pub origin: &'static str,
	pub message: String,
}

impl LogEntry {
	pub fn format(&self) -> String {
		format!(
			"[{:>6}] [{:>6}] {}: {}\n",
			self.seq,
			self.level.as_str(),
			self.origin,
			self.message
		)
	}
}

/// Ring configuration
#[derive(Debug, Clone, Copy)]
pub struct LogConfig {
	/// Records above this level (numerically) are not stored
	pub min_level: LogLevel,
	pub max_entries: usize,
}

impl LogConfig {
	pub const fn new() -> Self {
		Self {
			min_level: LogLevel::Info,
			max_entries: 1024,
		}
	}
}

impl Default for LogConfig {
	fn default() -> Self {
		Self::new()
	}
}

/// Logging statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStats {
	pub total: u64,
	pub by_level: [u64; 8],
	pub suppressed: u64,
	pub dropped: u64,
}

/// The ring itself
pub struct LogRing {
	config: LogConfig,
	next_seq: u64,
	entries: Vec<LogEntry>,
	stats: LogStats,
}

impl LogRing {
	pub const fn new() -> Self {
		Self {
			config: LogConfig::new(),
			next_seq: 0,
			entries: Vec::new(),
			stats: LogStats {
				total: 0,
				by_level: [0; 8],
				suppressed: 0,
				dropped: 0,
			},
		}
	}

	/// Append one record.
	///
	/// A single trailing newline terminates the record and is not stored.
	pub fn record(&mut self, level: LogLevel, origin: &'static str, mut message: String) {
		self.stats.total += 1;
		self.stats.by_level[level as usize] += 1;

		if level > self.config.min_level {
			self.stats.suppressed += 1;
			return;
		}

		if message.ends_with('\n') {
			message.pop();
		}

		if self.entries.len() >= self.config.max_entries {
			self.entries.remove(0);
			self.stats.dropped += 1;
		}

		let seq = self.next_seq;
		self.next_seq += 1;
		self.entries.push(LogEntry {
			seq,
			level,
			origin,
			message,
		});
	}

	/// Sequence number the next stored record will carry
	pub fn cursor(&self) -> u64 {
		self.next_seq
	}

	pub fn entries(&self) -> &[LogEntry] {
		&self.entries
	}

	pub fn entries_since(&self, seq: u64) -> Vec<LogEntry> {
		self.entries.iter().filter(|e| e.seq >= seq).cloned().collect()
	}

	pub fn last(&self) -> Option<&LogEntry> {
		self.entries.last()
	}

	pub fn stats(&self) -> LogStats {
		self.stats
	}

	pub fn set_min_level(&mut self, level: LogLevel) {
		self.config.min_level = level;
	}

	pub fn set_max_entries(&mut self, max: usize) {
		self.config.max_entries = max;
	}

	/// Drop stored records; sequence numbers keep rising.
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	pub fn dump(&self) -> String {
		let mut output = String::new();
		for entry in &self.entries {
			output.push_str(&entry.format());
		}
		output
	}
}

/// Global kernel log
static KLOG: Spinlock<LogRing> = Spinlock::new(LogRing::new());

/// Record one message in the kernel log.
pub fn printk(level: LogLevel, origin: &'static str, args: fmt::Arguments<'_>) {
	let mut message = String::new();
	// Writing into a String cannot fail
	let _ = fmt::Write::write_fmt(&mut message, args);
	KLOG.lock().record(level, origin, message);
}

/// Sequence number the next stored record will carry
pub fn cursor() -> u64 {
	KLOG.lock().cursor()
}

/// Stored records with a sequence number at or past `seq`
pub fn entries_since(seq: u64) -> Vec<LogEntry> {
	KLOG.lock().entries_since(seq)
}

/// Copy of the stored records, oldest first
pub fn snapshot() -> Vec<LogEntry> {
	KLOG.lock().entries().to_vec()
}

pub fn last() -> Option<LogEntry> {
	KLOG.lock().last().cloned()
}

pub fn stats() -> LogStats {
	KLOG.lock().stats()
}

pub fn set_min_level(level: LogLevel) {
	KLOG.lock().set_min_level(level);
}

pub fn clear() {
	KLOG.lock().clear();
}

/// dmesg-style rendering of the stored records
pub fn dump() -> String {
	KLOG.lock().dump()
}

/// Recording macros; each stamps the call site's module as origin.
#[macro_export]
macro_rules! pr_emerg {
	($($arg:tt)*) => {
		$crate::printk::printk(
			$crate::printk::LogLevel::Emergency,
			::core::module_path!(),
			::core::format_args!($($arg)*),
		)
	};
}

#[macro_export]
macro_rules! pr_alert {
	($($arg:tt)*) => {
		$crate::printk::printk(
			$crate::printk::LogLevel::Alert,
			::core::module_path!(),
			::core::format_args!($($arg)*),
		)
	};
}

#[macro_export]
macro_rules! pr_crit {
	($($arg:tt)*) => {
		$crate::printk::printk(
			$crate::printk::LogLevel::Critical,
			::core::module_path!(),
			::core::format_args!($($arg)*),
		)
	};
}

#[macro_export]
macro_rules! pr_err {
	($($arg:tt)*) => {
		$crate::printk::printk(
			$crate::printk::LogLevel::Error,
			::core::module_path!(),
			::core::format_args!($($arg)*),
		)
	};
}

#[macro_export]
macro_rules! pr_warn {
	($($arg:tt)*) => {
		$crate::printk::printk(
			$crate::printk::LogLevel::Warning,
			::core::module_path!(),
			::core::format_args!($($arg)*),
		)
	};
}

#[macro_export]
macro_rules! pr_notice {
	($($arg:tt)*) => {
		$crate::printk::printk(
			$crate::printk::LogLevel::Notice,
			::core::module_path!(),
			::core::format_args!($($arg)*),
		)
	};
}

#[macro_export]
macro_rules! pr_info {
	($($arg:tt)*) => {
		$crate::printk::printk(
			$crate::printk::LogLevel::Info,
			::core::module_path!(),
			::core::format_args!($($arg)*),
		)
	};
}

#[macro_export]
macro_rules! pr_debug {
	($($arg:tt)*) => {
		$crate::printk::printk(
			$crate::printk::LogLevel::Debug,
			::core::module_path!(),
			::core::format_args!($($arg)*),
		)
	};
}
