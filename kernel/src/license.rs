// SPDX-License-Identifier: GPL-2.0

//! Module license recognition
//!
//! The loader matches a module's declared license tag against the set of
//! GPL-compatible tags to decide whether the module may bind GPL-only
//! exports. Unrecognized tags do not prevent loading; they taint the
//! kernel and close the gate.

/// License tags accepted as GPL-compatible, spelled the way modules
/// declare them.
const GPL_COMPATIBLE: &[&str] = &[
	"GPL",
	"GPL v2",
	"GPL and additional rights",
	"Dual BSD/GPL",
	"Dual MIT/GPL",
	"Dual MPL/GPL",
];

/// Whether a license tag permits binding GPL-only exports.
pub fn is_gpl_compatible(tag: &str) -> bool {
	GPL_COMPATIBLE.contains(&tag)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn gpl_family_is_recognized() {
		for tag in GPL_COMPATIBLE {
			assert!(is_gpl_compatible(tag));
		}
	}

	#[test]
	fn other_tags_are_not() {
		assert!(!is_gpl_compatible("Proprietary"));
		assert!(!is_gpl_compatible("BSD"));
		assert!(!is_gpl_compatible("gpl"));
		assert!(!is_gpl_compatible(""));
	}
}
