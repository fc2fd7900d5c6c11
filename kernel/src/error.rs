// SPDX-License-Identifier: GPL-2.0

//! Error handling types and utilities

use core::fmt;

/// Kernel error type
///
/// Variants carry the errno values the module subsystem speaks; entry
/// points report them to the loader as negative status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// Operation not permitted (EPERM)
	EPERM,
	/// No such file or directory (ENOENT)
	ENOENT,
	/// I/O error (EIO)
	EIO,
	/// Out of memory (ENOMEM)
	ENOMEM,
	/// Resource busy (EBUSY)
	EBUSY,
	/// Resource already exists (EEXIST)
	EEXIST,
	/// Invalid argument (EINVAL)
	EINVAL,
	/// Function not implemented (ENOSYS)
	ENOSYS,
}

impl Error {
	/// Convert error to errno value
	pub fn to_errno(self) -> i32 {
		match self {
			Error::EPERM => -1,
			Error::ENOENT => -2,
			Error::EIO => -5,
			Error::ENOMEM => -12,
			Error::EBUSY => -16,
			Error::EEXIST => -17,
			Error::EINVAL => -22,
			Error::ENOSYS => -38,
		}
	}

	/// Map a status code reported by a module entry point back to an error.
	///
	/// Codes this subsystem never produces collapse to EINVAL.
	pub fn from_errno(errno: i32) -> Self {
		match errno {
			-1 => Error::EPERM,
			-2 => Error::ENOENT,
			-5 => Error::EIO,
			-12 => Error::ENOMEM,
			-16 => Error::EBUSY,
			-17 => Error::EEXIST,
			-38 => Error::ENOSYS,
			_ => Error::EINVAL,
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::EPERM => write!(f, "Operation not permitted"),
			Error::ENOENT => write!(f, "No such file or directory"),
			Error::EIO => write!(f, "Input/output error"),
			Error::ENOMEM => write!(f, "Out of memory"),
			Error::EBUSY => write!(f, "Resource busy"),
			Error::EEXIST => write!(f, "File exists"),
			Error::EINVAL => write!(f, "Invalid argument"),
			Error::ENOSYS => write!(f, "Function not implemented"),
		}
	}
}

/// Kernel result type
pub type Result<T> = core::result::Result<T, Error>;
