// SPDX-License-Identifier: GPL-2.0

//! Hello world module
//!
//! Announces load and unload in the kernel log and does nothing in
//! between. The load message is deliberately loud so default consoles do
//! not filter it; the unload message is routine.

use kernel::prelude::*;

module! {
	type: HelloWorld,
	name: "hello",
	author: "Devicedriver in c",
	description: "A simple hello world module",
	license: "GPL",
}

struct HelloWorld;

impl Module for HelloWorld {
	fn init(_module: &'static ThisModule) -> Result<Self> {
		pr_alert!("Hello world\n");
		Ok(HelloWorld)
	}

	fn exit(_module: &'static ThisModule) {
		pr_info!("Adios\n");
	}
}
