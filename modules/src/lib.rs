// SPDX-License-Identifier: GPL-2.0

//! Kernel modules

#![no_std]

pub mod hello;
