// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Register support for the AXI IO-PMP.
//!
//! The IO-PMP sits in front of an AXI master and filters its bus accesses
//! against RISC-V PMP style address/configuration entry pairs. This crate
//! carries the register constants for the peripheral's 64-bit configuration
//! port: byte offsets, field masks and field bit positions, plus the
//! multiregister packing parameters. How the hardware interprets the entries
//! is left to the peripheral and to driver code layered on top.

#![no_std]

pub mod registers;
