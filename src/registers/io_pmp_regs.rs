// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT

// Generated register constants for io_pmp.

// Original reference file: src/register/io_pmp.h
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};
/// Register width
pub const IO_PMP_PARAM_REG_WIDTH: u32 = 64;
/// PMP address (common parameters)
pub const IO_PMP_PMP_ADDR_PMP_ADDR_FIELD_WIDTH: u32 = 54;
pub const IO_PMP_PMP_ADDR_PMP_ADDR_FIELDS_PER_REG: u32 = 1;
pub const IO_PMP_PMP_ADDR_MULTIREG_COUNT: u32 = 16;
/// PMP configuration (common parameters)
pub const IO_PMP_PMP_CFG_PMP_CFG_FIELD_WIDTH: u32 = 8;
pub const IO_PMP_PMP_CFG_PMP_CFG_FIELDS_PER_REG: u32 = 8;
pub const IO_PMP_PMP_CFG_MULTIREG_COUNT: u32 = 2;

register_structs! {
    pub IoPmpRegisters {
        /// PMP address
        (0x0000 => pub pmp_addr: [ReadWrite<u64, PMP_ADDR::Register>; 16]),
        /// PMP configuration
        (0x0080 => pub pmp_cfg: [ReadWrite<u64, PMP_CFG::Register>; 2]),
        (0x0090 => @END),
    }
}

register_bitfields![u64,
    pub PMP_ADDR [
        PMP_ADDR_0 OFFSET(0) NUMBITS(54) [],
    ],
    pub PMP_CFG [
        PMP_CFG_0 OFFSET(0) NUMBITS(8) [],
        PMP_CFG_1 OFFSET(8) NUMBITS(8) [],
        PMP_CFG_2 OFFSET(16) NUMBITS(8) [],
        PMP_CFG_3 OFFSET(24) NUMBITS(8) [],
        PMP_CFG_4 OFFSET(32) NUMBITS(8) [],
        PMP_CFG_5 OFFSET(40) NUMBITS(8) [],
        PMP_CFG_6 OFFSET(48) NUMBITS(8) [],
        PMP_CFG_7 OFFSET(56) NUMBITS(8) [],
    ],
];

// End generated register constants for io_pmp
