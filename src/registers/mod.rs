// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generated register definitions for the IO-PMP.

pub mod io_pmp_regs;
