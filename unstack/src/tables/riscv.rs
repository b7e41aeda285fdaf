//! RV32 stacking for NuttX, GDB riscv feature order. Offsets come from
//! the firmware's `g_reg_offs` table at decode time, same scheme as
//! cortex_m; `zero` is hardwired and never saved.

use unstack_types::{Endian, ReadStrategy, StackGrowth, StackedReg, Stacking};

static RISCV_REGS: [StackedReg; 33] = [
    StackedReg::absent("zero"),
    StackedReg::at("ra", 0x04, 32),
    StackedReg::at("sp", 0x08, 32),
    StackedReg::at("gp", 0x0c, 32),
    StackedReg::at("tp", 0x10, 32),
    StackedReg::at("t0", 0x14, 32),
    StackedReg::at("t1", 0x18, 32),
    StackedReg::at("t2", 0x1c, 32),
    StackedReg::at("fp", 0x20, 32),
    StackedReg::at("s1", 0x24, 32),
    StackedReg::at("a0", 0x28, 32),
    StackedReg::at("a1", 0x2c, 32),
    StackedReg::at("a2", 0x30, 32),
    StackedReg::at("a3", 0x34, 32),
    StackedReg::at("a4", 0x38, 32),
    StackedReg::at("a5", 0x3c, 32),
    StackedReg::at("a6", 0x40, 32),
    StackedReg::at("a7", 0x44, 32),
    StackedReg::at("s2", 0x48, 32),
    StackedReg::at("s3", 0x4c, 32),
    StackedReg::at("s4", 0x50, 32),
    StackedReg::at("s5", 0x54, 32),
    StackedReg::at("s6", 0x58, 32),
    StackedReg::at("s7", 0x5c, 32),
    StackedReg::at("s8", 0x60, 32),
    StackedReg::at("s9", 0x64, 32),
    StackedReg::at("s10", 0x68, 32),
    StackedReg::at("s11", 0x6c, 32),
    StackedReg::at("t3", 0x70, 32),
    StackedReg::at("t4", 0x74, 32),
    StackedReg::at("t5", 0x78, 32),
    StackedReg::at("t6", 0x7c, 32),
    StackedReg::at("pc", 0x80, 32),
];

pub static NUTTX_RISCV: Stacking = Stacking {
    frame_size: 33 * 4,
    growth: StackGrowth::Down,
    endian: Endian::Little,
    regs: &RISCV_REGS,
    read: ReadStrategy::TcbOffsetTable {
        symbol: "g_reg_offs",
    },
    process_stack_align: None,
    fixups: &[],
};
