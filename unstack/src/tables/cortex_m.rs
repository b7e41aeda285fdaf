//! ARM v7-M/v8-M stacking for NuttX.
//!
//! NuttX's software-saved register block moves around between releases
//! (nuttx-12.3.0 inserted a register and shifted every offset) and
//! between build configurations (FPU, ARMv7 vs ARMv8), so the frame
//! offsets are not baked in here. The firmware exports `g_reg_offs`, a
//! u16-per-register table in GDB `org.gnu.gdb.arm.m-profile` order,
//! which the decoder re-reads on every decode. The offsets below are
//! the canonical output positions only.

use unstack_types::{Endian, Fixup, ReadStrategy, RegIdx, StackGrowth, StackedReg, Stacking};

static CORTEX_M_REGS: [StackedReg; 17] = [
    StackedReg::at("r0", 0, 32),
    StackedReg::at("r1", 4, 32),
    StackedReg::at("r2", 8, 32),
    StackedReg::at("r3", 12, 32),
    StackedReg::at("r4", 16, 32),
    StackedReg::at("r5", 20, 32),
    StackedReg::at("r6", 24, 32),
    StackedReg::at("r7", 28, 32),
    StackedReg::at("r8", 32, 32),
    StackedReg::at("r9", 36, 32),
    StackedReg::at("r10", 40, 32),
    StackedReg::at("r11", 44, 32),
    StackedReg::at("r12", 48, 32),
    StackedReg::at("sp", 52, 32),
    StackedReg::at("lr", 56, 32),
    StackedReg::at("pc", 60, 32),
    StackedReg::at("xpsr", 64, 32),
];

const SP: RegIdx = RegIdx::from_raw_unchecked(13);
const XPSR: RegIdx = RegIdx::from_raw_unchecked(16);

// NuttX stores the SP the exception handler saw, which the hardware
// may have padded by one word to reach 8-byte alignment; xPSR[9]
// records the pad. See the Arm reference manual, "Stack alignment on
// exception entry".
static CORTEX_M_FIXUPS: [Fixup; 1] = [Fixup::RealignSp {
    psr: XPSR,
    pad_flag_bit: 9,
    sp: SP,
}];

pub static NUTTX_CORTEX_M: Stacking = Stacking {
    frame_size: 17 * 4,
    growth: StackGrowth::Down,
    endian: Endian::Little,
    regs: &CORTEX_M_REGS,
    read: ReadStrategy::TcbOffsetTable {
        symbol: "g_reg_offs",
    },
    process_stack_align: None,
    fixups: &CORTEX_M_FIXUPS,
};
