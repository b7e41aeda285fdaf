//! Xtensa (ESP32 family) stackings for NuttX. Offsets are fixed: the
//! hardware exception frame layout does not move between NuttX
//! releases, so these are read with one contiguous frame fetch.
//!
//! Only the exception frame is on the stack. A16-A63 were spilled by
//! the windowed-register machinery before the switch and the
//! coprocessor/FPU/DSP registers are lazily saved elsewhere, so all of
//! them report unavailable. The exception entry path sets PS.EXCM (bit
//! 4) unconditionally; it says nothing about the thread, so it gets
//! scrubbed from the decoded PS.

use unstack_types::{Endian, Fixup, ReadStrategy, RegIdx, StackGrowth, StackedReg, Stacking};

const fn saved(name: &'static str, offset: u32) -> StackedReg {
    StackedReg::at(name, offset, 32)
}

const fn unsaved(name: &'static str) -> StackedReg {
    StackedReg::absent(name)
}

const PS_EXCM: u64 = 0x10;

static ESP32_REGS: [StackedReg; 105] = [
    saved("pc", 0x00),
    saved("a0", 0x08),
    saved("a1", 0x0c),
    saved("a2", 0x10),
    saved("a3", 0x14),
    saved("a4", 0x18),
    saved("a5", 0x1c),
    saved("a6", 0x20),
    saved("a7", 0x24),
    saved("a8", 0x28),
    saved("a9", 0x2c),
    saved("a10", 0x30),
    saved("a11", 0x34),
    saved("a12", 0x38),
    saved("a13", 0x3c),
    saved("a14", 0x40),
    saved("a15", 0x44),
    unsaved("a16"),
    unsaved("a17"),
    unsaved("a18"),
    unsaved("a19"),
    unsaved("a20"),
    unsaved("a21"),
    unsaved("a22"),
    unsaved("a23"),
    unsaved("a24"),
    unsaved("a25"),
    unsaved("a26"),
    unsaved("a27"),
    unsaved("a28"),
    unsaved("a29"),
    unsaved("a30"),
    unsaved("a31"),
    unsaved("a32"),
    unsaved("a33"),
    unsaved("a34"),
    unsaved("a35"),
    unsaved("a36"),
    unsaved("a37"),
    unsaved("a38"),
    unsaved("a39"),
    unsaved("a40"),
    unsaved("a41"),
    unsaved("a42"),
    unsaved("a43"),
    unsaved("a44"),
    unsaved("a45"),
    unsaved("a46"),
    unsaved("a47"),
    unsaved("a48"),
    unsaved("a49"),
    unsaved("a50"),
    unsaved("a51"),
    unsaved("a52"),
    unsaved("a53"),
    unsaved("a54"),
    unsaved("a55"),
    unsaved("a56"),
    unsaved("a57"),
    unsaved("a58"),
    unsaved("a59"),
    unsaved("a60"),
    unsaved("a61"),
    unsaved("a62"),
    unsaved("a63"),
    saved("lbeg", 0x58),
    saved("lend", 0x5c),
    saved("lcount", 0x60),
    saved("sar", 0x48),
    unsaved("windowbase"),
    unsaved("windowstart"),
    unsaved("configid0"),
    unsaved("configid1"),
    saved("ps", 0x04),
    unsaved("threadptr"),
    unsaved("br"),
    saved("scompare1", 0x54),
    unsaved("acclo"),
    unsaved("acchi"),
    unsaved("m0"),
    unsaved("m1"),
    unsaved("m2"),
    unsaved("m3"),
    unsaved("expstate"),
    unsaved("f64r_lo"),
    unsaved("f64r_hi"),
    unsaved("f64s"),
    unsaved("f0"),
    unsaved("f1"),
    unsaved("f2"),
    unsaved("f3"),
    unsaved("f4"),
    unsaved("f5"),
    unsaved("f6"),
    unsaved("f7"),
    unsaved("f8"),
    unsaved("f9"),
    unsaved("f10"),
    unsaved("f11"),
    unsaved("f12"),
    unsaved("f13"),
    unsaved("f14"),
    unsaved("f15"),
    unsaved("fcr"),
    unsaved("fsr"),
];

static ESP32_FIXUPS: [Fixup; 1] = [Fixup::ClearPsrBits {
    psr: RegIdx::from_raw_unchecked(73),
    mask: PS_EXCM,
}];

pub static NUTTX_ESP32: Stacking = Stacking {
    frame_size: 26 * 4,
    growth: StackGrowth::Down,
    endian: Endian::Little,
    regs: &ESP32_REGS,
    read: ReadStrategy::Contiguous,
    process_stack_align: Some(8),
    fixups: &ESP32_FIXUPS,
};

// LX7 without loop registers or scompare1.
static ESP32S2_REGS: [StackedReg; 73] = [
    saved("pc", 0x00),
    saved("a0", 0x08),
    saved("a1", 0x0c),
    saved("a2", 0x10),
    saved("a3", 0x14),
    saved("a4", 0x18),
    saved("a5", 0x1c),
    saved("a6", 0x20),
    saved("a7", 0x24),
    saved("a8", 0x28),
    saved("a9", 0x2c),
    saved("a10", 0x30),
    saved("a11", 0x34),
    saved("a12", 0x38),
    saved("a13", 0x3c),
    saved("a14", 0x40),
    saved("a15", 0x44),
    unsaved("a16"),
    unsaved("a17"),
    unsaved("a18"),
    unsaved("a19"),
    unsaved("a20"),
    unsaved("a21"),
    unsaved("a22"),
    unsaved("a23"),
    unsaved("a24"),
    unsaved("a25"),
    unsaved("a26"),
    unsaved("a27"),
    unsaved("a28"),
    unsaved("a29"),
    unsaved("a30"),
    unsaved("a31"),
    unsaved("a32"),
    unsaved("a33"),
    unsaved("a34"),
    unsaved("a35"),
    unsaved("a36"),
    unsaved("a37"),
    unsaved("a38"),
    unsaved("a39"),
    unsaved("a40"),
    unsaved("a41"),
    unsaved("a42"),
    unsaved("a43"),
    unsaved("a44"),
    unsaved("a45"),
    unsaved("a46"),
    unsaved("a47"),
    unsaved("a48"),
    unsaved("a49"),
    unsaved("a50"),
    unsaved("a51"),
    unsaved("a52"),
    unsaved("a53"),
    unsaved("a54"),
    unsaved("a55"),
    unsaved("a56"),
    unsaved("a57"),
    unsaved("a58"),
    unsaved("a59"),
    unsaved("a60"),
    unsaved("a61"),
    unsaved("a62"),
    unsaved("a63"),
    saved("sar", 0x48),
    unsaved("windowbase"),
    unsaved("windowstart"),
    unsaved("configid0"),
    unsaved("configid1"),
    saved("ps", 0x04),
    unsaved("threadptr"),
    unsaved("gpio_out"),
];

static ESP32S2_FIXUPS: [Fixup; 1] = [Fixup::ClearPsrBits {
    psr: RegIdx::from_raw_unchecked(70),
    mask: PS_EXCM,
}];

pub static NUTTX_ESP32S2: Stacking = Stacking {
    frame_size: 25 * 4,
    growth: StackGrowth::Down,
    endian: Endian::Little,
    regs: &ESP32S2_REGS,
    read: ReadStrategy::Contiguous,
    process_stack_align: Some(8),
    fixups: &ESP32S2_FIXUPS,
};

static ESP32S3_REGS: [StackedReg; 128] = [
    saved("pc", 0x00),
    saved("a0", 0x08),
    saved("a1", 0x0c),
    saved("a2", 0x10),
    saved("a3", 0x14),
    saved("a4", 0x18),
    saved("a5", 0x1c),
    saved("a6", 0x20),
    saved("a7", 0x24),
    saved("a8", 0x28),
    saved("a9", 0x2c),
    saved("a10", 0x30),
    saved("a11", 0x34),
    saved("a12", 0x38),
    saved("a13", 0x3c),
    saved("a14", 0x40),
    saved("a15", 0x44),
    unsaved("a16"),
    unsaved("a17"),
    unsaved("a18"),
    unsaved("a19"),
    unsaved("a20"),
    unsaved("a21"),
    unsaved("a22"),
    unsaved("a23"),
    unsaved("a24"),
    unsaved("a25"),
    unsaved("a26"),
    unsaved("a27"),
    unsaved("a28"),
    unsaved("a29"),
    unsaved("a30"),
    unsaved("a31"),
    unsaved("a32"),
    unsaved("a33"),
    unsaved("a34"),
    unsaved("a35"),
    unsaved("a36"),
    unsaved("a37"),
    unsaved("a38"),
    unsaved("a39"),
    unsaved("a40"),
    unsaved("a41"),
    unsaved("a42"),
    unsaved("a43"),
    unsaved("a44"),
    unsaved("a45"),
    unsaved("a46"),
    unsaved("a47"),
    unsaved("a48"),
    unsaved("a49"),
    unsaved("a50"),
    unsaved("a51"),
    unsaved("a52"),
    unsaved("a53"),
    unsaved("a54"),
    unsaved("a55"),
    unsaved("a56"),
    unsaved("a57"),
    unsaved("a58"),
    unsaved("a59"),
    unsaved("a60"),
    unsaved("a61"),
    unsaved("a62"),
    unsaved("a63"),
    saved("lbeg", 0x58),
    saved("lend", 0x5c),
    saved("lcount", 0x60),
    saved("sar", 0x48),
    unsaved("windowbase"),
    unsaved("windowstart"),
    unsaved("configid0"),
    unsaved("configid1"),
    saved("ps", 0x04),
    unsaved("threadptr"),
    unsaved("br"),
    saved("scompare1", 0x54),
    unsaved("acclo"),
    unsaved("acchi"),
    unsaved("m0"),
    unsaved("m1"),
    unsaved("m2"),
    unsaved("m3"),
    unsaved("gpio_out"),
    unsaved("f0"),
    unsaved("f1"),
    unsaved("f2"),
    unsaved("f3"),
    unsaved("f4"),
    unsaved("f5"),
    unsaved("f6"),
    unsaved("f7"),
    unsaved("f8"),
    unsaved("f9"),
    unsaved("f10"),
    unsaved("f11"),
    unsaved("f12"),
    unsaved("f13"),
    unsaved("f14"),
    unsaved("f15"),
    unsaved("fcr"),
    unsaved("fsr"),
    unsaved("accx_0"),
    unsaved("accx_1"),
    unsaved("qacc_h_0"),
    unsaved("qacc_h_1"),
    unsaved("qacc_h_2"),
    unsaved("qacc_h_3"),
    unsaved("qacc_h_4"),
    unsaved("qacc_l_0"),
    unsaved("qacc_l_1"),
    unsaved("qacc_l_2"),
    unsaved("qacc_l_3"),
    unsaved("qacc_l_4"),
    unsaved("sar_byte"),
    unsaved("fft_bit_width"),
    unsaved("ua_state_0"),
    unsaved("ua_state_1"),
    unsaved("ua_state_2"),
    unsaved("ua_state_3"),
    unsaved("q0"),
    unsaved("q1"),
    unsaved("q2"),
    unsaved("q3"),
    unsaved("q4"),
    unsaved("q5"),
    unsaved("q6"),
    unsaved("q7"),
];

static ESP32S3_FIXUPS: [Fixup; 1] = [Fixup::ClearPsrBits {
    psr: RegIdx::from_raw_unchecked(73),
    mask: PS_EXCM,
}];

pub static NUTTX_ESP32S3: Stacking = Stacking {
    frame_size: 26 * 4,
    growth: StackGrowth::Down,
    endian: Endian::Little,
    regs: &ESP32S3_REGS,
    read: ReadStrategy::Contiguous,
    process_stack_align: Some(8),
    fixups: &ESP32S3_FIXUPS,
};
