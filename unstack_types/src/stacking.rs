use crate::id::RegIdx;

/// Where one canonical register lives within a saved frame.
///
/// The context-save path only stores a subset of the architectural
/// register file; everything else must be reported as unavailable, not
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegSlot {
    /// Stored in the frame at a fixed byte offset.
    Present { offset: u32, width_bits: u16 },
    /// Not stored in the frame; emitted as the computed process stack
    /// pointer (the SP value the thread will resume with).
    LinkedToStackPointer { width_bits: u16 },
    /// Never saved by this stacking.
    Absent,
}

/// One canonical register: its presentation name plus its slot in the
/// saved frame. Order within a descriptor's `regs` is the debugger
/// protocol order and is load-bearing.
#[derive(Debug, Clone, Copy)]
pub struct StackedReg {
    pub name: &'static str,
    pub slot: RegSlot,
}

impl StackedReg {
    pub const fn at(name: &'static str, offset: u32, width_bits: u16) -> Self {
        StackedReg {
            name,
            slot: RegSlot::Present { offset, width_bits },
        }
    }

    pub const fn sp_linked(name: &'static str, width_bits: u16) -> Self {
        StackedReg {
            name,
            slot: RegSlot::LinkedToStackPointer { width_bits },
        }
    }

    pub const fn absent(name: &'static str) -> Self {
        StackedReg {
            name,
            slot: RegSlot::Absent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackGrowth {
    Down,
    Up,
}

impl StackGrowth {
    /// `-1` for a downward-growing stack, `+1` for upward.
    pub fn direction(self) -> i64 {
        match self {
            StackGrowth::Down => -1,
            StackGrowth::Up => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

/// How the raw frame is fetched from the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStrategy {
    /// One contiguous read of `frame_size` bytes at the stack pointer.
    Contiguous,
    /// Per-register scattered reads driven by a firmware-resident
    /// offset table (one u16 per canonical register, 0xFFFF = not
    /// saved) located via the named symbol. Re-read on every decode;
    /// the table changes across firmware builds.
    TcbOffsetTable { symbol: &'static str },
}

/// Post-extraction corrections, applied to decoded values only. None
/// of these touch target memory or the raw buffer.
#[derive(Debug, Clone, Copy)]
pub enum Fixup {
    /// Exception entry may have pushed a pad word to realign the stack,
    /// recorded in a status-register flag bit. When the flag is set,
    /// move the decoded SP by 4 bytes along the growth direction to
    /// recover the thread's pre-pad stack pointer.
    RealignSp {
        psr: RegIdx,
        pad_flag_bit: u32,
        sp: RegIdx,
    },
    /// Clear status bits the trap entry sequence sets unconditionally;
    /// they describe the save path, not the thread.
    ClearPsrBits { psr: RegIdx, mask: u64 },
}

/// Immutable per-architecture/per-ABI description of a saved frame.
#[derive(Debug, Clone, Copy)]
pub struct Stacking {
    /// Total size of the raw saved frame in bytes.
    pub frame_size: u32,
    pub growth: StackGrowth,
    pub endian: Endian,
    /// One entry per canonical register, in protocol order.
    pub regs: &'static [StackedReg],
    pub read: ReadStrategy,
    /// Power-of-two alignment applied when computing the process stack
    /// pointer for `LinkedToStackPointer` slots.
    pub process_stack_align: Option<u64>,
    pub fixups: &'static [Fixup],
}

impl Stacking {
    /// Canonical register count for this descriptor's family.
    pub fn num_regs(&self) -> usize {
        self.regs.len()
    }
}
