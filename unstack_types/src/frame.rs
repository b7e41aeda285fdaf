use index_vec::IndexVec;
use serde::{Deserialize, Serialize};

use crate::id::RegIdx;

/// A single decoded register: a concrete value of a declared width, or
/// explicitly unavailable. Unavailable is never conflated with zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegVal {
    Bits { value: u64, width_bits: u16 },
    Unavailable,
}

impl RegVal {
    /// Construct a value truncated to `width_bits`.
    pub fn bits(value: u64, width_bits: u16) -> Self {
        RegVal::Bits {
            value: value & width_mask(width_bits),
            width_bits,
        }
    }

    pub fn value(&self) -> Option<u64> {
        match self {
            RegVal::Bits { value, .. } => Some(*value),
            RegVal::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, RegVal::Bits { .. })
    }
}

pub fn width_mask(width_bits: u16) -> u64 {
    if width_bits >= 64 {
        u64::MAX
    } else {
        (1u64 << width_bits) - 1
    }
}

/// The decoded register set for one thread, in canonical protocol
/// order. Lives for a single debugger query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalFrame {
    regs: IndexVec<RegIdx, RegVal>,
}

impl CanonicalFrame {
    /// A frame of `len` registers, all unavailable.
    pub fn unavailable(len: usize) -> Self {
        CanonicalFrame {
            regs: IndexVec::from(vec![RegVal::Unavailable; len]),
        }
    }

    pub fn len(&self) -> usize {
        self.regs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    pub fn get(&self, reg: RegIdx) -> RegVal {
        self.regs[reg]
    }

    pub fn set(&mut self, reg: RegIdx, val: RegVal) {
        self.regs[reg] = val;
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegIdx, &RegVal)> {
        self.regs.iter_enumerated()
    }
}
