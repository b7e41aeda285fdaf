//! Shared data types for RTOS stack-frame decoding: the canonical
//! register model, stacking descriptors, and the decoded-frame output.

pub mod frame;
pub mod id;
pub mod stacking;

pub use frame::{CanonicalFrame, RegVal};
pub use id::RegIdx;
pub use stacking::{Endian, Fixup, ReadStrategy, RegSlot, StackGrowth, StackedReg, Stacking};
