//! RTOS-aware stack frame decoding.
//!
//! When a debugger halts a target running an RTOS, only the current
//! thread's registers live in the CPU; every other thread's context
//! sits in a saved frame on its own stack. This crate turns those raw
//! frames into canonical, protocol-ordered register sets, driven by
//! per-architecture stacking descriptors.
//!
//! Target memory access and symbol resolution stay on the host side,
//! behind the [`memory::TargetMemory`] and [`memory::SymbolLookup`]
//! traits.

pub mod decode;
pub mod error;
pub mod memory;
pub mod registry;
pub mod tables;

pub use decode::decode;
pub use error::DecodeError;
pub use memory::{MemoryError, NoSymbols, SymbolLookup, TargetMemory};
pub use registry::stacking_for_target;
