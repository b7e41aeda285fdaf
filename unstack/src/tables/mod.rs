//! Per-architecture stacking descriptors. Pure data: the decode path
//! never branches on architecture, it only follows these tables.

pub mod cortex_m;
pub mod riscv;
pub mod xtensa;
