use thiserror::Error;

use crate::memory::MemoryError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("no stacking descriptor for target \"{0}\"")]
    UnsupportedVariant(String),
    /// A read to the target failed. `what` names the register or
    /// structure the read was for; a decode fails atomically, so no
    /// partial frame escapes alongside this.
    #[error("failed to read {what} ({len} bytes at {addr:#x})")]
    MemoryReadFailed {
        what: &'static str,
        addr: u64,
        len: usize,
        #[source]
        source: MemoryError,
    },
    #[error("symbol {0} not found")]
    SymbolNotFound(&'static str),
}
