use thiserror::Error;

/// Failure reported by the target-memory collaborator. The decoder
/// never retries; it wraps this with register context and propagates.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("target memory access failed ({len} bytes at {addr:#x})")]
pub struct MemoryError {
    pub addr: u64,
    pub len: usize,
}

/// Blocking reads from halted-target memory. Implementations own all
/// transport, retry, and timeout policy; the fixed-width reads honor
/// the target's byte order.
pub trait TargetMemory {
    fn read_bytes(&mut self, addr: u64, buf: &mut [u8]) -> Result<(), MemoryError>;

    fn read_u16(&mut self, addr: u64) -> Result<u16, MemoryError>;

    fn read_u32(&mut self, addr: u64) -> Result<u32, MemoryError>;
}

/// Host-side symbol resolution, used only to locate a firmware-provided
/// register offset table.
pub trait SymbolLookup {
    fn address_of(&self, name: &str) -> Option<u64>;
}

/// For fixed-offset stackings that never consult a symbol.
pub struct NoSymbols;

impl SymbolLookup for NoSymbols {
    fn address_of(&self, _name: &str) -> Option<u64> {
        None
    }
}
