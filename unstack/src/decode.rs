//! The decode pipeline: fetch a thread's saved frame from target
//! memory, extract each canonical register, then run the descriptor's
//! fixups over the decoded values.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use log::{debug, error};
use unstack_types::{
    CanonicalFrame, Endian, Fixup, ReadStrategy, RegIdx, RegSlot, RegVal, StackGrowth, Stacking,
};

use crate::error::DecodeError;
use crate::memory::{SymbolLookup, TargetMemory};

type Result<T> = std::result::Result<T, DecodeError>;

/// Offset-table entry meaning "register not saved by this build".
const OFFSET_TABLE_SENTINEL: u16 = u16::MAX;

/// Decode one thread's saved context at `stack_ptr` into a canonical
/// frame. Stateless; every call re-reads everything it needs, including
/// any firmware offset table.
pub fn decode(
    stack_ptr: u64,
    stacking: &Stacking,
    mem: &mut dyn TargetMemory,
    symbols: &dyn SymbolLookup,
) -> Result<CanonicalFrame> {
    let mut frame = CanonicalFrame::unavailable(stacking.num_regs());

    match stacking.read {
        ReadStrategy::Contiguous => read_contiguous(stack_ptr, stacking, mem, &mut frame)?,
        ReadStrategy::TcbOffsetTable { symbol } => {
            read_offset_table(stack_ptr, symbol, stacking, mem, symbols, &mut frame)?
        }
    }

    apply_fixups(stacking, &mut frame);
    Ok(frame)
}

/// The SP value the thread resumes with once its frame is popped,
/// optionally realigned per the descriptor. Rounding down would move a
/// downward-growing SP back into the frame, so round up instead there.
fn process_stack_ptr(stack_ptr: u64, stacking: &Stacking) -> u64 {
    let raw = stack_ptr
        .wrapping_add_signed(-stacking.growth.direction() * i64::from(stacking.frame_size));
    match stacking.process_stack_align {
        Some(align) => {
            let aligned = raw & !(align - 1);
            if aligned != raw && stacking.growth == StackGrowth::Down {
                aligned + align
            } else {
                aligned
            }
        }
        None => raw,
    }
}

fn extract(endian: Endian, bytes: &[u8], width_bits: u16) -> u64 {
    let n = usize::from(width_bits / 8);
    match endian {
        Endian::Little => LittleEndian::read_uint(&bytes[..n], n),
        Endian::Big => BigEndian::read_uint(&bytes[..n], n),
    }
}

/// Fixed-offset path: one read of the whole frame, then per-slot
/// extraction. Absent slots are never touched.
fn read_contiguous(
    stack_ptr: u64,
    stacking: &Stacking,
    mem: &mut dyn TargetMemory,
    frame: &mut CanonicalFrame,
) -> Result<()> {
    // On an upward-growing stack the frame lies below the stack pointer.
    let frame_addr = match stacking.growth {
        StackGrowth::Up => stack_ptr.wrapping_sub(u64::from(stacking.frame_size)),
        StackGrowth::Down => stack_ptr,
    };

    let mut raw = vec![0u8; stacking.frame_size as usize];
    mem.read_bytes(frame_addr, &mut raw).map_err(|source| {
        error!("stack frame read failed at {:#x}: {}", frame_addr, source);
        DecodeError::MemoryReadFailed {
            what: "stack frame",
            addr: frame_addr,
            len: raw.len(),
            source,
        }
    })?;
    debug!(
        "read {} byte frame at {:#x} ({} canonical registers)",
        stacking.frame_size,
        frame_addr,
        stacking.num_regs()
    );

    let psp = process_stack_ptr(stack_ptr, stacking);
    for (i, reg) in stacking.regs.iter().enumerate() {
        let idx = RegIdx::from_usize(i);
        match reg.slot {
            RegSlot::Present { offset, width_bits } => {
                let value = extract(stacking.endian, &raw[offset as usize..], width_bits);
                frame.set(idx, RegVal::bits(value, width_bits));
            }
            RegSlot::LinkedToStackPointer { width_bits } => {
                frame.set(idx, RegVal::bits(psp, width_bits));
            }
            RegSlot::Absent => {}
        }
    }
    Ok(())
}

/// Dynamic path: the firmware publishes a table of one u16 frame offset
/// per canonical register (the offsets move between RTOS releases and
/// build configurations, so they cannot be baked in). Each saved
/// register is fetched with its own scattered read at
/// `stack_ptr + table[i]`; a sentinel entry or an absent static slot
/// leaves the register unavailable without any frame read.
fn read_offset_table(
    stack_ptr: u64,
    symbol: &'static str,
    stacking: &Stacking,
    mem: &mut dyn TargetMemory,
    symbols: &dyn SymbolLookup,
    frame: &mut CanonicalFrame,
) -> Result<()> {
    let table_addr = symbols
        .address_of(symbol)
        .ok_or(DecodeError::SymbolNotFound(symbol))?;
    debug!("register offset table {} at {:#x}", symbol, table_addr);

    let psp = process_stack_ptr(stack_ptr, stacking);
    for (i, reg) in stacking.regs.iter().enumerate() {
        let idx = RegIdx::from_usize(i);
        let entry_addr = table_addr + 2 * i as u64;
        let stack_off = mem.read_u16(entry_addr).map_err(|source| {
            error!("offset table entry for {} unreadable: {}", reg.name, source);
            DecodeError::MemoryReadFailed {
                what: reg.name,
                addr: entry_addr,
                len: 2,
                source,
            }
        })?;

        match reg.slot {
            RegSlot::Present { width_bits, .. } if stack_off != OFFSET_TABLE_SENTINEL => {
                let n = usize::from(width_bits / 8);
                let reg_addr = stack_ptr.wrapping_add(u64::from(stack_off));
                let mut buf = [0u8; 8];
                mem.read_bytes(reg_addr, &mut buf[..n]).map_err(|source| {
                    error!("read of {} at {:#x} failed: {}", reg.name, reg_addr, source);
                    DecodeError::MemoryReadFailed {
                        what: reg.name,
                        addr: reg_addr,
                        len: n,
                        source,
                    }
                })?;
                frame.set(idx, RegVal::bits(extract(stacking.endian, &buf, width_bits), width_bits));
            }
            RegSlot::LinkedToStackPointer { width_bits } => {
                frame.set(idx, RegVal::bits(psp, width_bits));
            }
            // Sentinel entry or never-saved register: stays unavailable.
            _ => {}
        }
    }
    Ok(())
}

/// Pure value transforms over the decoded frame, in descriptor order.
/// A fixup whose registers are unavailable is a no-op.
fn apply_fixups(stacking: &Stacking, frame: &mut CanonicalFrame) {
    for fixup in stacking.fixups {
        match *fixup {
            Fixup::RealignSp {
                psr,
                pad_flag_bit,
                sp,
            } => {
                let pad_inserted = match frame.get(psr).value() {
                    Some(v) => v & (1 << pad_flag_bit) != 0,
                    None => false,
                };
                if !pad_inserted {
                    continue;
                }
                if let RegVal::Bits { value, width_bits } = frame.get(sp) {
                    let adjusted = value.wrapping_add_signed(4 * stacking.growth.direction());
                    frame.set(sp, RegVal::bits(adjusted, width_bits));
                }
            }
            Fixup::ClearPsrBits { psr, mask } => {
                if let RegVal::Bits { value, width_bits } = frame.get(psr) {
                    frame.set(psr, RegVal::Bits {
                        value: value & !mask,
                        width_bits,
                    });
                }
            }
        }
    }
}
