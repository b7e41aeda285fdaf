use unstack_types::Stacking;

use crate::error::DecodeError;
use crate::tables;

/// Target-name to stacking map, one entry per supported core. New
/// architectures get a new descriptor here, never a new branch in the
/// decode path.
static STACKINGS: [(&str, &Stacking); 8] = [
    ("cortex_m", &tables::cortex_m::NUTTX_CORTEX_M),
    ("hla_target", &tables::cortex_m::NUTTX_CORTEX_M),
    ("esp32", &tables::xtensa::NUTTX_ESP32),
    ("esp32s2", &tables::xtensa::NUTTX_ESP32S2),
    ("esp32s3", &tables::xtensa::NUTTX_ESP32S3),
    ("riscv", &tables::riscv::NUTTX_RISCV),
    ("esp32c3", &tables::riscv::NUTTX_RISCV),
    ("esp32c6", &tables::riscv::NUTTX_RISCV),
];

pub fn stacking_for_target(name: &str) -> Result<&'static Stacking, DecodeError> {
    STACKINGS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, s)| *s)
        .ok_or_else(|| DecodeError::UnsupportedVariant(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use unstack_types::{Fixup, RegSlot};

    use super::*;

    #[test]
    fn unknown_target_is_unsupported() {
        assert_eq!(
            stacking_for_target("avr").unwrap_err(),
            DecodeError::UnsupportedVariant("avr".into())
        );
    }

    #[test]
    fn known_targets_resolve() {
        assert_eq!(stacking_for_target("cortex_m").unwrap().num_regs(), 17);
        assert_eq!(stacking_for_target("esp32").unwrap().num_regs(), 105);
        assert_eq!(stacking_for_target("esp32s2").unwrap().num_regs(), 73);
        assert_eq!(stacking_for_target("esp32s3").unwrap().num_regs(), 128);
        assert_eq!(stacking_for_target("riscv").unwrap().num_regs(), 33);
    }

    // Every registered descriptor satisfies the layout invariants the
    // decoder relies on.
    #[test]
    fn descriptor_invariants() {
        for (name, stacking) in &STACKINGS {
            assert!(!stacking.regs.is_empty(), "{}", name);
            for r in stacking.regs {
                if let RegSlot::Present { offset, width_bits } = r.slot {
                    assert!(width_bits % 8 == 0 && width_bits <= 64, "{}/{}", name, r.name);
                    assert!(
                        offset + u32::from(width_bits / 8) <= stacking.frame_size,
                        "{}/{} overruns the frame",
                        name,
                        r.name
                    );
                }
            }
            for f in stacking.fixups {
                let (psr, sp) = match *f {
                    Fixup::RealignSp { psr, sp, .. } => (psr, Some(sp)),
                    Fixup::ClearPsrBits { psr, .. } => (psr, None),
                };
                assert!(psr.index() < stacking.num_regs(), "{}", name);
                if let Some(sp) = sp {
                    assert!(sp.index() < stacking.num_regs(), "{}", name);
                }
            }
        }
    }
}
