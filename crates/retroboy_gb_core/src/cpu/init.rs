use super::{Cpu, Registers};
use crate::ENTRY_POINT;

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Power-up state: every register pair zero, PC at the cartridge entry.
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
        };
        cpu.regs.pc = ENTRY_POINT;
        cpu
    }

    /// CPU with the registers the DMG boot ROM leaves behind when it jumps
    /// to 0x0100.
    ///
    /// These values follow common emulator conventions and are based on
    /// hardware tests (as documented in Pan Docs).
    pub fn post_boot() -> Self {
        let mut cpu = Self::new();
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Reset the CPU to the state returned by [`Cpu::new`].
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn apply_dmg_boot_state(&mut self) {
        self.regs.af.set(0x01B0); // Z, N, H, C = 1,0,1,1
        self.regs.bc.set(0x0013);
        self.regs.de.set(0x00D8);
        self.regs.hl.set(0x014D);
        self.regs.sp.set(0xFFFE);
        self.regs.pc = ENTRY_POINT;
    }
}
