use super::map::{VRAM_START, WRAM_BANKED_START};

pub const VRAM_BANK_SIZE: usize = 0x2000;
pub const VRAM_BANKS: usize = 2;
pub const WRAM_BANK_SIZE: usize = 0x1000;
pub const WRAM_BANKS: usize = 8;

/// Active video RAM and work RAM banks.
///
/// Only the high memory write path (VBK at 0xFF4F, SVBK at 0xFF70) changes
/// these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BankSelector {
    vram: u8,
    wram: u8,
}

impl Default for BankSelector {
    fn default() -> Self {
        Self { vram: 0, wram: 1 }
    }
}

impl BankSelector {
    /// Video RAM bank visible at 0x8000-0x9FFF (0 or 1).
    #[inline]
    pub fn vram_bank(&self) -> u8 {
        self.vram
    }

    /// Work RAM bank visible at 0xD000-0xDFFF (1-7).
    #[inline]
    pub fn wram_bank(&self) -> u8 {
        self.wram
    }

    pub(super) fn select_vram_bank(&mut self, value: u8) {
        let bank = value & 0x01;
        if bank != self.vram {
            log::debug!("VRAM bank {} -> {}", self.vram, bank);
        }
        self.vram = bank;
    }

    /// SVBK only decodes three bits, and bank 0 selects bank 1 since bank 0
    /// is always mapped at 0xC000.
    pub(super) fn select_wram_bank(&mut self, value: u8) {
        let bank = (value & 0x07).max(1);
        if bank != self.wram {
            log::debug!("WRAM bank {} -> {}", self.wram, bank);
        }
        self.wram = bank;
    }

    /// Offset into the video RAM store for `addr` in 0x8000-0x9FFF.
    #[inline]
    pub fn vram_offset(&self, addr: u16) -> usize {
        debug_assert!((0x8000..=0x9FFF).contains(&addr));
        (addr - VRAM_START) as usize + self.vram as usize * VRAM_BANK_SIZE
    }

    /// Offset into the work RAM store for `addr` in 0xD000-0xDFFF.
    #[inline]
    pub fn wram_offset(&self, addr: u16) -> usize {
        debug_assert!((0xD000..=0xDFFF).contains(&addr));
        (addr - WRAM_BANKED_START) as usize + self.wram as usize * WRAM_BANK_SIZE
    }
}
