use super::map::UNMAPPED;
use super::AddressSpace;

pub(super) const IO_START: u16 = 0xFF00;
pub(super) const IO_END: u16 = 0xFF7F;
pub(super) const HRAM_START: u16 = 0xFF80;
pub(super) const HRAM_END: u16 = 0xFFFE;
pub(super) const IE_ADDR: u16 = 0xFFFF;

/// VRAM bank select (CGB).
pub(super) const VBK: u16 = 0xFF4F;
/// Boot ROM unmap latch.
pub(super) const BOOT: u16 = 0xFF50;
/// WRAM bank select (CGB).
pub(super) const SVBK: u16 = 0xFF70;

impl AddressSpace {
    /// I/O registers, high RAM and IE (0xFF00-0xFFFF).
    pub(super) fn read_high(&self, addr: u16) -> u8 {
        match addr {
            // Unused bits of the bank registers read back as 1.
            VBK => self.banks.vram_bank() | 0xFE,
            SVBK => self.banks.wram_bank() | 0xF8,
            BOOT => {
                if self.boot_rom_mapped {
                    0xFE
                } else {
                    0xFF
                }
            }
            IO_START..=IO_END => self.io[(addr - IO_START) as usize],
            HRAM_START..=HRAM_END => self.hram[(addr - HRAM_START) as usize],
            IE_ADDR => self.ie,
            // Not high memory; the caller only routes 0xFF00-0xFFFF here.
            0x0000..=0xFEFF => UNMAPPED,
        }
    }

    pub(super) fn write_high(&mut self, addr: u16, value: u8) {
        match addr {
            VBK => self.banks.select_vram_bank(value),
            SVBK => self.banks.select_wram_bank(value),
            BOOT => {
                // Unmapping is one-way until the next power cycle.
                if value != 0 && self.boot_rom_mapped {
                    log::debug!("boot ROM unmapped");
                    self.boot_rom_mapped = false;
                }
            }
            IO_START..=IO_END => self.io[(addr - IO_START) as usize] = value,
            HRAM_START..=HRAM_END => self.hram[(addr - HRAM_START) as usize] = value,
            IE_ADDR => self.ie = value,
            0x0000..=0xFEFF => {}
        }
    }
}
