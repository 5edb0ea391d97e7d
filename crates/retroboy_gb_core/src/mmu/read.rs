use super::map::{Region, OAM_START, UNMAPPED, WRAM_FIXED_START};
use super::{AddressSpace, CGB_BOOT_ROM_SIZE};

impl AddressSpace {
    /// Read one byte. Total over the whole address space.
    pub fn read8(&self, addr: u16) -> u8 {
        match Region::of(addr) {
            Region::CartridgeRom => match self.boot_rom_read(addr) {
                Some(value) => value,
                None => self.cartridge.read(addr),
            },
            Region::VideoRam => self.vram[self.banks.vram_offset(addr)],
            Region::CartridgeRam => self.cartridge.read(addr),
            Region::WorkRamFixed => self.wram[(addr - WRAM_FIXED_START) as usize],
            Region::WorkRamBanked => self.wram[self.banks.wram_offset(addr)],
            Region::Echo => UNMAPPED,
            Region::Oam => self.oam[(addr - OAM_START) as usize],
            Region::Unusable => UNMAPPED,
            Region::High => self.read_high(addr),
        }
    }

    /// Byte from the boot ROM overlay, or `None` when `addr` falls through
    /// to the cartridge.
    fn boot_rom_read(&self, addr: u16) -> Option<u8> {
        if !self.boot_rom_mapped {
            return None;
        }
        let image = self.boot_rom.as_deref()?;
        let overlaid = addr < 0x0100
            || (image.len() == CGB_BOOT_ROM_SIZE && (0x0200..0x0900).contains(&addr));
        if overlaid {
            image.get(addr as usize).copied()
        } else {
            None
        }
    }
}
