use super::map::{Region, OAM_START, WRAM_FIXED_START};
use super::AddressSpace;

impl AddressSpace {
    /// Write one byte. Total over the whole address space; regions without
    /// a backing store drop the write.
    pub fn write8(&mut self, addr: u16, value: u8) {
        match Region::of(addr) {
            // Cartridge ROM is read-only from the CPU's point of view; writes
            // are interpreted by the cartridge's mapper as bank control.
            Region::CartridgeRom => self.cartridge.write_rom(addr, value),
            Region::VideoRam => {
                let offset = self.banks.vram_offset(addr);
                self.vram[offset] = value;
            }
            Region::CartridgeRam => self.cartridge.write_ram(addr, value),
            Region::WorkRamFixed => self.wram[(addr - WRAM_FIXED_START) as usize] = value,
            Region::WorkRamBanked => {
                let offset = self.banks.wram_offset(addr);
                self.wram[offset] = value;
            }
            // Echo RAM is not mirrored.
            Region::Echo => {
                log::trace!("dropped echo RAM write 0x{:02X} -> 0x{:04X}", value, addr);
            }
            Region::Oam => self.oam[(addr - OAM_START) as usize] = value,
            Region::Unusable => {
                log::trace!("dropped unusable-area write 0x{:02X} -> 0x{:04X}", value, addr);
            }
            Region::High => self.write_high(addr, value),
        }
    }
}
