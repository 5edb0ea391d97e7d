use super::{ram_index, rom_byte, Cartridge, RAM_BANK_SIZE, ROM_BANK_SIZE};

/// MBC5 mapper: 9-bit ROM bank number, 4-bit RAM bank number.
///
/// Unlike MBC1, bank 0 can be mapped at 0x4000-0x7FFF. Rumble is not
/// modelled.
pub struct Mbc5 {
    rom: Vec<u8>,
    ram: Vec<u8>,
    rom_banks: usize,
    ram_banks: usize,
    rom_bank_low8: u8,
    rom_bank_high1: u8,
    ram_bank: u8,
    ram_enabled: bool,
}

impl Mbc5 {
    pub fn new(rom: &[u8], ram_banks: usize) -> Self {
        Self {
            rom: rom.to_vec(),
            ram: vec![0xFF; ram_banks * RAM_BANK_SIZE],
            rom_banks: (rom.len() / ROM_BANK_SIZE).max(1),
            ram_banks,
            rom_bank_low8: 1,
            rom_bank_high1: 0,
            ram_bank: 0,
            ram_enabled: false,
        }
    }

    fn requested_rom_bank(&self) -> usize {
        ((self.rom_bank_high1 as usize) << 8) | self.rom_bank_low8 as usize
    }

    pub fn rom_bank(&self) -> usize {
        self.requested_rom_bank() % self.rom_banks
    }

    pub fn ram_bank(&self) -> usize {
        (self.ram_bank as usize).min(self.ram_banks.saturating_sub(1))
    }

    fn ram_slot(&self, addr: u16) -> Option<usize> {
        if !self.ram_enabled || self.ram_banks == 0 {
            return None;
        }
        Some(ram_index(self.ram_bank(), addr))
    }

    fn warn_if_rom_bank_wraps(&self) {
        let requested = self.requested_rom_bank();
        if requested >= self.rom_banks {
            log::warn!(
                "MBC5 ROM bank {} selected with only {} banks, wrapping",
                requested,
                self.rom_banks
            );
        }
    }
}

impl Cartridge for Mbc5 {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x3FFF => rom_byte(&self.rom, 0, addr),
            0x4000..=0x7FFF => rom_byte(&self.rom, self.rom_bank(), addr),
            0xA000..=0xBFFF => self
                .ram_slot(addr)
                .and_then(|i| self.ram.get(i).copied())
                .unwrap_or(0xFF),
            _ => 0xFF,
        }
    }

    fn write_rom(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => {
                self.ram_enabled = (value & 0x0F) == 0x0A;
            }
            0x2000..=0x2FFF => {
                self.rom_bank_low8 = value;
                self.warn_if_rom_bank_wraps();
            }
            0x3000..=0x3FFF => {
                self.rom_bank_high1 = value & 0x01;
                self.warn_if_rom_bank_wraps();
            }
            0x4000..=0x5FFF => {
                self.ram_bank = value & 0x0F;
                if self.ram_banks != 0 && self.ram_bank as usize >= self.ram_banks {
                    log::warn!(
                        "MBC5 RAM bank {} selected with only {} banks, clamping",
                        self.ram_bank,
                        self.ram_banks
                    );
                }
            }
            _ => {}
        }
    }

    fn write_ram(&mut self, addr: u16, value: u8) {
        if let Some(i) = self.ram_slot(addr) {
            if let Some(slot) = self.ram.get_mut(i) {
                *slot = value;
            }
        }
    }
}
