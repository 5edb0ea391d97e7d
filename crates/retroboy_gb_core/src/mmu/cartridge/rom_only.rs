use anyhow::ensure;

use super::{ram_index, rom_byte, Cartridge, RAM_BANK_SIZE, ROM_BANK_SIZE};

/// Cartridge without a mapper: at most 32 KiB of ROM mapped flat, plus an
/// optional single bank of RAM.
pub struct RomOnly {
    rom: Vec<u8>,
    ram: Vec<u8>,
}

impl RomOnly {
    pub fn new(rom: &[u8], ram_banks: usize) -> anyhow::Result<Self> {
        ensure!(
            rom.len() <= 2 * ROM_BANK_SIZE,
            "ROM-only image is {} bytes, at most 32 KiB fits without a mapper",
            rom.len()
        );
        // Without a mapper there is no way to select a second RAM bank.
        let ram_bytes = ram_banks.min(1) * RAM_BANK_SIZE;
        Ok(Self {
            rom: rom.to_vec(),
            ram: vec![0; ram_bytes],
        })
    }
}

impl Cartridge for RomOnly {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x3FFF => rom_byte(&self.rom, 0, addr),
            0x4000..=0x7FFF => rom_byte(&self.rom, 1, addr),
            0xA000..=0xBFFF => self.ram.get(ram_index(0, addr)).copied().unwrap_or(0xFF),
            _ => 0xFF,
        }
    }

    fn write_rom(&mut self, _addr: u16, _value: u8) {}

    fn write_ram(&mut self, addr: u16, value: u8) {
        if let Some(slot) = self.ram.get_mut(ram_index(0, addr)) {
            *slot = value;
        }
    }
}
