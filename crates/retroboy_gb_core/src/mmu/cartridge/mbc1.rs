use super::{ram_index, rom_byte, Cartridge, RAM_BANK_SIZE, ROM_BANK_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BankingMode {
    /// Mode 0: 0x0000-0x3FFF is always bank 0, RAM is always bank 0.
    Simple,
    /// Mode 1: the two high bits also bank 0x0000-0x3FFF and cartridge RAM.
    Advanced,
}

/// MBC1 mapper.
///
/// ROM banking via the 5-bit bank register plus two high bits, external RAM
/// with enable latch and banking in mode 1. Battery persistence is not
/// modelled.
pub struct Mbc1 {
    rom: Vec<u8>,
    ram: Vec<u8>,
    rom_banks: usize,
    ram_banks: usize,
    bank_low5: u8,
    bank_high2: u8,
    ram_enabled: bool,
    mode: BankingMode,
}

impl Mbc1 {
    pub fn new(rom: &[u8], ram_banks: usize) -> Self {
        Self {
            rom: rom.to_vec(),
            ram: vec![0xFF; ram_banks * RAM_BANK_SIZE],
            rom_banks: (rom.len() / ROM_BANK_SIZE).max(1),
            ram_banks,
            bank_low5: 1,
            bank_high2: 0,
            ram_enabled: false,
            mode: BankingMode::Simple,
        }
    }

    /// Bank mapped at 0x4000-0x7FFF. A zero low register selects 1.
    pub fn rom_bank(&self) -> usize {
        let low = (self.bank_low5 & 0x1F).max(1) as usize;
        (((self.bank_high2 as usize) << 5) | low) % self.rom_banks
    }

    fn low_rom_bank(&self) -> usize {
        match self.mode {
            BankingMode::Simple => 0,
            BankingMode::Advanced => ((self.bank_high2 as usize) << 5) % self.rom_banks,
        }
    }

    pub fn ram_bank(&self) -> usize {
        match self.mode {
            BankingMode::Simple => 0,
            BankingMode::Advanced => {
                (self.bank_high2 as usize).min(self.ram_banks.saturating_sub(1))
            }
        }
    }

    fn ram_slot(&self, addr: u16) -> Option<usize> {
        if !self.ram_enabled || self.ram_banks == 0 {
            return None;
        }
        Some(ram_index(self.ram_bank(), addr))
    }
}

impl Cartridge for Mbc1 {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x3FFF => rom_byte(&self.rom, self.low_rom_bank(), addr),
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
                // RAM enable: lower 4 bits must be 0x0A.
                self.ram_enabled = (value & 0x0F) == 0x0A;
            }
            0x2000..=0x3FFF => {
                self.bank_low5 = value & 0x1F;
                let requested = ((self.bank_high2 as usize) << 5) | (self.bank_low5.max(1) as usize);
                if requested >= self.rom_banks {
                    log::warn!(
                        "MBC1 ROM bank {} selected with only {} banks, wrapping",
                        requested,
                        self.rom_banks
                    );
                }
            }
            0x4000..=0x5FFF => {
                // ROM bank high bits / RAM bank index.
                self.bank_high2 = value & 0x03;
                if self.mode == BankingMode::Advanced
                    && self.ram_banks != 0
                    && self.bank_high2 as usize >= self.ram_banks
                {
                    log::warn!(
                        "MBC1 RAM bank {} selected with only {} banks, clamping",
                        self.bank_high2,
                        self.ram_banks
                    );
                }
            }
            0x6000..=0x7FFF => {
                self.mode = if value & 0x01 == 0 {
                    BankingMode::Simple
                } else {
                    BankingMode::Advanced
                };
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
