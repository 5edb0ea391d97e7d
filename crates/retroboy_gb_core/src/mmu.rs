mod banks;
pub mod cartridge;
mod config;
mod high;
mod init;
pub mod map;
mod read;
mod snapshot;
mod write;

use anyhow::{ensure, Context};

pub use banks::BankSelector;
pub use cartridge::Cartridge;
pub use config::{MmuConfig, RamFill};
pub use map::Region;
pub use snapshot::MemorySnapshot;

use banks::{VRAM_BANKS, VRAM_BANK_SIZE, WRAM_BANKS, WRAM_BANK_SIZE};

use crate::cpu::Bus;

const VRAM_SIZE: usize = VRAM_BANK_SIZE * VRAM_BANKS;
const WRAM_SIZE: usize = WRAM_BANK_SIZE * WRAM_BANKS;
const OAM_SIZE: usize = 0xA0;
const IO_SIZE: usize = 0x80;
const HRAM_SIZE: usize = 0x7F;

pub const DMG_BOOT_ROM_SIZE: usize = 0x100;
pub const CGB_BOOT_ROM_SIZE: usize = 0x900;

/// The CPU-visible 64 KiB address space.
///
/// Owns video RAM, work RAM, OAM, the I/O register file, high RAM and the
/// optional boot ROM. Cartridge ROM and RAM are reached through the
/// [`Cartridge`] capability.
pub struct AddressSpace {
    cartridge: Box<dyn Cartridge>,
    boot_rom: Option<Vec<u8>>,
    boot_rom_mapped: bool,
    vram: [u8; VRAM_SIZE],
    wram: [u8; WRAM_SIZE],
    oam: [u8; OAM_SIZE],
    io: [u8; IO_SIZE],
    hram: [u8; HRAM_SIZE],
    ie: u8,
    banks: BankSelector,
}

impl AddressSpace {
    /// Address space in its power-up state with zeroed RAM and no boot ROM.
    pub fn new(cartridge: Box<dyn Cartridge>) -> Self {
        let mut space = Self::blank(cartridge);
        space.apply_power_up_state(RamFill::Zero);
        space
    }

    pub fn with_config(cartridge: Box<dyn Cartridge>, config: MmuConfig) -> anyhow::Result<Self> {
        let mut space = Self::blank(cartridge);
        space.apply_power_up_state(config.ram_fill);
        if let Some(image) = config.boot_rom {
            space
                .load_boot_rom(&image)
                .context("invalid boot ROM in MMU config")?;
        }
        Ok(space)
    }

    fn blank(cartridge: Box<dyn Cartridge>) -> Self {
        Self {
            cartridge,
            boot_rom: None,
            boot_rom_mapped: false,
            vram: [0; VRAM_SIZE],
            wram: [0; WRAM_SIZE],
            oam: [0; OAM_SIZE],
            io: [0; IO_SIZE],
            hram: [0; HRAM_SIZE],
            ie: 0,
            banks: BankSelector::default(),
        }
    }

    /// Map a boot ROM image over the start of cartridge ROM.
    ///
    /// A 256-byte DMG image covers 0x0000-0x00FF. A 2304-byte CGB image
    /// additionally covers 0x0200-0x08FF, leaving the cartridge header
    /// visible. The overlay stays until a non-zero write to 0xFF50.
    pub fn load_boot_rom(&mut self, image: &[u8]) -> anyhow::Result<()> {
        ensure!(
            matches!(image.len(), DMG_BOOT_ROM_SIZE | CGB_BOOT_ROM_SIZE),
            "boot ROM must be {} or {} bytes, got {}",
            DMG_BOOT_ROM_SIZE,
            CGB_BOOT_ROM_SIZE,
            image.len()
        );
        self.boot_rom = Some(image.to_vec());
        self.boot_rom_mapped = true;
        log::debug!("boot ROM mapped ({} bytes)", image.len());
        Ok(())
    }

    #[inline]
    pub fn boot_rom_mapped(&self) -> bool {
        self.boot_rom_mapped
    }

    #[inline]
    pub fn banks(&self) -> BankSelector {
        self.banks
    }

    #[inline]
    pub fn vram_bank(&self) -> u8 {
        self.banks.vram_bank()
    }

    #[inline]
    pub fn wram_bank(&self) -> u8 {
        self.banks.wram_bank()
    }

    pub fn cartridge(&self) -> &dyn Cartridge {
        &*self.cartridge
    }

    pub fn cartridge_mut(&mut self) -> &mut dyn Cartridge {
        &mut *self.cartridge
    }
}

impl Bus for AddressSpace {
    fn read8(&mut self, addr: u16) -> u8 {
        AddressSpace::read8(self, addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        AddressSpace::write8(self, addr, value)
    }
}

#[cfg(test)]
mod tests;
