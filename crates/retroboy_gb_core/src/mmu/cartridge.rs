//! Cartridge capability and the stock mappers.
//!
//! [`AddressSpace`](super::AddressSpace) only ever talks to a cartridge
//! through the [`Cartridge`] trait, so tests can plug in a fixed pattern ROM
//! without any banking logic.

mod mbc1;
mod mbc5;
mod rom_only;

use anyhow::{bail, ensure, Context};

pub use mbc1::Mbc1;
pub use mbc5::Mbc5;
pub use rom_only::RomOnly;

pub const ROM_BANK_SIZE: usize = 0x4000;
pub const RAM_BANK_SIZE: usize = 0x2000;

const CART_TYPE_ADDR: usize = 0x0147;
const RAM_SIZE_ADDR: usize = 0x0149;
const HEADER_END: usize = 0x0150;

/// Cartridge ROM/RAM as seen from the bus.
///
/// Calls are synchronous: each one completes before the next access is
/// issued. Invalid bank selections are the cartridge's own business (wrap or
/// clamp); none of these calls can fail.
pub trait Cartridge {
    /// Read from cartridge ROM (0x0000-0x7FFF) or cartridge RAM
    /// (0xA000-0xBFFF).
    fn read(&self, addr: u16) -> u8;

    /// Write to 0x0000-0x7FFF. This never changes ROM contents; mappers
    /// decode it as a bank control command.
    fn write_rom(&mut self, addr: u16, value: u8);

    /// Write to cartridge RAM at 0xA000-0xBFFF.
    fn write_ram(&mut self, addr: u16, value: u8);
}

/// Build the cartridge described by the header of `rom`.
pub fn from_rom(rom: &[u8]) -> anyhow::Result<Box<dyn Cartridge>> {
    ensure!(
        rom.len() >= HEADER_END,
        "ROM too small for a cartridge header: {} bytes",
        rom.len()
    );
    ensure!(
        rom.len() % ROM_BANK_SIZE == 0,
        "ROM size {} is not a whole number of 16 KiB banks",
        rom.len()
    );

    let cart_type = rom[CART_TYPE_ADDR];
    let ram_banks = ram_banks_from_header(rom[RAM_SIZE_ADDR]);

    let cartridge: Box<dyn Cartridge> = match cart_type {
        0x00 => Box::new(RomOnly::new(rom, 0).context("ROM-only cartridge")?),
        0x08 | 0x09 => Box::new(RomOnly::new(rom, ram_banks.max(1)).context("ROM+RAM cartridge")?),
        0x01 => Box::new(Mbc1::new(rom, 0)),
        0x02 | 0x03 => Box::new(Mbc1::new(rom, ram_banks)),
        0x19 | 0x1C => Box::new(Mbc5::new(rom, 0)),
        0x1A | 0x1B | 0x1D | 0x1E => Box::new(Mbc5::new(rom, ram_banks)),
        other => bail!("unsupported cartridge type 0x{:02X}", other),
    };

    log::info!(
        "cartridge type 0x{:02X}: {} ROM banks, {} RAM banks",
        cart_type,
        rom.len() / ROM_BANK_SIZE,
        ram_banks
    );
    Ok(cartridge)
}

/// Number of 8 KiB RAM banks declared by header byte 0x0149.
///
/// The 2 KiB size is rounded up to one full bank.
fn ram_banks_from_header(code: u8) -> usize {
    match code {
        0x00 => 0,
        0x01 | 0x02 => 1,
        0x03 => 4,
        0x04 => 16,
        0x05 => 8,
        other => {
            log::warn!("unknown RAM size code 0x{:02X}, assuming no RAM", other);
            0
        }
    }
}

/// Byte `addr & 0x3FFF` of ROM bank `bank`, or 0xFF past the end of the
/// image.
#[inline]
fn rom_byte(rom: &[u8], bank: usize, addr: u16) -> u8 {
    let index = bank * ROM_BANK_SIZE + (addr as usize & (ROM_BANK_SIZE - 1));
    rom.get(index).copied().unwrap_or(0xFF)
}

/// Index into a flat RAM image for `addr` in 0xA000-0xBFFF.
#[inline]
fn ram_index(bank: usize, addr: u16) -> usize {
    bank * RAM_BANK_SIZE + (addr.wrapping_sub(0xA000) as usize & (RAM_BANK_SIZE - 1))
}
