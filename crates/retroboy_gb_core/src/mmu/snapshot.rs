use super::AddressSpace;

/// Owned copy of everything [`AddressSpace`] stores itself.
///
/// The emulation thread owns the live address space; anything running
/// elsewhere (a renderer, a debugger) reads one of these instead. Cartridge
/// state is not included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemorySnapshot {
    /// Both video RAM banks, bank 0 first.
    pub vram: Vec<u8>,
    /// All eight work RAM banks, bank 0 first.
    pub wram: Vec<u8>,
    pub oam: Vec<u8>,
    pub io: Vec<u8>,
    pub hram: Vec<u8>,
    pub ie: u8,
    pub vram_bank: u8,
    pub wram_bank: u8,
    pub boot_rom_mapped: bool,
}

impl AddressSpace {
    pub fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            vram: self.vram.to_vec(),
            wram: self.wram.to_vec(),
            oam: self.oam.to_vec(),
            io: self.io.to_vec(),
            hram: self.hram.to_vec(),
            ie: self.ie,
            vram_bank: self.banks.vram_bank(),
            wram_bank: self.banks.wram_bank(),
            boot_rom_mapped: self.boot_rom_mapped,
        }
    }
}
