//! Memory map boundaries.
//!
//! The 64 KiB address space is split into disjoint regions listed in
//! ascending order. Moving a boundary means editing the constants here; both
//! the read and the write path dispatch through [`Region::of`].

pub const ROM_START: u16 = 0x0000;
pub const ROM_END: u16 = 0x7FFF;
pub const VRAM_START: u16 = 0x8000;
pub const VRAM_END: u16 = 0x9FFF;
pub const CART_RAM_START: u16 = 0xA000;
pub const CART_RAM_END: u16 = 0xBFFF;
pub const WRAM_FIXED_START: u16 = 0xC000;
pub const WRAM_FIXED_END: u16 = 0xCFFF;
pub const WRAM_BANKED_START: u16 = 0xD000;
pub const WRAM_BANKED_END: u16 = 0xDFFF;
pub const ECHO_START: u16 = 0xE000;
pub const ECHO_END: u16 = 0xFDFF;
pub const OAM_START: u16 = 0xFE00;
pub const OAM_END: u16 = 0xFE9F;
pub const UNUSABLE_START: u16 = 0xFEA0;
pub const UNUSABLE_END: u16 = 0xFEFF;
pub const HIGH_START: u16 = 0xFF00;
pub const HIGH_END: u16 = 0xFFFF;

/// Value returned by reads from regions with no backing store.
pub const UNMAPPED: u8 = 0xFF;

/// One entry of the memory map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// Cartridge ROM; writes are mapper commands.
    CartridgeRom,
    /// Video RAM, banked through VBK.
    VideoRam,
    /// External cartridge RAM.
    CartridgeRam,
    /// Work RAM bank 0.
    WorkRamFixed,
    /// Work RAM banks 1-7, selected through SVBK.
    WorkRamBanked,
    /// Echo of work RAM. Not mirrored: reads return [`UNMAPPED`] and writes
    /// are dropped.
    Echo,
    /// Object attribute memory.
    Oam,
    /// Reads return [`UNMAPPED`], writes are dropped.
    Unusable,
    /// I/O registers, high RAM and the interrupt enable register.
    High,
}

impl Region {
    /// All regions in ascending address order.
    pub const ALL: [Region; 9] = [
        Region::CartridgeRom,
        Region::VideoRam,
        Region::CartridgeRam,
        Region::WorkRamFixed,
        Region::WorkRamBanked,
        Region::Echo,
        Region::Oam,
        Region::Unusable,
        Region::High,
    ];

    #[inline]
    pub fn of(addr: u16) -> Region {
        match addr {
            ROM_START..=ROM_END => Region::CartridgeRom,
            VRAM_START..=VRAM_END => Region::VideoRam,
            CART_RAM_START..=CART_RAM_END => Region::CartridgeRam,
            WRAM_FIXED_START..=WRAM_FIXED_END => Region::WorkRamFixed,
            WRAM_BANKED_START..=WRAM_BANKED_END => Region::WorkRamBanked,
            ECHO_START..=ECHO_END => Region::Echo,
            OAM_START..=OAM_END => Region::Oam,
            UNUSABLE_START..=UNUSABLE_END => Region::Unusable,
            HIGH_START..=HIGH_END => Region::High,
        }
    }

    /// Inclusive `(start, end)` bounds of the region.
    pub const fn bounds(self) -> (u16, u16) {
        match self {
            Region::CartridgeRom => (ROM_START, ROM_END),
            Region::VideoRam => (VRAM_START, VRAM_END),
            Region::CartridgeRam => (CART_RAM_START, CART_RAM_END),
            Region::WorkRamFixed => (WRAM_FIXED_START, WRAM_FIXED_END),
            Region::WorkRamBanked => (WRAM_BANKED_START, WRAM_BANKED_END),
            Region::Echo => (ECHO_START, ECHO_END),
            Region::Oam => (OAM_START, OAM_END),
            Region::Unusable => (UNUSABLE_START, UNUSABLE_END),
            Region::High => (HIGH_START, HIGH_END),
        }
    }

    pub const fn contains(self, addr: u16) -> bool {
        let (start, end) = self.bounds();
        addr >= start && addr <= end
    }
}
