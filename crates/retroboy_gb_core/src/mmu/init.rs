use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::banks::BankSelector;
use super::config::RamFill;
use super::high::{IE_ADDR, IO_START};
use super::AddressSpace;

/// I/O register values visible at 0x0100 on DMG hardware, as
/// `(offset from 0xFF00, value)`. Offsets missing from the table start at 0.
pub const DMG_IO_DEFAULTS: [(u8, u8); 34] = [
    // Divider / timer.
    (0x04, 0x1E),
    (0x05, 0x00),
    (0x06, 0x00),
    (0x07, 0xF8),
    // IF.
    (0x0F, 0xE1),
    // Sound.
    (0x10, 0x80),
    (0x11, 0xBF),
    (0x12, 0xF3),
    (0x14, 0xBF),
    (0x16, 0x3F),
    (0x17, 0x00),
    (0x19, 0xBF),
    (0x1A, 0x7F),
    (0x1B, 0xFF),
    (0x1C, 0x9F),
    (0x1E, 0xBF),
    (0x20, 0xFF),
    (0x21, 0x00),
    (0x22, 0x00),
    (0x23, 0xBF),
    (0x24, 0x77),
    (0x25, 0xF3),
    (0x26, 0xF1),
    // PPU.
    (0x40, 0x91), // LCDC
    (0x41, 0x85), // STAT
    (0x42, 0x00), // SCY
    (0x43, 0x00), // SCX
    (0x45, 0x00), // LYC
    (0x47, 0xFC), // BGP
    (0x48, 0xFF), // OBP0
    (0x49, 0xFF), // OBP1
    (0x4A, 0x00), // WY
    (0x4B, 0x00), // WX
    // IE.
    (0xFF, 0x00),
];

impl AddressSpace {
    /// Initialize RAM, bank selection and I/O registers to their power-on
    /// state.
    pub(super) fn apply_power_up_state(&mut self, fill: RamFill) {
        self.fill_internal_ram(fill);

        self.banks = BankSelector::default();
        self.io = [0; super::IO_SIZE];
        for &(offset, value) in DMG_IO_DEFAULTS.iter() {
            match IO_START + offset as u16 {
                IE_ADDR => self.ie = value,
                addr => self.io[(addr - IO_START) as usize] = value,
            }
        }
    }

    /// Work RAM and high RAM hold noise at power-on on real hardware. A
    /// seeded fill keeps runs reproducible without handing software a
    /// convenient all-zero pattern.
    fn fill_internal_ram(&mut self, fill: RamFill) {
        match fill {
            RamFill::Zero => {
                self.wram.fill(0);
                self.hram.fill(0);
            }
            RamFill::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                rng.fill(&mut self.wram[..]);
                rng.fill(&mut self.hram[..]);
            }
        }
    }
}
