/// Mask installed on AF: the low nibble of F is wired to zero.
pub const AF_MASK: u16 = 0xFFF0;

/// A 16-bit register pair addressable as two bytes or one word.
///
/// An optional mask is re-applied after every mutation, so bits outside the
/// mask can never be observed as set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterPair {
    value: u16,
    mask: Option<u16>,
}

impl RegisterPair {
    pub const fn new() -> Self {
        Self {
            value: 0,
            mask: None,
        }
    }

    /// A pair whose value is always ANDed with `mask`.
    pub const fn masked(mask: u16) -> Self {
        Self {
            value: 0,
            mask: Some(mask),
        }
    }

    #[inline]
    pub fn value(&self) -> u16 {
        self.value
    }

    #[inline]
    pub fn hi(&self) -> u8 {
        (self.value >> 8) as u8
    }

    #[inline]
    pub fn lo(&self) -> u8 {
        self.value as u8
    }

    #[inline]
    pub fn set(&mut self, value: u16) {
        self.value = value;
        self.apply_mask();
    }

    #[inline]
    pub fn set_hi(&mut self, value: u8) {
        self.value = u16::from_be_bytes([value, self.lo()]);
        self.apply_mask();
    }

    #[inline]
    pub fn set_lo(&mut self, value: u8) {
        self.value = u16::from_be_bytes([self.hi(), value]);
        self.apply_mask();
    }

    #[inline]
    fn apply_mask(&mut self) {
        if let Some(mask) = self.mask {
            self.value &= mask;
        }
    }
}

/// Registers for the Game Boy CPU (LR35902).
///
/// AF, BC, DE, HL and SP are register pairs; PC is a plain word. The low
/// byte of AF is the flags byte, see [`Flags`](super::Flags).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registers {
    pub af: RegisterPair,
    pub bc: RegisterPair,
    pub de: RegisterPair,
    pub hl: RegisterPair,
    pub sp: RegisterPair,
    pub pc: u16,
}

impl Default for Registers {
    fn default() -> Self {
        Self {
            // The mask goes in before any write so the flags nibble is zero
            // from the very first instruction.
            af: RegisterPair::masked(AF_MASK),
            bc: RegisterPair::new(),
            de: RegisterPair::new(),
            hl: RegisterPair::new(),
            sp: RegisterPair::new(),
            pc: 0,
        }
    }
}

impl Registers {
    #[inline]
    pub fn a(&self) -> u8 {
        self.af.hi()
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.af.set_hi(value);
    }

    /// Raw flags byte. Bits 0-3 always read as zero.
    #[inline]
    pub fn f(&self) -> u8 {
        self.af.lo()
    }

    #[inline]
    pub fn set_f(&mut self, value: u8) {
        self.af.set_lo(value);
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.bc.hi()
    }

    #[inline]
    pub fn set_b(&mut self, value: u8) {
        self.bc.set_hi(value);
    }

    #[inline]
    pub fn c(&self) -> u8 {
        self.bc.lo()
    }

    #[inline]
    pub fn set_c(&mut self, value: u8) {
        self.bc.set_lo(value);
    }

    #[inline]
    pub fn d(&self) -> u8 {
        self.de.hi()
    }

    #[inline]
    pub fn set_d(&mut self, value: u8) {
        self.de.set_hi(value);
    }

    #[inline]
    pub fn e(&self) -> u8 {
        self.de.lo()
    }

    #[inline]
    pub fn set_e(&mut self, value: u8) {
        self.de.set_lo(value);
    }

    #[inline]
    pub fn h(&self) -> u8 {
        self.hl.hi()
    }

    #[inline]
    pub fn set_h(&mut self, value: u8) {
        self.hl.set_hi(value);
    }

    #[inline]
    pub fn l(&self) -> u8 {
        self.hl.lo()
    }

    #[inline]
    pub fn set_l(&mut self, value: u8) {
        self.hl.set_lo(value);
    }
}
