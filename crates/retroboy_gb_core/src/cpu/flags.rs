use super::Registers;

bitflags::bitflags! {
    /// Flag bits in the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const Z = 1 << 7;
        const N = 1 << 6;
        const H = 1 << 5;
        const C = 1 << 4;
    }
}

impl Registers {
    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.af.lo())
    }

    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.flags().contains(flag)
    }

    /// Set or clear `flag` in place. The accumulator and every other flag
    /// bit keep their current value.
    #[inline]
    pub fn set_flag(&mut self, flag: Flags, on: bool) {
        let f = self.af.lo();
        let bits = flag.bits();
        let f = if on { f | bits } else { f & !bits };
        self.af.set_lo(f);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.af.set_lo(0);
    }

    #[inline]
    pub fn zero(&self) -> bool {
        self.get_flag(Flags::Z)
    }

    #[inline]
    pub fn subtract(&self) -> bool {
        self.get_flag(Flags::N)
    }

    #[inline]
    pub fn half_carry(&self) -> bool {
        self.get_flag(Flags::H)
    }

    #[inline]
    pub fn carry(&self) -> bool {
        self.get_flag(Flags::C)
    }

    #[inline]
    pub fn set_zero(&mut self, on: bool) {
        self.set_flag(Flags::Z, on);
    }

    #[inline]
    pub fn set_subtract(&mut self, on: bool) {
        self.set_flag(Flags::N, on);
    }

    #[inline]
    pub fn set_half_carry(&mut self, on: bool) {
        self.set_flag(Flags::H, on);
    }

    #[inline]
    pub fn set_carry(&mut self, on: bool) {
        self.set_flag(Flags::C, on);
    }
}
