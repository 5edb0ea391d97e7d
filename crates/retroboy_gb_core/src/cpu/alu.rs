use super::{Cpu, Flags};

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a();
        let carry_in = u8::from(use_carry && self.regs.carry());

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = (a as u16) + (value as u16) + (carry_in as u16);
        let result = full as u8;

        self.regs.set_a(result);

        self.regs.clear_flags();
        self.regs.set_zero(result == 0);
        self.regs.set_half_carry(half > 0x0F);
        self.regs.set_carry(full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let result = self.sub_flags(value, use_carry);
        self.regs.set_a(result);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    pub fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, false);
    }

    fn sub_flags(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a();
        let carry_in = i16::from(use_carry && self.regs.carry());

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.regs.clear_flags();
        self.regs.set_zero(result == 0);
        self.regs.set_subtract(true);
        self.regs.set_half_carry(half < 0);
        self.regs.set_carry(full < 0);
        result
    }

    pub fn alu_and(&mut self, value: u8) {
        let result = self.regs.a() & value;
        self.regs.set_a(result);

        self.regs.clear_flags();
        self.regs.set_zero(result == 0);
        self.regs.set_half_carry(true);
    }

    pub fn alu_or(&mut self, value: u8) {
        let result = self.regs.a() | value;
        self.regs.set_a(result);

        self.regs.clear_flags();
        self.regs.set_zero(result == 0);
    }

    pub fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a() ^ value;
        self.regs.set_a(result);

        self.regs.clear_flags();
        self.regs.set_zero(result == 0);
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Updates A, Z, H, C; N is left as the previous operation set it.
    pub fn alu_daa(&mut self) {
        let mut a = self.regs.a();
        let mut adjust: u8 = if self.regs.carry() { 0x60 } else { 0x00 };
        if self.regs.half_carry() {
            adjust |= 0x06;
        }

        if !self.regs.subtract() {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.regs.set_carry(adjust >= 0x60);
        self.regs.set_half_carry(false);
        self.regs.set_zero(a == 0);
        self.regs.set_a(a);
    }

    /// 8-bit increment used by INC r and INC (HL). C is unchanged.
    pub fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.regs.set_zero(result == 0);
        self.regs.set_subtract(false);
        self.regs.set_half_carry((value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement used by DEC r and DEC (HL). C is unchanged.
    pub fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.regs.set_zero(result == 0);
        self.regs.set_subtract(true);
        self.regs.set_half_carry((value & 0x0F) == 0);
        result
    }

    /// `ADD HL,rr`: Z is unaffected, H is the carry out of bit 11.
    pub fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl.value();
        let result = hl.wrapping_add(value);

        self.regs.set_subtract(false);
        self.regs.set_half_carry((hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.regs.set_carry((hl as u32) + (value as u32) > 0xFFFF);

        self.regs.hl.set(result);
    }

    /// Signed 8-bit immediate added to a 16-bit base (ADD SP,r8 and
    /// LD HL,SP+r8). H and C come from the low byte; Z and N are cleared.
    pub fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.regs.set_zero(false);
        self.regs.set_subtract(false);
        self.regs
            .set_half_carry((base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.regs.set_carry((base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }
}
