use super::Cpu8080;

impl Cpu8080 {
    /// ADD/ADC. `carry_in` is 0 or 1.
    ///
    /// CY comes from the 9-bit sum, AC from the carry out of bit 3.
    pub(super) fn alu_add(&mut self, value: u8, carry_in: u8) {
        let a = self.regs.a;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.flags.cy = full > 0xFF;
        self.flags.ac = (a & 0x0F) + (value & 0x0F) + carry_in > 0x0F;
        self.flags.set_zsp(result);
        self.regs.a = result;
    }

    /// Shared body of SUB/SBB/CMP; returns the difference without storing it.
    ///
    /// The 8080 subtracts by adding the complement, so AC is the carry out of
    /// bit 3 of `a + !value + !borrow` while CY reports the borrow.
    fn alu_diff(&mut self, value: u8, borrow_in: u8) -> u8 {
        let a = self.regs.a;
        let full = a as i16 - value as i16 - borrow_in as i16;
        let result = full as u8;

        self.flags.cy = full < 0;
        self.flags.ac = (a & 0x0F) + (!value & 0x0F) + (1 - borrow_in) > 0x0F;
        self.flags.set_zsp(result);
        result
    }

    pub(super) fn alu_sub(&mut self, value: u8, borrow_in: u8) {
        self.regs.a = self.alu_diff(value, borrow_in);
    }

    /// Compare A with `value`; A itself is not modified.
    pub(super) fn alu_cmp(&mut self, value: u8) {
        self.alu_diff(value, 0);
    }

    pub(super) fn alu_and(&mut self, value: u8) {
        let a = self.regs.a;
        let result = a & value;

        self.flags.cy = false;
        self.flags.ac = (a | value) & 0x08 != 0;
        self.flags.set_zsp(result);
        self.regs.a = result;
    }

    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;

        self.flags.cy = false;
        self.flags.ac = false;
        self.flags.set_zsp(result);
        self.regs.a = result;
    }

    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;

        self.flags.cy = false;
        self.flags.ac = false;
        self.flags.set_zsp(result);
        self.regs.a = result;
    }

    /// INR helper. CY is preserved.
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.flags.ac = value & 0x0F == 0x0F;
        self.flags.set_zsp(result);
        result
    }

    /// DCR helper. CY is preserved.
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.flags.ac = result & 0x0F != 0x0F;
        self.flags.set_zsp(result);
        result
    }

    /// DAD helper: HL += `value`, only CY is affected.
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let (result, carry) = self.regs.hl().overflowing_add(value);
        self.flags.cy = carry;
        self.regs.set_hl(result);
    }

    /// Decimal adjust A after a BCD addition.
    pub(super) fn alu_daa(&mut self) {
        let a = self.regs.a;
        let low = a & 0x0F;
        let high = a >> 4;
        let mut correction = 0u8;
        let mut carry = self.flags.cy;

        if low > 9 || self.flags.ac {
            correction |= 0x06;
        }
        if high > 9 || carry || (high >= 9 && low > 9) {
            correction |= 0x60;
            carry = true;
        }

        self.alu_add(correction, 0);
        self.flags.cy = carry;
    }
}
