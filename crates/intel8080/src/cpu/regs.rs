use super::opcode::RegPair;

/// Joins a high and a low byte into one 16-bit value.
#[inline]
pub fn combine(hi: u8, lo: u8) -> u16 {
    u16::from_be_bytes([hi, lo])
}

/// Splits a 16-bit value into its `(high, low)` bytes.
#[inline]
pub fn split(value: u16) -> (u8, u8) {
    let [hi, lo] = value.to_be_bytes();
    (hi, lo)
}

/// Register file of the Intel 8080.
///
/// B/C, D/E and H/L are stored as separate bytes. Their 16-bit pair values
/// are computed on demand, so there is exactly one copy of each register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn bc(&self) -> u16 {
        combine(self.b, self.c)
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        (self.b, self.c) = split(value);
    }

    #[inline]
    pub fn de(&self) -> u16 {
        combine(self.d, self.e)
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        (self.d, self.e) = split(value);
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        combine(self.h, self.l)
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        (self.h, self.l) = split(value);
    }

    /// Value of a pair operand as used by LXI/INX/DCX/DAD.
    pub fn pair(&self, pair: RegPair) -> u16 {
        match pair {
            RegPair::BC => self.bc(),
            RegPair::DE => self.de(),
            RegPair::HL => self.hl(),
            RegPair::SP => self.sp,
        }
    }

    pub fn set_pair(&mut self, pair: RegPair, value: u16) {
        match pair {
            RegPair::BC => self.set_bc(value),
            RegPair::DE => self.set_de(value),
            RegPair::HL => self.set_hl(value),
            RegPair::SP => self.sp = value,
        }
    }
}
