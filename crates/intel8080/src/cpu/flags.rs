use bitflags::bitflags;

bitflags! {
    /// Flag byte as it is pushed by `PUSH PSW` and restored by `POP PSW`.
    ///
    /// Bits 5-7 are never set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Psw: u8 {
        const Z = 1 << 0;
        const S = 1 << 1;
        const P = 1 << 2;
        const CY = 1 << 3;
        const AC = 1 << 4;
    }
}

/// Condition flags of the Intel 8080.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub z: bool,  // zero
    pub s: bool,  // sign
    pub p: bool,  // parity (even)
    pub cy: bool, // carry
    pub ac: bool, // auxiliary carry
}

impl Flags {
    pub fn to_psw(self) -> Psw {
        let mut psw = Psw::empty();
        psw.set(Psw::Z, self.z);
        psw.set(Psw::S, self.s);
        psw.set(Psw::P, self.p);
        psw.set(Psw::CY, self.cy);
        psw.set(Psw::AC, self.ac);
        psw
    }

    pub fn from_psw(psw: Psw) -> Self {
        Self {
            z: psw.contains(Psw::Z),
            s: psw.contains(Psw::S),
            p: psw.contains(Psw::P),
            cy: psw.contains(Psw::CY),
            ac: psw.contains(Psw::AC),
        }
    }

    #[inline]
    pub fn pack(self) -> u8 {
        self.to_psw().bits()
    }

    /// Unused high bits of `byte` are discarded.
    #[inline]
    pub fn unpack(byte: u8) -> Self {
        Self::from_psw(Psw::from_bits_truncate(byte))
    }

    /// Recompute Z, S and P from an 8-bit result.
    #[inline]
    pub(crate) fn set_zsp(&mut self, value: u8) {
        self.z = value == 0;
        self.s = value & 0x80 != 0;
        self.p = parity(value);
    }
}

/// True when `value` has an even number of set bits.
#[inline]
pub fn parity(value: u8) -> bool {
    value.count_ones() % 2 == 0
}
