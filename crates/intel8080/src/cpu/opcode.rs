//! Decoding of opcode bytes into [`Instruction`]s.
//!
//! The table is closed: every one of the 256 byte values maps to exactly one
//! variant. The twelve bytes the 8080 leaves undocumented decode to
//! [`Instruction::Undefined`] unless aliasing is requested.

use super::flags::Flags;

/// 8-bit operand encoded in the low (source) or middle (destination) three
/// bits of an opcode. `M` is the memory byte addressed by HL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg {
    B,
    C,
    D,
    E,
    H,
    L,
    M,
    A,
}

impl Reg {
    fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Reg::B,
            1 => Reg::C,
            2 => Reg::D,
            3 => Reg::E,
            4 => Reg::H,
            5 => Reg::L,
            6 => Reg::M,
            _ => Reg::A,
        }
    }
}

/// Pair operand of LXI, INX, DCX and DAD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegPair {
    BC,
    DE,
    HL,
    SP,
}

impl RegPair {
    fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => RegPair::BC,
            1 => RegPair::DE,
            2 => RegPair::HL,
            _ => RegPair::SP,
        }
    }
}

/// Pair operand of PUSH and POP, where the SP slot names A plus flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackPair {
    BC,
    DE,
    HL,
    PSW,
}

impl StackPair {
    fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => StackPair::BC,
            1 => StackPair::DE,
            2 => StackPair::HL,
            _ => StackPair::PSW,
        }
    }
}

/// Branch condition of the conditional jump, call and return groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    NotZero,
    Zero,
    NoCarry,
    Carry,
    ParityOdd,
    ParityEven,
    Plus,
    Minus,
}

impl Condition {
    fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Condition::NotZero,
            1 => Condition::Zero,
            2 => Condition::NoCarry,
            3 => Condition::Carry,
            4 => Condition::ParityOdd,
            5 => Condition::ParityEven,
            6 => Condition::Plus,
            _ => Condition::Minus,
        }
    }

    pub fn holds(self, flags: &Flags) -> bool {
        match self {
            Condition::NotZero => !flags.z,
            Condition::Zero => flags.z,
            Condition::NoCarry => !flags.cy,
            Condition::Carry => flags.cy,
            Condition::ParityOdd => !flags.p,
            Condition::ParityEven => flags.p,
            Condition::Plus => !flags.s,
            Condition::Minus => flags.s,
        }
    }
}

/// Accumulator operation shared by the register (0x80-0xBF) and immediate
/// (0xC6-0xFE) groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbb,
    Ana,
    Xra,
    Ora,
    Cmp,
}

impl AluOp {
    fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbb,
            4 => AluOp::Ana,
            5 => AluOp::Xra,
            6 => AluOp::Ora,
            _ => AluOp::Cmp,
        }
    }
}

/// One decoded 8080 instruction. Immediate operands are not part of the
/// variant; the executor reads them from the bytes following the opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Nop,

    // Data transfer
    Mov { dst: Reg, src: Reg },
    Mvi(Reg),
    Lxi(RegPair),
    Ldax(RegPair),
    Stax(RegPair),
    Lda,
    Sta,
    Lhld,
    Shld,
    Xchg,
    Xthl,
    Sphl,

    // Arithmetic and logical
    Alu(AluOp, Reg),
    AluImm(AluOp),
    Inr(Reg),
    Dcr(Reg),
    Inx(RegPair),
    Dcx(RegPair),
    Dad(RegPair),
    Daa,
    Cma,
    Stc,
    Cmc,
    Rlc,
    Rrc,
    Ral,
    Rar,

    // Branch and subroutine
    Jmp,
    Jcc(Condition),
    Call,
    Ccc(Condition),
    Ret,
    Rcc(Condition),
    Rst(u8),
    Pchl,

    // Stack
    Push(StackPair),
    Pop(StackPair),

    // Control and I/O
    Ei,
    Di,
    Hlt,
    In,
    Out,

    /// Byte outside the documented table.
    Undefined(u8),
}

impl Instruction {
    /// Decode using the documented table only.
    pub fn decode(opcode: u8) -> Self {
        use Instruction::*;

        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let rp = (opcode >> 4) & 0x03;

        match opcode {
            0x00 => Nop,
            0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => Undefined(opcode),
            0xCB | 0xD9 | 0xDD | 0xED | 0xFD => Undefined(opcode),

            0x01 | 0x11 | 0x21 | 0x31 => Lxi(RegPair::from_bits(rp)),
            0x02 | 0x12 => Stax(RegPair::from_bits(rp)),
            0x0A | 0x1A => Ldax(RegPair::from_bits(rp)),
            0x03 | 0x13 | 0x23 | 0x33 => Inx(RegPair::from_bits(rp)),
            0x0B | 0x1B | 0x2B | 0x3B => Dcx(RegPair::from_bits(rp)),
            0x09 | 0x19 | 0x29 | 0x39 => Dad(RegPair::from_bits(rp)),

            0x22 => Shld,
            0x2A => Lhld,
            0x32 => Sta,
            0x3A => Lda,

            // INR/DCR/MVI share the destination field: 00 ddd 100/101/110
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => Inr(Reg::from_bits(dst)),
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => Dcr(Reg::from_bits(dst)),
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => Mvi(Reg::from_bits(dst)),

            0x07 => Rlc,
            0x0F => Rrc,
            0x17 => Ral,
            0x1F => Rar,
            0x27 => Daa,
            0x2F => Cma,
            0x37 => Stc,
            0x3F => Cmc,

            // MOV M,M would sit here
            0x76 => Hlt,
            0x40..=0x7F => Mov {
                dst: Reg::from_bits(dst),
                src: Reg::from_bits(src),
            },

            0x80..=0xBF => Alu(AluOp::from_bits(dst), Reg::from_bits(src)),

            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
                AluImm(AluOp::from_bits(dst))
            }

            0xC3 => Jmp,
            0xCD => Call,
            0xC9 => Ret,
            0xE9 => Pchl,

            0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => {
                Jcc(Condition::from_bits(dst))
            }
            0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => {
                Ccc(Condition::from_bits(dst))
            }
            0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => {
                Rcc(Condition::from_bits(dst))
            }
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Rst(dst),

            0xC5 | 0xD5 | 0xE5 | 0xF5 => Push(StackPair::from_bits(rp)),
            0xC1 | 0xD1 | 0xE1 | 0xF1 => Pop(StackPair::from_bits(rp)),

            0xE3 => Xthl,
            0xEB => Xchg,
            0xF9 => Sphl,

            0xD3 => Out,
            0xDB => In,
            0xF3 => Di,
            0xFB => Ei,
        }
    }

    /// Decode, mapping the undocumented bytes onto the instructions the
    /// silicon actually executes for them.
    pub fn decode_with_aliases(opcode: u8) -> Self {
        match opcode {
            0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => Instruction::Nop,
            0xCB => Instruction::Jmp,
            0xD9 => Instruction::Ret,
            0xDD | 0xED | 0xFD => Instruction::Call,
            _ => Self::decode(opcode),
        }
    }

    /// Total encoded length in bytes, opcode included.
    pub fn width(self) -> u16 {
        use Instruction::*;

        match self {
            Mvi(_) | AluImm(_) | In | Out => 2,
            Lxi(_) | Lda | Sta | Lhld | Shld | Jmp | Jcc(_) | Call | Ccc(_) => 3,
            _ => 1,
        }
    }

    pub fn is_defined(self) -> bool {
        !matches!(self, Instruction::Undefined(_))
    }
}
