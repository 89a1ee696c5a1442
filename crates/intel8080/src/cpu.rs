mod alu;
mod exec;
mod flags;
mod memory;
mod opcode;
mod regs;


pub use flags::{parity, Flags, Psw};
pub use memory::Memory;
pub use opcode::{AluOp, Condition, Instruction, Reg, RegPair, StackPair};
pub use regs::{combine, split, Registers};

use crate::config::RunConfig;
use crate::error::{ExecError, Result};

/// Architectural state visible after an instruction completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub regs: Registers,
    pub flags: Flags,
    pub interrupts_enabled: bool,
    pub halted: bool,
}

/// Report for one executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Address the opcode was fetched from.
    pub address: u16,
    pub opcode: u8,
    pub instruction: Instruction,
    /// State after execution.
    pub state: Snapshot,
}

/// Where the program counter goes once a handler returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    /// Fall through past the instruction and its immediates.
    Next,
    Jump(u16),
}

/// Intel 8080 CPU together with the memory it owns.
#[derive(Debug, Default)]
pub struct Cpu8080 {
    pub regs: Registers,
    pub flags: Flags,
    pub interrupts_enabled: bool,
    /// Set by HLT. Nothing clears it since interrupts are never delivered.
    pub halted: bool,
    pub memory: Memory,
    undocumented_aliases: bool,
}

impl Cpu8080 {
    /// Create a CPU in reset state with zeroed memory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &RunConfig) -> Self {
        let mut cpu = Self::new();
        cpu.undocumented_aliases = config.undocumented_aliases;
        cpu.regs.pc = config.origin;
        cpu
    }

    /// Zero every register and flag. Memory is left untouched.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.flags = Flags::default();
        self.interrupts_enabled = false;
        self.halted = false;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            regs: self.regs,
            flags: self.flags,
            interrupts_enabled: self.interrupts_enabled,
            halted: self.halted,
        }
    }

    pub fn decode(&self, opcode: u8) -> Instruction {
        if self.undocumented_aliases {
            Instruction::decode_with_aliases(opcode)
        } else {
            Instruction::decode(opcode)
        }
    }

    /// Fetch, decode and execute the instruction at `pc`.
    ///
    /// On an undefined opcode no state is touched and the fault is returned.
    pub fn step(&mut self) -> Result<Step> {
        let address = self.regs.pc;
        let opcode = self.memory.read(address);
        let instruction = self.decode(opcode);

        if !instruction.is_defined() {
            log::error!(
                "8080 fault: unimplemented opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} A=0x{a:02X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X} PSW=0x{f:02X})",
                pc = address,
                sp = self.regs.sp,
                a = self.regs.a,
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
                f = self.flags.pack(),
            );
            return Err(ExecError::UnimplementedOpcode { address, opcode });
        }

        log::trace!("{address:04X}: {opcode:02X} {instruction:?}");

        self.regs.pc = match self.execute(instruction) {
            Flow::Next => address.wrapping_add(instruction.width()),
            Flow::Jump(target) => target,
        };

        Ok(Step {
            address,
            opcode,
            instruction,
            state: self.snapshot(),
        })
    }

    /// Byte following the opcode.
    #[inline]
    fn imm8(&self) -> u8 {
        self.memory.read(self.regs.pc.wrapping_add(1))
    }

    /// Little-endian word following the opcode.
    #[inline]
    fn imm16(&self) -> u16 {
        self.memory.read_word(self.regs.pc.wrapping_add(1))
    }

    /// Address of the instruction after the current one.
    #[inline]
    fn next_pc(&self, instruction: Instruction) -> u16 {
        self.regs.pc.wrapping_add(instruction.width())
    }

    fn read_reg(&self, reg: Reg) -> u8 {
        match reg {
            Reg::B => self.regs.b,
            Reg::C => self.regs.c,
            Reg::D => self.regs.d,
            Reg::E => self.regs.e,
            Reg::H => self.regs.h,
            Reg::L => self.regs.l,
            Reg::M => self.memory.read(self.regs.hl()),
            Reg::A => self.regs.a,
        }
    }

    fn write_reg(&mut self, reg: Reg, value: u8) {
        match reg {
            Reg::B => self.regs.b = value,
            Reg::C => self.regs.c = value,
            Reg::D => self.regs.d = value,
            Reg::E => self.regs.e = value,
            Reg::H => self.regs.h = value,
            Reg::L => self.regs.l = value,
            Reg::M => {
                let addr = self.regs.hl();
                self.memory.write(addr, value);
            }
            Reg::A => self.regs.a = value,
        }
    }

    /// High byte to `sp - 1`, low byte to `sp - 2`.
    fn push(&mut self, value: u16) {
        let (hi, lo) = split(value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write(self.regs.sp, lo);
    }

    fn pop(&mut self) -> u16 {
        let value = self.memory.read_word(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }
}
