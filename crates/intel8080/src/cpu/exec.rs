mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Cpu8080, Flow, Instruction};

impl Cpu8080 {
    /// Execute a decoded instruction whose opcode sits at `pc`.
    ///
    /// `pc` still addresses the opcode while the handler runs, so immediates
    /// are read relative to it. The caller applies the returned [`Flow`].
    pub(super) fn execute(&mut self, instruction: Instruction) -> Flow {
        use Instruction::*;

        match instruction {
            Nop => Flow::Next,

            // Data transfer
            Mov { dst, src } => self.exec_mov(dst, src),
            Mvi(reg) => self.exec_mvi(reg),
            Lxi(pair) => self.exec_lxi(pair),
            Ldax(pair) => self.exec_ldax(pair),
            Stax(pair) => self.exec_stax(pair),
            Lda => self.exec_lda(),
            Sta => self.exec_sta(),
            Lhld => self.exec_lhld(),
            Shld => self.exec_shld(),
            Xchg => self.exec_xchg(),
            Sphl => self.exec_sphl(),

            // 8-bit ALU on A
            Alu(op, reg) => {
                let value = self.read_reg(reg);
                self.exec_alu(op, value)
            }
            AluImm(op) => {
                let value = self.imm8();
                self.exec_alu(op, value)
            }
            Daa => self.exec_daa(),
            Cma => self.exec_cma(),
            Stc => self.exec_stc(),
            Cmc => self.exec_cmc(),
            Rlc | Rrc | Ral | Rar => self.exec_rotate_a(instruction),

            // Increment / decrement / 16-bit add
            Inr(reg) => self.exec_inr(reg),
            Dcr(reg) => self.exec_dcr(reg),
            Inx(pair) => self.exec_inx(pair),
            Dcx(pair) => self.exec_dcx(pair),
            Dad(pair) => self.exec_dad(pair),

            // Branch and subroutine
            Jmp => self.exec_jmp(),
            Jcc(cond) => self.exec_jmp_cc(cond),
            Call => self.exec_call(instruction),
            Ccc(cond) => self.exec_call_cc(instruction, cond),
            Ret => self.exec_ret(),
            Rcc(cond) => self.exec_ret_cc(cond),
            Rst(n) => self.exec_rst(instruction, n),
            Pchl => self.exec_pchl(),

            // Stack
            Push(pair) => self.exec_push(pair),
            Pop(pair) => self.exec_pop(pair),
            Xthl => self.exec_xthl(),

            // Control and I/O
            Ei => self.exec_ei(),
            Di => self.exec_di(),
            Hlt => self.exec_hlt(),
            In => self.exec_in(),
            Out => self.exec_out(),

            Undefined(opcode) => {
                unreachable!("undefined opcode 0x{opcode:02X} reached dispatch")
            }
        }
    }
}
