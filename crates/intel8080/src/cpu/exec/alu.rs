use crate::cpu::{AluOp, Cpu8080, Flow, Instruction};

impl Cpu8080 {
    pub(super) fn exec_alu(&mut self, op: AluOp, value: u8) -> Flow {
        let carry = self.flags.cy as u8;
        match op {
            AluOp::Add => self.alu_add(value, 0),
            AluOp::Adc => self.alu_add(value, carry),
            AluOp::Sub => self.alu_sub(value, 0),
            AluOp::Sbb => self.alu_sub(value, carry),
            AluOp::Ana => self.alu_and(value),
            AluOp::Xra => self.alu_xor(value),
            AluOp::Ora => self.alu_or(value),
            AluOp::Cmp => self.alu_cmp(value),
        }
        Flow::Next
    }

    pub(super) fn exec_daa(&mut self) -> Flow {
        self.alu_daa();
        Flow::Next
    }

    pub(super) fn exec_cma(&mut self) -> Flow {
        self.regs.a = !self.regs.a;
        Flow::Next
    }

    pub(super) fn exec_stc(&mut self) -> Flow {
        self.flags.cy = true;
        Flow::Next
    }

    pub(super) fn exec_cmc(&mut self) -> Flow {
        self.flags.cy = !self.flags.cy;
        Flow::Next
    }

    /// RLC/RRC/RAL/RAR. Only CY is affected.
    pub(super) fn exec_rotate_a(&mut self, instruction: Instruction) -> Flow {
        let a = self.regs.a;
        let carry_in = self.flags.cy as u8;

        let (result, carry_out) = match instruction {
            Instruction::Rlc => (a.rotate_left(1), a & 0x80 != 0),
            Instruction::Rrc => (a.rotate_right(1), a & 0x01 != 0),
            Instruction::Ral => ((a << 1) | carry_in, a & 0x80 != 0),
            Instruction::Rar => ((a >> 1) | (carry_in << 7), a & 0x01 != 0),
            _ => unreachable!("not an accumulator rotate: {instruction:?}"),
        };

        self.regs.a = result;
        self.flags.cy = carry_out;
        Flow::Next
    }
}
