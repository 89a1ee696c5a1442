use crate::cpu::{Condition, Cpu8080, Flow, Instruction};

impl Cpu8080 {
    pub(super) fn exec_jmp(&mut self) -> Flow {
        Flow::Jump(self.imm16())
    }

    pub(super) fn exec_jmp_cc(&mut self, cond: Condition) -> Flow {
        if cond.holds(&self.flags) {
            self.exec_jmp()
        } else {
            Flow::Next
        }
    }

    pub(super) fn exec_call(&mut self, instruction: Instruction) -> Flow {
        let target = self.imm16();
        let ret = self.next_pc(instruction);
        self.push(ret);
        Flow::Jump(target)
    }

    pub(super) fn exec_call_cc(&mut self, instruction: Instruction, cond: Condition) -> Flow {
        if cond.holds(&self.flags) {
            self.exec_call(instruction)
        } else {
            Flow::Next
        }
    }

    pub(super) fn exec_ret(&mut self) -> Flow {
        Flow::Jump(self.pop())
    }

    pub(super) fn exec_ret_cc(&mut self, cond: Condition) -> Flow {
        if cond.holds(&self.flags) {
            self.exec_ret()
        } else {
            Flow::Next
        }
    }

    pub(super) fn exec_rst(&mut self, instruction: Instruction, n: u8) -> Flow {
        debug_assert!(n < 8);
        let ret = self.next_pc(instruction);
        self.push(ret);
        Flow::Jump(u16::from(n) << 3)
    }

    pub(super) fn exec_pchl(&mut self) -> Flow {
        Flow::Jump(self.regs.hl())
    }
}
