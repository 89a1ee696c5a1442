use crate::cpu::{Cpu8080, Flow, Reg, RegPair};

impl Cpu8080 {
    pub(super) fn exec_inr(&mut self, reg: Reg) -> Flow {
        let value = self.read_reg(reg);
        let result = self.alu_inc8(value);
        self.write_reg(reg, result);
        Flow::Next
    }

    pub(super) fn exec_dcr(&mut self, reg: Reg) -> Flow {
        let value = self.read_reg(reg);
        let result = self.alu_dec8(value);
        self.write_reg(reg, result);
        Flow::Next
    }

    pub(super) fn exec_inx(&mut self, pair: RegPair) -> Flow {
        let value = self.regs.pair(pair).wrapping_add(1);
        self.regs.set_pair(pair, value);
        Flow::Next
    }

    pub(super) fn exec_dcx(&mut self, pair: RegPair) -> Flow {
        let value = self.regs.pair(pair).wrapping_sub(1);
        self.regs.set_pair(pair, value);
        Flow::Next
    }

    pub(super) fn exec_dad(&mut self, pair: RegPair) -> Flow {
        let value = self.regs.pair(pair);
        self.alu_add16_hl(value);
        Flow::Next
    }
}
