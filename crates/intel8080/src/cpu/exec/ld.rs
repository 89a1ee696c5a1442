use crate::cpu::{Cpu8080, Flow, Reg, RegPair};

impl Cpu8080 {
    pub(super) fn exec_mov(&mut self, dst: Reg, src: Reg) -> Flow {
        let value = self.read_reg(src);
        self.write_reg(dst, value);
        Flow::Next
    }

    pub(super) fn exec_mvi(&mut self, reg: Reg) -> Flow {
        let value = self.imm8();
        self.write_reg(reg, value);
        Flow::Next
    }

    pub(super) fn exec_lxi(&mut self, pair: RegPair) -> Flow {
        let value = self.imm16();
        self.regs.set_pair(pair, value);
        Flow::Next
    }

    pub(super) fn exec_ldax(&mut self, pair: RegPair) -> Flow {
        debug_assert!(matches!(pair, RegPair::BC | RegPair::DE));
        let addr = self.regs.pair(pair);
        self.regs.a = self.memory.read(addr);
        Flow::Next
    }

    pub(super) fn exec_stax(&mut self, pair: RegPair) -> Flow {
        debug_assert!(matches!(pair, RegPair::BC | RegPair::DE));
        let addr = self.regs.pair(pair);
        self.memory.write(addr, self.regs.a);
        Flow::Next
    }

    pub(super) fn exec_lda(&mut self) -> Flow {
        let addr = self.imm16();
        self.regs.a = self.memory.read(addr);
        Flow::Next
    }

    pub(super) fn exec_sta(&mut self) -> Flow {
        let addr = self.imm16();
        self.memory.write(addr, self.regs.a);
        Flow::Next
    }

    pub(super) fn exec_lhld(&mut self) -> Flow {
        let addr = self.imm16();
        let value = self.memory.read_word(addr);
        self.regs.set_hl(value);
        Flow::Next
    }

    pub(super) fn exec_shld(&mut self) -> Flow {
        let addr = self.imm16();
        self.memory.write_word(addr, self.regs.hl());
        Flow::Next
    }

    pub(super) fn exec_xchg(&mut self) -> Flow {
        std::mem::swap(&mut self.regs.d, &mut self.regs.h);
        std::mem::swap(&mut self.regs.e, &mut self.regs.l);
        Flow::Next
    }

    pub(super) fn exec_sphl(&mut self) -> Flow {
        self.regs.sp = self.regs.hl();
        Flow::Next
    }
}
