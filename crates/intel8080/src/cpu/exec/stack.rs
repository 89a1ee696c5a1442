use crate::cpu::{combine, split, Cpu8080, Flags, Flow, StackPair};

impl Cpu8080 {
    pub(super) fn exec_push(&mut self, pair: StackPair) -> Flow {
        let value = match pair {
            StackPair::BC => self.regs.bc(),
            StackPair::DE => self.regs.de(),
            StackPair::HL => self.regs.hl(),
            StackPair::PSW => combine(self.regs.a, self.flags.pack()),
        };
        self.push(value);
        Flow::Next
    }

    pub(super) fn exec_pop(&mut self, pair: StackPair) -> Flow {
        let value = self.pop();
        match pair {
            StackPair::BC => self.regs.set_bc(value),
            StackPair::DE => self.regs.set_de(value),
            StackPair::HL => self.regs.set_hl(value),
            StackPair::PSW => {
                let (a, psw) = split(value);
                self.regs.a = a;
                self.flags = Flags::unpack(psw);
            }
        }
        Flow::Next
    }

    /// Exchange HL with the word on top of the stack; SP is unchanged.
    pub(super) fn exec_xthl(&mut self) -> Flow {
        let sp = self.regs.sp;
        let top = self.memory.read_word(sp);
        self.memory.write_word(sp, self.regs.hl());
        self.regs.set_hl(top);
        Flow::Next
    }
}
