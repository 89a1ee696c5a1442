use crate::cpu::{Cpu8080, Flow};

// No interrupt controller or port devices are attached: EI/DI only track the
// enable bit, and IN/OUT consume their port byte without side effects.

impl Cpu8080 {
    pub(super) fn exec_ei(&mut self) -> Flow {
        if !self.interrupts_enabled {
            log::debug!("8080 EI at PC=0x{:04X}", self.regs.pc);
        }
        self.interrupts_enabled = true;
        Flow::Next
    }

    pub(super) fn exec_di(&mut self) -> Flow {
        if self.interrupts_enabled {
            log::debug!("8080 DI at PC=0x{:04X}", self.regs.pc);
        }
        self.interrupts_enabled = false;
        Flow::Next
    }

    pub(super) fn exec_hlt(&mut self) -> Flow {
        log::debug!("8080 HLT at PC=0x{:04X}", self.regs.pc);
        self.halted = true;
        Flow::Next
    }

    pub(super) fn exec_in(&mut self) -> Flow {
        let port = self.imm8();
        log::debug!("8080 IN {port:#04X} ignored (no device)");
        Flow::Next
    }

    pub(super) fn exec_out(&mut self) -> Flow {
        let port = self.imm8();
        log::debug!("8080 OUT {port:#04X} <- 0x{:02X} ignored (no device)", self.regs.a);
        Flow::Next
    }
}
