use crate::config::RunConfig;
use crate::cpu::{Cpu8080, Step};
use crate::error::{ExecError, LoadError};

/// How a run ended without faulting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// `pc` moved past the last byte of the loaded image.
    BoundaryReached { pc: u16 },
    /// HLT executed. No interrupt can wake the processor, so the run is over.
    Halted { pc: u16 },
}

/// One emulation run: a CPU, its memory and the bound of the loaded image.
///
/// The machine only decides when to stop. Every instruction is executed by
/// [`Cpu8080::step`].
#[derive(Debug)]
pub struct Machine {
    cpu: Cpu8080,
    config: RunConfig,
    /// One past the last loaded byte; may equal 0x10000.
    bound: usize,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(RunConfig::default())
    }
}

impl Machine {
    pub fn new(config: RunConfig) -> Self {
        Self {
            cpu: Cpu8080::with_config(&config),
            config,
            bound: config.origin as usize,
        }
    }

    /// Copy `image` to the configured origin and point `pc` at it.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        let origin = self.config.origin;
        self.cpu.memory.load(origin, image)?;
        self.cpu.regs.pc = origin;
        self.bound = origin as usize + image.len();
        log::info!(
            "8080 image loaded: {} bytes at 0x{:04X}..0x{:05X}",
            image.len(),
            origin,
            self.bound
        );
        Ok(())
    }

    pub fn cpu(&self) -> &Cpu8080 {
        &self.cpu
    }

    pub fn bound(&self) -> usize {
        self.bound
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run until the image bound is passed, HLT executes or an opcode faults.
    pub fn run(&mut self) -> Result<RunOutcome, ExecError> {
        self.run_with(|_| {})
    }

    /// As [`Machine::run`], handing every executed instruction to `observer`.
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<RunOutcome, ExecError>
    where
        F: FnMut(&Step),
    {
        let mut executed: u64 = 0;
        let outcome = loop {
            let pc = self.cpu.regs.pc;
            if self.cpu.halted {
                break RunOutcome::Halted { pc };
            }
            if pc as usize >= self.bound {
                break RunOutcome::BoundaryReached { pc };
            }

            let step = self.cpu.step().inspect_err(|err| {
                log::error!("8080 run aborted after {executed} instructions: {err}");
            })?;
            executed += 1;
            observer(&step);

            // An image ending at 0xFFFF wraps `pc` to 0, below the bound.
            let end = step.address as usize + step.instruction.width() as usize;
            let fell_through =
                step.state.regs.pc == step.address.wrapping_add(step.instruction.width());
            if fell_through && !self.cpu.halted && end >= self.bound {
                break RunOutcome::BoundaryReached {
                    pc: step.state.regs.pc,
                };
            }
        };

        log::info!("8080 run finished after {executed} instructions: {outcome:?}");
        Ok(outcome)
    }
}
