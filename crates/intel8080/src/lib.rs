pub mod config;
pub mod cpu;
pub mod error;
pub mod machine;

pub use config::RunConfig;
pub use cpu::{
    combine, split, Condition, Cpu8080, Flags, Instruction, Memory, Psw, Reg, RegPair,
    Registers, Snapshot, StackPair, Step,
};
pub use error::{ExecError, LoadError, Result};
pub use machine::{Machine, RunOutcome};

/// Size of the 8080 address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;
