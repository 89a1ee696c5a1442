use thiserror::Error;

/// Faults raised by the instruction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecError {
    /// The byte at `address` has no handler in the decode table.
    #[error("unimplemented instruction 0x{opcode:02X} at 0x{address:04X}")]
    UnimplementedOpcode { address: u16, opcode: u8 },
}

/// Faults raised while copying a program image into memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("image of {len} bytes does not fit at origin 0x{origin:04X}")]
    ImageTooLarge { origin: u16, len: usize },
}

pub type Result<T, E = ExecError> = std::result::Result<T, E>;
