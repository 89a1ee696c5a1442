use crate::error::LoadError;
use crate::MEMORY_SIZE;

/// Flat 64KB address space shared by program, data and stack.
///
/// The buffer spans every 16-bit address, so indexing with a `u16` can never
/// fall outside it; word accesses wrap from 0xFFFF to 0x0000.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }

    /// Little-endian word: low byte at `addr`, high byte at `addr + 1`.
    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr);
        let hi = self.read(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }

    /// Copy `image` into memory starting at `origin`.
    pub fn load(&mut self, origin: u16, image: &[u8]) -> Result<(), LoadError> {
        let start = origin as usize;
        let end = start + image.len();
        if end > MEMORY_SIZE {
            return Err(LoadError::ImageTooLarge {
                origin,
                len: image.len(),
            });
        }
        self.bytes[start..end].copy_from_slice(image);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
