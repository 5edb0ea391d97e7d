pub mod cpu;
pub mod mmu;

pub use cpu::{Bus, Cpu, Flags, RegisterPair, Registers};
pub use mmu::{AddressSpace, Cartridge, MemorySnapshot, MmuConfig, RamFill};

/// Address the boot ROM hands control to once it finishes.
pub const ENTRY_POINT: u16 = 0x0100;
