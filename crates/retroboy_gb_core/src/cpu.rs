mod alu;
mod bus;
mod flags;
mod init;
mod regs;

pub use bus::Bus;
pub use flags::Flags;
pub use regs::{RegisterPair, Registers, AF_MASK};

/// Game Boy CPU (LR35902) state.
///
/// Only the register file and the flag helpers live here. Opcode decode and
/// execution are driven from outside through the public registers and the
/// [`Bus`] trait.
#[derive(Clone, Copy, Debug)]
pub struct Cpu {
    pub regs: Registers,
}
