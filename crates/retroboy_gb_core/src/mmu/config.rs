use typed_builder::TypedBuilder;

/// Power-on contents of work RAM and high RAM.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RamFill {
    #[default]
    Zero,
    /// Deterministic pseudo-random bytes from the given seed.
    Seeded(u64),
}

/// Construction options for [`AddressSpace`](super::AddressSpace).
///
/// ```
/// use retroboy_gb_core::{MmuConfig, RamFill};
///
/// let config = MmuConfig::builder().ram_fill(RamFill::Seeded(7)).build();
/// assert!(config.boot_rom.is_none());
/// ```
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct MmuConfig {
    /// Boot ROM image mapped over the start of cartridge ROM.
    #[builder(default, setter(strip_option))]
    pub boot_rom: Option<Vec<u8>>,
    #[builder(default)]
    pub ram_fill: RamFill,
}
