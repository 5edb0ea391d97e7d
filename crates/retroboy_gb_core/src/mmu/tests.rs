use std::cell::RefCell;
use std::rc::Rc;

use once_cell::sync::OnceCell;

use super::cartridge::{self, Mbc1, Mbc5, RomOnly, ROM_BANK_SIZE};
use super::init::DMG_IO_DEFAULTS;
use super::map::Region;
use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CartWrite {
    Rom(u16, u8),
    Ram(u16, u8),
}

/// Cartridge double: ROM reads return a pattern derived from the address,
/// RAM is a plain 8 KiB array and every write is recorded.
struct PatternCart {
    ram: Vec<u8>,
    writes: Rc<RefCell<Vec<CartWrite>>>,
}

impl PatternCart {
    fn new() -> (Box<dyn Cartridge>, Rc<RefCell<Vec<CartWrite>>>) {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let cart = PatternCart {
            ram: vec![0; 0x2000],
            writes: Rc::clone(&writes),
        };
        (Box::new(cart), writes)
    }

    fn pattern(addr: u16) -> u8 {
        (addr as u8) ^ ((addr >> 8) as u8) ^ 0x5A
    }
}

impl Cartridge for PatternCart {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0xA000..=0xBFFF => self.ram[(addr - 0xA000) as usize],
            _ => Self::pattern(addr),
        }
    }

    fn write_rom(&mut self, addr: u16, value: u8) {
        self.writes.borrow_mut().push(CartWrite::Rom(addr, value));
    }

    fn write_ram(&mut self, addr: u16, value: u8) {
        self.writes.borrow_mut().push(CartWrite::Ram(addr, value));
        self.ram[(addr - 0xA000) as usize] = value;
    }
}

fn space() -> AddressSpace {
    let _ = env_logger::builder().is_test(true).try_init();
    let (cart, _) = PatternCart::new();
    AddressSpace::new(cart)
}

/// ROM image where every byte of bank `n` holds `n`, with the header bytes
/// patched in bank 0.
fn banked_rom(banks: usize, cart_type: u8, ram_code: u8) -> Vec<u8> {
    let mut rom = vec![0u8; banks * ROM_BANK_SIZE];
    for (bank, chunk) in rom.chunks_mut(ROM_BANK_SIZE).enumerate() {
        chunk.fill(bank as u8);
    }
    rom[0x0147] = cart_type;
    rom[0x0149] = ram_code;
    rom
}

static MBC5_ROM: OnceCell<Vec<u8>> = OnceCell::new();

fn mbc5_rom() -> &'static [u8] {
    // 64 banks, MBC5+RAM+BATTERY, 32 KiB RAM.
    MBC5_ROM.get_or_init(|| banked_rom(64, 0x1B, 0x03))
}

#[test]
fn power_up_io_defaults() {
    let mmu = space();
    for &(offset, value) in DMG_IO_DEFAULTS.iter() {
        let addr = 0xFF00 + offset as u16;
        assert_eq!(mmu.read8(addr), value, "0x{:04X}", addr);
    }
    assert_eq!(mmu.read8(0xFF04), 0x1E);
    assert_eq!(mmu.read8(0xFF05), 0x00);
    assert_eq!(mmu.read8(0xFF47), 0xFC);
    assert_eq!(mmu.read8(0xFFFF), 0x00);
}

#[test]
fn unlisted_io_registers_start_at_zero() {
    let mmu = space();
    for offset in 0x00u16..0x80 {
        let addr = 0xFF00 + offset;
        let listed = DMG_IO_DEFAULTS.iter().any(|&(o, _)| o as u16 == offset);
        if listed || addr == high::VBK || addr == high::SVBK || addr == high::BOOT {
            continue;
        }
        assert_eq!(mmu.read8(addr), 0, "0x{:04X}", addr);
    }
}

#[test]
fn power_up_banks() {
    let mmu = space();
    assert_eq!(mmu.vram_bank(), 0);
    assert_eq!(mmu.wram_bank(), 1);
    assert_eq!(mmu.read8(high::VBK), 0xFE);
    assert_eq!(mmu.read8(high::SVBK), 0xF9);
}

#[test]
fn partition_is_total_and_ordered() {
    let (first_start, _) = Region::ALL[0].bounds();
    let (_, last_end) = Region::ALL[Region::ALL.len() - 1].bounds();
    assert_eq!(first_start, 0x0000);
    assert_eq!(last_end, 0xFFFF);

    for pair in Region::ALL.windows(2) {
        let (_, end) = pair[0].bounds();
        let (start, _) = pair[1].bounds();
        assert_eq!(end as u32 + 1, start as u32, "{:?} -> {:?}", pair[0], pair[1]);
    }

    let mmu = space();
    for addr in 0..=u16::MAX {
        let region = Region::of(addr);
        assert!(region.contains(addr), "0x{:04X} not in {:?}", addr, region);
        let _ = mmu.read8(addr);
    }
}

#[test]
fn cartridge_rom_reads_delegate_verbatim() {
    let mmu = space();
    for addr in [0x0000u16, 0x0100, 0x3FFF, 0x4000, 0x7FFF] {
        assert_eq!(mmu.read8(addr), PatternCart::pattern(addr));
    }
}

#[test]
fn rom_writes_become_cartridge_commands() {
    let (cart, writes) = PatternCart::new();
    let mut mmu = AddressSpace::new(cart);

    mmu.write8(0x2000, 0x05);
    mmu.write8(0x7FFF, 0x01);
    mmu.write8(0xA123, 0x99);

    assert_eq!(
        *writes.borrow(),
        vec![
            CartWrite::Rom(0x2000, 0x05),
            CartWrite::Rom(0x7FFF, 0x01),
            CartWrite::Ram(0xA123, 0x99),
        ]
    );
    // ROM contents are untouched.
    assert_eq!(mmu.read8(0x2000), PatternCart::pattern(0x2000));
    assert_eq!(mmu.read8(0xA123), 0x99);
}

#[test]
fn backing_stores_round_trip() {
    let mut mmu = space();
    let ranges = [
        (0x8000u16, 0x9FFFu16),
        (0xA000, 0xBFFF),
        (0xC000, 0xCFFF),
        (0xD000, 0xDFFF),
        (0xFE00, 0xFE9F),
        (0xFF80, 0xFFFE),
        (0xFFFF, 0xFFFF),
    ];
    for (start, end) in ranges {
        for addr in start..=end {
            for value in [0x00u8, 0x5A, 0xA5, 0xFF] {
                mmu.write8(addr, value);
                assert_eq!(mmu.read8(addr), value, "0x{:04X}", addr);
            }
        }
    }

    for value in 0..=u8::MAX {
        for addr in [0x8000u16, 0xC000, 0xD000, 0xFE00, 0xFF80, 0xFF47] {
            mmu.write8(addr, value);
            assert_eq!(mmu.read8(addr), value);
        }
    }
}

#[test]
fn echo_and_unusable_always_read_ff() {
    let mut mmu = space();
    for addr in (0xE000u16..=0xFDFF).chain(0xFEA0..=0xFEFF) {
        for value in [0x00u8, 0x42] {
            mmu.write8(addr, value);
            assert_eq!(mmu.read8(addr), 0xFF, "0x{:04X}", addr);
        }
    }
}

#[test]
fn echo_is_not_a_mirror() {
    let mut mmu = space();
    mmu.write8(0xC010, 0x11);
    assert_eq!(mmu.read8(0xE010), 0xFF);

    mmu.write8(0xE020, 0x22);
    assert_eq!(mmu.read8(0xC020), 0x00);
}

#[test]
fn vram_banks_are_independent() {
    let mut mmu = space();
    mmu.write8(0x8123, 0xAA);

    mmu.write8(high::VBK, 0x01);
    assert_eq!(mmu.vram_bank(), 1);
    assert_eq!(mmu.read8(high::VBK), 0xFF);
    assert_eq!(mmu.read8(0x8123), 0x00);
    mmu.write8(0x8123, 0xBB);

    mmu.write8(high::VBK, 0x00);
    assert_eq!(mmu.read8(0x8123), 0xAA);
    mmu.write8(high::VBK, 0xFF);
    assert_eq!(mmu.read8(0x8123), 0xBB);
}

#[test]
fn wram_bank_switch_scenario() {
    let mut mmu = space();
    mmu.write8(high::SVBK, 3);
    mmu.write8(0xD050, 0x42);
    assert_eq!(mmu.read8(0xD050), 0x42);

    mmu.write8(high::SVBK, 1);
    assert_eq!(mmu.read8(0xD050), 0x00);

    mmu.write8(high::SVBK, 3);
    assert_eq!(mmu.read8(0xD050), 0x42);
}

#[test]
fn wram_bank_zero_selects_bank_one() {
    let mut mmu = space();
    mmu.write8(0xD000, 0x77);
    mmu.write8(high::SVBK, 0);
    assert_eq!(mmu.wram_bank(), 1);
    assert_eq!(mmu.read8(high::SVBK), 0xF9);
    assert_eq!(mmu.read8(0xD000), 0x77);
    // The fixed bank never aliases the switchable window.
    assert_eq!(mmu.read8(0xC000), 0x00);
}

#[test]
fn every_wram_bank_is_separate() {
    let mut mmu = space();
    mmu.write8(0xC800, 0xC0);
    for bank in 1..=7u8 {
        mmu.write8(high::SVBK, bank);
        mmu.write8(0xDFFF, bank);
        mmu.write8(0xD000, bank.wrapping_mul(0x11));
    }
    for bank in 1..=7u8 {
        mmu.write8(high::SVBK, bank | 0xF8);
        assert_eq!(mmu.wram_bank(), bank);
        assert_eq!(mmu.read8(0xDFFF), bank);
        assert_eq!(mmu.read8(0xD000), bank.wrapping_mul(0x11));
        assert_eq!(mmu.read8(0xC800), 0xC0);
    }
}

#[test]
fn boot_rom_overlays_until_unmapped() {
    let (cart, _) = PatternCart::new();
    let config = MmuConfig::builder().boot_rom(vec![0x31; DMG_BOOT_ROM_SIZE]).build();
    let mut mmu = AddressSpace::with_config(cart, config).unwrap();

    assert!(mmu.boot_rom_mapped());
    assert_eq!(mmu.read8(0x0000), 0x31);
    assert_eq!(mmu.read8(0x00FF), 0x31);
    assert_eq!(mmu.read8(0x0100), PatternCart::pattern(0x0100));
    assert_eq!(mmu.read8(high::BOOT), 0xFE);

    mmu.write8(high::BOOT, 0x00);
    assert!(mmu.boot_rom_mapped());

    mmu.write8(high::BOOT, 0x01);
    assert!(!mmu.boot_rom_mapped());
    assert_eq!(mmu.read8(0x0000), PatternCart::pattern(0x0000));
    assert_eq!(mmu.read8(high::BOOT), 0xFF);
}

#[test]
fn cgb_boot_rom_leaves_header_visible() {
    let mut mmu = space();
    mmu.load_boot_rom(&[0x99; CGB_BOOT_ROM_SIZE]).unwrap();
    assert_eq!(mmu.read8(0x0000), 0x99);
    assert_eq!(mmu.read8(0x0150), PatternCart::pattern(0x0150));
    assert_eq!(mmu.read8(0x0200), 0x99);
    assert_eq!(mmu.read8(0x08FF), 0x99);
    assert_eq!(mmu.read8(0x0900), PatternCart::pattern(0x0900));
}

#[test]
fn boot_rom_with_wrong_size_is_rejected() {
    let (cart, _) = PatternCart::new();
    let config = MmuConfig::builder().boot_rom(vec![0; 300]).build();
    let err = match AddressSpace::with_config(cart, config) {
        Ok(_) => panic!("300-byte boot ROM accepted"),
        Err(err) => err,
    };
    assert!(format!("{:#}", err).contains("300"));
}

#[test]
fn seeded_ram_fill_is_deterministic() {
    let build = |seed| {
        let (cart, _) = PatternCart::new();
        let config = MmuConfig::builder().ram_fill(RamFill::Seeded(seed)).build();
        AddressSpace::with_config(cart, config).unwrap().snapshot()
    };
    let a = build(0xC0DE);
    let b = build(0xC0DE);
    assert_eq!(a, b);
    assert!(a.wram.iter().any(|&byte| byte != 0));
    assert_ne!(a.wram, build(1).wram);
    // I/O defaults do not depend on the fill.
    assert_eq!(a.io, space().snapshot().io);
}

#[test]
fn snapshot_reflects_live_state() {
    let mut mmu = space();
    mmu.write8(high::VBK, 1);
    mmu.write8(0x8000, 0x12);
    mmu.write8(high::SVBK, 5);
    mmu.write8(0xD001, 0x34);
    mmu.write8(0xFE00, 0x56);

    let snap = mmu.snapshot();
    assert_eq!(snap.vram_bank, 1);
    assert_eq!(snap.wram_bank, 5);
    assert_eq!(snap.vram[0x2000], 0x12);
    assert_eq!(snap.wram[5 * 0x1000 + 1], 0x34);
    assert_eq!(snap.oam[0], 0x56);
    assert_eq!(snap.io[0x47], 0xFC);

    mmu.write8(0x8000, 0xFF);
    assert_eq!(snap.vram[0x2000], 0x12);
}

#[test]
fn bus_words_are_little_endian() {
    let mut mmu = space();
    let bus: &mut dyn Bus = &mut mmu;
    bus.write16(0xC100, 0xBEEF);
    assert_eq!(bus.read8(0xC100), 0xEF);
    assert_eq!(bus.read8(0xC101), 0xBE);
    assert_eq!(bus.read16(0xC100), 0xBEEF);
}

#[test]
fn from_rom_rejects_bad_images() {
    assert!(cartridge::from_rom(&[0u8; 0x100]).is_err());
    assert!(cartridge::from_rom(&vec![0u8; ROM_BANK_SIZE + 1]).is_err());

    let unsupported = banked_rom(2, 0xFC, 0x00);
    let err = cartridge::from_rom(&unsupported).err().unwrap();
    assert!(err.to_string().contains("0xFC"));

    let oversized = banked_rom(4, 0x00, 0x00);
    assert!(cartridge::from_rom(&oversized).is_err());
}

#[test]
fn rom_only_maps_flat_and_ignores_writes() {
    let rom = banked_rom(2, 0x00, 0x00);
    let mut mmu = AddressSpace::new(cartridge::from_rom(&rom).unwrap());
    assert_eq!(mmu.read8(0x0000), 0x00);
    assert_eq!(mmu.read8(0x4000), 0x01);

    mmu.write8(0x2000, 0x01);
    assert_eq!(mmu.read8(0x4000), 0x01);
    // No RAM on a plain ROM-only cartridge.
    mmu.write8(0xA000, 0x12);
    assert_eq!(mmu.read8(0xA000), 0xFF);

    let mut with_ram = RomOnly::new(&rom, 1).unwrap();
    with_ram.write_ram(0xA000, 0x12);
    assert_eq!(with_ram.read(0xA000), 0x12);
}

#[test]
fn mbc1_bank_select_through_address_space() {
    let rom = banked_rom(8, 0x03, 0x03);
    let mut mmu = AddressSpace::new(cartridge::from_rom(&rom).unwrap());

    assert_eq!(mmu.read8(0x4000), 1);
    mmu.write8(0x2000, 0x05);
    assert_eq!(mmu.read8(0x4000), 5);
    // Bank 0 selects bank 1.
    mmu.write8(0x2000, 0x00);
    assert_eq!(mmu.read8(0x4000), 1);
    // Out-of-range banks wrap.
    mmu.write8(0x2000, 0x09);
    assert_eq!(mmu.read8(0x4000), 1);

    // RAM is disabled until 0x0A is written.
    assert_eq!(mmu.read8(0xA000), 0xFF);
    mmu.write8(0xA000, 0x12);
    mmu.write8(0x0000, 0x0A);
    assert_eq!(mmu.read8(0xA000), 0xFF);
    mmu.write8(0xA000, 0x12);
    assert_eq!(mmu.read8(0xA000), 0x12);
}

#[test]
fn mbc1_advanced_mode_banks_ram() {
    let rom = banked_rom(4, 0x03, 0x03);
    let mut cart = Mbc1::new(&rom, 4);
    cart.write_rom(0x0000, 0x0A);
    cart.write_ram(0xA000, 0x10);

    cart.write_rom(0x6000, 0x01);
    cart.write_rom(0x4000, 0x02);
    assert_eq!(cart.ram_bank(), 2);
    assert_eq!(cart.read(0xA000), 0xFF);
    cart.write_ram(0xA000, 0x20);

    cart.write_rom(0x6000, 0x00);
    assert_eq!(cart.ram_bank(), 0);
    assert_eq!(cart.read(0xA000), 0x10);
}

#[test]
fn mbc5_banks_rom_and_ram() {
    let mut mmu = AddressSpace::new(cartridge::from_rom(mbc5_rom()).unwrap());

    mmu.write8(0x2000, 0x00);
    assert_eq!(mmu.read8(0x4000), 0);
    mmu.write8(0x2000, 0x2A);
    assert_eq!(mmu.read8(0x4000), 0x2A);
    assert_eq!(mmu.read8(0x0000), 0);

    mmu.write8(0x0000, 0x0A);
    for bank in 0..4u8 {
        mmu.write8(0x4000, bank);
        mmu.write8(0xB000, 0xE0 | bank);
    }
    for bank in 0..4u8 {
        mmu.write8(0x4000, bank);
        assert_eq!(mmu.read8(0xB000), 0xE0 | bank);
    }
    // Banks past the end clamp to the last one.
    mmu.write8(0x4000, 0x0F);
    assert_eq!(mmu.read8(0xB000), 0xE3);
}

#[test]
fn mbc5_ninth_bank_bit_wraps_on_small_roms() {
    let mut cart = Mbc5::new(mbc5_rom(), 0);
    cart.write_rom(0x2000, 0x03);
    cart.write_rom(0x3000, 0x01);
    assert_eq!(cart.rom_bank(), (0x103 % 64) as usize);
    assert_eq!(cart.read(0x4000), (0x103 % 64) as u8);
}
