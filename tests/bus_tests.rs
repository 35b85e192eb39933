use cgb_bus_core::hardware::cartridge::Cartridge;
use cgb_bus_core::Bus;
use pretty_assertions::assert_eq;

fn fresh_bus() -> Bus {
    Bus::new(Cartridge::load_rom(vec![0; 0x8000]))
}

#[test]
fn s1_vram_bank_switching() {
    let mut bus = fresh_bus();
    bus.set8(0xFF4F, 0x01);
    bus.set8(0x8000, 0xAA);
    bus.set8(0xFF4F, 0x00);
    bus.set8(0x8000, 0xBB);
    assert_eq!(0xBB, bus.get8(0x8000));
    bus.set8(0xFF4F, 0x01);
    assert_eq!(0xAA, bus.get8(0x8000));
    assert_eq!(0xFF, bus.get8(0xFF4F));
}

#[test]
fn s2_palette_auto_increment() {
    let mut bus = fresh_bus();
    bus.set8(0xFF68, 0x80);
    bus.set8(0xFF69, 0x11);
    bus.set8(0xFF69, 0x22);
    assert_eq!(0x82, bus.get8(0xFF68));
}

#[test]
fn s3_ly_lyc_interrupt_on_write() {
    let mut bus = fresh_bus();
    bus.set8(0xFF40, 0x80); // LCD enable
    bus.set8(0xFF45, 0x10); // LYC = 0x10
    bus.set8(0xFF41, 0x40); // STAT: LYC source enabled
    bus.interrupts.write_ie(0x02); // IE: LCD bit
    bus.gpu.reset_ly();
    for _ in 0..0x0F {
        bus.gpu.inc_ly();
    }
    assert_eq!(0x0F, bus.gpu.get_ly());

    // drive LY to 0x10 through the GPU directly (LY itself can't be CPU-written) and let a
    // GPU-memory bus write re-run the gate, mirroring how a real frame advances LY then
    // touches another GPU register on the same line.
    bus.gpu.inc_ly();
    bus.set8(0xFF42, 0); // any GPU-memory write trips the gate

    assert_ne!(0, bus.gpu.lcd.stat.bits() & 0x04);
    assert_ne!(0, bus.interrupts.interrupts_pending() & 0x02);
}

#[test]
fn s4_oam_cap() {
    let mut bus = fresh_bus();
    for i in 0..40u16 {
        let base = 0xFE00 + i * 4;
        bus.set8(base, 16);
    }
    assert_eq!(10, bus.gpu.scan_oam(0, 8).len());
}

#[test]
fn s5_sprite_row_with_both_flips() {
    let mut bus = fresh_bus();
    bus.set8(0xFE00, 16);
    bus.set8(0xFE01, 32);
    bus.set8(0xFE02, 0x01);
    bus.set8(0xFE03, 0x60);
    bus.set8(0x8000 + 0x01 * 16 + 7 * 2, 0b10110000);
    bus.set8(0x8000 + 0x01 * 16 + 7 * 2 + 1, 0b00001101);

    let objs = bus.gpu.scan_obj(0);
    assert_eq!(1, objs.len());
    assert_eq!(0b10110000, objs[0].p1);
    assert_eq!(0b00001101, objs[0].p2);
}

#[test]
fn s6_echo_ram_mirror() {
    let mut bus = fresh_bus();
    bus.set8(0xC123, 0x5A);
    assert_eq!(0x5A, bus.get8(0xE123));
    bus.set8(0xE200, 0x77);
    assert_eq!(0x77, bus.get8(0xC200));
}
