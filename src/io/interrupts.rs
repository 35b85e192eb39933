//! The IE/IF interrupt-request gate. Raising only ever sets a bit in IF when the matching bit
//! in IE is already enabled, which keeps the invariant `IF & !IE == 0` under exclusive use of
//! `request_*` -- a deliberate simplification versus real hardware (which latches IF
//! unconditionally) in exchange for simpler downstream CPU service logic.
use bitflags::bitflags;

pub const INTERRUPT_FLAG: u16 = 0xFF0F;
pub const INTERRUPT_ENABLE: u16 = 0xFFFF;

bitflags! {
    #[derive(Default)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0b0000_0001;
        const LCD    = 0b0000_0010;
        const TIMER  = 0b0000_0100;
        const SERIAL = 0b0000_1000;
        const JOYPAD = 0b0001_0000;
    }
}

#[derive(Debug, Default)]
pub struct Interrupts {
    ie: InterruptFlags,
    if_: InterruptFlags,
}

impl Interrupts {
    pub fn new() -> Self {
        Interrupts::default()
    }

    pub fn read_ie(&self) -> u8 {
        self.ie.bits()
    }

    pub fn write_ie(&mut self, value: u8) {
        self.ie = InterruptFlags::from_bits_truncate(value);
    }

    pub fn read_if(&self) -> u8 {
        0xE0 | self.if_.bits()
    }

    pub fn write_if(&mut self, value: u8) {
        self.if_ = InterruptFlags::from_bits_truncate(value) & self.ie;
    }

    fn request(&mut self, source: InterruptFlags) {
        if self.ie.contains(source) {
            self.if_.insert(source);
        }
    }

    pub fn request_vblank(&mut self) {
        self.request(InterruptFlags::VBLANK);
    }

    pub fn request_lcd(&mut self) {
        self.request(InterruptFlags::LCD);
    }

    pub fn request_timer(&mut self) {
        self.request(InterruptFlags::TIMER);
    }

    pub fn request_serial(&mut self) {
        self.request(InterruptFlags::SERIAL);
    }

    pub fn request_joypad(&mut self) {
        self.request(InterruptFlags::JOYPAD);
    }

    /// `IE & IF & 0x1F`.
    pub fn interrupts_pending(&self) -> u8 {
        self.ie.bits() & self.if_.bits() & 0x1F
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_is_a_no_op_when_disabled_in_ie() {
        let mut interrupts = Interrupts::new();
        interrupts.request_lcd();
        assert_eq!(0, interrupts.interrupts_pending());
    }

    #[test]
    fn request_sets_if_when_enabled() {
        let mut interrupts = Interrupts::new();
        interrupts.write_ie(InterruptFlags::LCD.bits());
        interrupts.request_lcd();
        assert_eq!(InterruptFlags::LCD.bits(), interrupts.interrupts_pending());
    }

    #[test]
    fn if_never_holds_a_bit_ie_does_not() {
        let mut interrupts = Interrupts::new();
        interrupts.write_ie(InterruptFlags::VBLANK.bits());
        interrupts.write_if(0x1F);
        assert_eq!(InterruptFlags::VBLANK.bits(), interrupts.if_.bits());
    }
}
