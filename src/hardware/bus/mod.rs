//! The unified address-bus dispatcher: the single entry point every other device goes through
//! to read or write a byte of the console's memory map. Ties the GPU's LY==LYC comparison to
//! the interrupt gate on every GPU-memory write, which is what makes STAT interrupts fire
//! without a CPU in the loop.
pub mod dma;
pub mod hram;
pub mod wram;

use log::warn;

use crate::addressable::Addressable;
use crate::hardware::bus::dma::{HdmaRegisters, OamDma};
use crate::hardware::bus::hram::Hram;
use crate::hardware::bus::wram::Wram;
use crate::hardware::cartridge::Cartridge;
use crate::hardware::gpu::GpuMemory;
use crate::io::audio::AudioRegisters;
use crate::io::interrupts::{Interrupts, INTERRUPT_ENABLE, INTERRUPT_FLAG};
use crate::io::joypad::{JoyPad, JOYPAD_REGISTER};
use crate::io::serial::SerialRegisters;
use crate::io::timer::TimerRegisters;

const ECHO_START: u16 = 0xE000;
const ECHO_END: u16 = 0xFDFF;
const ECHO_OFFSET: u16 = 0x2000;

/// Everything the console's 16-bit address space can reach, wired together behind one
/// dispatcher. Owns no execution state of its own; it is purely the memory backing other
/// drivers (CPU, PPU timing loop, host frontend) read and write through.
pub struct Bus {
    pub cartridge: Cartridge,
    pub gpu: GpuMemory,
    pub wram: Wram,
    pub hram: Hram,
    pub joypad: JoyPad,
    pub serial: SerialRegisters,
    pub timer: TimerRegisters,
    pub audio: AudioRegisters,
    pub oam_dma: OamDma,
    pub hdma: HdmaRegisters,
    pub interrupts: Interrupts,
}

impl Bus {
    pub fn new(cartridge: Cartridge) -> Self {
        Bus {
            cartridge,
            gpu: GpuMemory::new(),
            wram: Wram::new(),
            hram: Hram::new(),
            joypad: JoyPad::new(),
            serial: SerialRegisters::new(),
            timer: TimerRegisters::new(),
            audio: AudioRegisters::new(),
            oam_dma: OamDma::new(),
            hdma: HdmaRegisters::new(),
            interrupts: Interrupts::new(),
        }
    }

    pub fn get8(&self, address: u16) -> u8 {
        if self.cartridge.in_range(address) {
            self.cartridge.read(address)
        } else if self.gpu.in_range(address) {
            self.gpu.read(address)
        } else if self.wram.in_range(address) {
            self.wram.read(address)
        } else if (ECHO_START..=ECHO_END).contains(&address) {
            self.wram.read(address - ECHO_OFFSET)
        } else if address == JOYPAD_REGISTER {
            self.joypad.read()
        } else if SerialRegisters::in_range(address) {
            self.serial.read(address)
        } else if TimerRegisters::in_range(address) {
            self.timer.read(address)
        } else if address == INTERRUPT_FLAG {
            self.interrupts.read_if()
        } else if AudioRegisters::in_range(address) {
            self.audio.read(address)
        } else if self.oam_dma.in_range(address) {
            self.oam_dma.read(address)
        } else if self.hdma.in_range(address) {
            self.hdma.read(address)
        } else if self.hram.in_range(address) {
            self.hram.read(address)
        } else if address == INTERRUPT_ENABLE {
            self.interrupts.read_ie()
        } else {
            warn!("unmapped read at 0x{:04X}", address);
            0xFF
        }
    }

    pub fn set8(&mut self, address: u16, value: u8) {
        if self.cartridge.in_range(address) {
            self.cartridge.write(address, value);
        } else if self.gpu.in_range(address) {
            self.gpu.write(address, value);
            self.reevaluate_lyc_interrupt();
        } else if self.wram.in_range(address) {
            self.wram.write(address, value);
        } else if (ECHO_START..=ECHO_END).contains(&address) {
            self.wram.write(address - ECHO_OFFSET, value);
        } else if address == JOYPAD_REGISTER {
            self.joypad.write(value);
        } else if SerialRegisters::in_range(address) {
            self.serial.write(address, value);
        } else if TimerRegisters::in_range(address) {
            self.timer.write(address, value);
        } else if address == INTERRUPT_FLAG {
            self.interrupts.write_if(value);
        } else if AudioRegisters::in_range(address) {
            self.audio.write(address, value);
        } else if self.oam_dma.in_range(address) {
            self.oam_dma.write(address, value);
        } else if self.hdma.in_range(address) {
            self.hdma.write(address, value);
        } else if self.hram.in_range(address) {
            self.hram.write(address, value);
        } else if address == INTERRUPT_ENABLE {
            self.interrupts.write_ie(value);
        } else {
            warn!("dropped write of 0x{:02X} to unmapped address 0x{:04X}", value, address);
        }
    }

    pub fn get16(&self, address: u16) -> u16 {
        let lo = self.get8(address) as u16;
        let hi = self.get8(address.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub fn set16(&mut self, address: u16, value: u16) {
        self.set8(address, (value & 0xFF) as u8);
        self.set8(address.wrapping_add(1), (value >> 8) as u8);
    }

    /// Re-runs the LY==LYC comparison after a GPU-memory write and raises the LCD interrupt on
    /// a rising edge, provided STAT's LYC-source bit is enabled.
    fn reevaluate_lyc_interrupt(&mut self) {
        let rose = self.gpu.cmp_lyc();
        if rose && self.gpu.lyc_interrupt_source_enabled() {
            self.interrupts.request_lcd();
        }
    }
}
