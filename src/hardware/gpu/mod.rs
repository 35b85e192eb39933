//! The GPU memory subsystem: VRAM banks, OAM, LCD registers, CGB palettes, and the mode
//! state machine that ties scanline timing to all of the above. Pixel rasterisation itself is
//! out of scope; this module only feeds the renderer the data it needs through `scan_obj` and
//! the tile-fetch helpers.
pub mod lcd_registers;
pub mod oam;
pub mod palette;
pub mod vram;

use crate::addressable::Addressable;
use crate::hardware::gpu::lcd_registers::LcdRegisters;
use crate::hardware::gpu::oam::{Oam, OamEntry};
use crate::hardware::gpu::palette::CgbPalettes;
use crate::hardware::gpu::vram::Vram;

/// LCD mode, tagged with the mode-local data the source carries only while that mode is active
/// rather than as always-present fields.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Mode {
    HBlank { dots_remaining: u16, line_obj_count: u8 },
    VBlank { line_within_vblank: u8 },
    OamScan { dots_remaining: u16 },
    Drawing { dots_remaining: u16, line_obj_count: u8 },
}

impl Mode {
    pub fn code(&self) -> u8 {
        match self {
            Mode::HBlank { .. } => 0,
            Mode::VBlank { .. } => 1,
            Mode::OamScan { .. } => 2,
            Mode::Drawing { .. } => 3,
        }
    }
}

/// A decoded sprite row ready for the renderer: the two bitplane bytes are already
/// x-flipped (or bit-reversed, per the source's inverted convention) so the renderer never
/// has to look at the OAM flags again.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScannedObject {
    pub x_pos: u8,
    pub p1: u8,
    pub p2: u8,
    pub palette: u8,
    pub priority: bool,
}

pub struct GpuMemory {
    pub vram: Vram,
    pub oam: Oam,
    pub lcd: LcdRegisters,
    pub palettes: CgbPalettes,
    mode: Mode,
}

impl GpuMemory {
    pub fn new() -> Self {
        GpuMemory {
            vram: Vram::new(),
            oam: Oam::new(),
            lcd: LcdRegisters::new(),
            palettes: CgbPalettes::new(),
            mode: Mode::VBlank { line_within_vblank: 0 },
        }
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    /// Replaces the mode tag without touching STAT; used for countdowns within a mode.
    pub fn update_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Replaces the mode tag and projects its 2-bit code into STAT bits 1-0.
    pub fn change_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.lcd.stat.set_mode_code(mode.code());
    }

    pub fn get_ly(&self) -> u8 {
        self.lcd.ly
    }

    pub fn inc_ly(&mut self) {
        self.lcd.inc_ly();
    }

    pub fn reset_ly(&mut self) {
        self.lcd.reset_ly();
    }

    pub fn reset_wlc(&mut self) {
        self.lcd.reset_wlc();
    }

    pub fn inc_wlc(&mut self) {
        self.lcd.inc_wlc();
    }

    /// Re-evaluates STAT bit 2 against the current LY/LYC pair; returns whether the comparison
    /// rose from false to true (the bus-level interrupt gate uses this to decide whether to
    /// raise the LCD interrupt).
    pub fn cmp_lyc(&mut self) -> bool {
        self.lcd.cmp_lyc()
    }

    pub fn lyc_interrupt_source_enabled(&self) -> bool {
        self.lcd.stat.contains(lcd_registers::LcdStatus::LYC_SOURCE)
    }

    /// Scans OAM for sprites visible on scanline `ly` given the current object size (8 or 16).
    /// Stops after 10 matches. The returned order is the reverse of address order, matching the
    /// prepend-based accumulation of the source this was adapted from; callers must not rely on
    /// it for rendering priority (that's resolved by `x_pos` downstream).
    pub fn scan_oam(&self, ly: u8, size: u8) -> Vec<OamEntry> {
        let mut matches = Vec::with_capacity(10);
        for entry in self.oam.entries() {
            if matches.len() >= 10 {
                break;
            }
            let screen_y = entry.y_pos as i16 - 16;
            let ly = ly as i16;
            if ly >= screen_y && ly < screen_y + size as i16 {
                matches.push(*entry);
            }
        }
        matches.reverse();
        matches
    }

    /// One step up from `scan_oam`: decodes each survivor's flags and fetches its tile row,
    /// producing renderer-ready `ScannedObject`s.
    pub fn scan_obj(&self, ly: u8) -> Vec<ScannedObject> {
        let size = self.lcd.lcdc.obj_size();
        self.scan_oam(ly, size)
            .into_iter()
            .map(|entry| self.decode_object(entry, ly, size))
            .collect()
    }

    fn decode_object(&self, entry: OamEntry, ly: u8, size: u8) -> ScannedObject {
        let priority = entry.flags & 0x80 != 0;
        let y_flip = entry.flags & 0x40 != 0;
        let x_flip = entry.flags & 0x20 != 0;
        let bank_source = (entry.flags >> 3) & 1;
        let palette = entry.flags & 0x07;

        let line_in_sprite = (ly as i16 - (entry.y_pos as i16 - 16)) as u8;
        let row = if y_flip { size - 1 - line_in_sprite } else { line_in_sprite };

        let (mut p1, mut p2) = self.vram.get_obj_tile_data_row(entry.tile_index, size, row, bank_source);
        if !x_flip {
            p1 = p1.reverse_bits();
            p2 = p2.reverse_bits();
        }

        ScannedObject {
            x_pos: entry.x_pos,
            p1,
            p2,
            palette,
            priority,
        }
    }
}

impl Addressable for GpuMemory {
    fn in_range(&self, address: u16) -> bool {
        self.vram.in_range(address)
            || self.oam.in_range(address)
            || LcdRegisters::in_range(address)
            || CgbPalettes::in_range(address)
    }

    fn read(&self, address: u16) -> u8 {
        if self.vram.in_range(address) {
            self.vram.read(address)
        } else if self.oam.in_range(address) {
            self.oam.read(address)
        } else if LcdRegisters::in_range(address) {
            self.lcd.read(address)
        } else if CgbPalettes::in_range(address) {
            self.palettes.read(address)
        } else {
            unreachable!("GpuMemory asked for out-of-range address 0x{:04X}", address)
        }
    }

    fn write(&mut self, address: u16, value: u8) {
        if self.vram.in_range(address) {
            self.vram.write(address, value)
        } else if self.oam.in_range(address) {
            self.oam.write(address, value)
        } else if LcdRegisters::in_range(address) {
            self.lcd.write(address, value)
        } else if CgbPalettes::in_range(address) {
            self.palettes.write(address, value)
        } else {
            unreachable!("GpuMemory asked to write out-of-range address 0x{:04X}", address)
        }
    }
}
