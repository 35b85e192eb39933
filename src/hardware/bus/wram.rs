//! 4 KiB fixed bank 0 plus 7 switchable banks (CGB mode), mirrored by the bus into echo RAM.
use crate::addressable::Addressable;

pub const WRAM_BANK_00_START: u16 = 0xC000;
pub const WRAM_BANK_00_END: u16 = 0xCFFF;
pub const WRAM_BANK_NN_START: u16 = 0xD000;
pub const WRAM_BANK_NN_END: u16 = 0xDFFF;
pub const WRAM_BANK_SELECT: u16 = 0xFF70;

pub const WRAM_BANK_SIZE: usize = 0x1000;
pub const WRAM_SIZE: usize = WRAM_BANK_SIZE * 8;

#[derive(Debug)]
pub struct Wram {
    memory: [u8; WRAM_SIZE],
    internal_bank_select: usize,
    bank_select: u8,
}

impl Wram {
    pub fn new() -> Self {
        Wram {
            memory: [0; WRAM_SIZE],
            internal_bank_select: 1,
            bank_select: 1,
        }
    }

    fn read_bank_0(&self, address: u16) -> u8 {
        self.memory[(address - WRAM_BANK_00_START) as usize]
    }

    fn read_bank_n(&self, address: u16) -> u8 {
        self.memory[self.internal_bank_select * WRAM_BANK_SIZE + (address - WRAM_BANK_NN_START) as usize]
    }

    fn write_bank_0(&mut self, address: u16, value: u8) {
        self.memory[(address - WRAM_BANK_00_START) as usize] = value;
    }

    fn write_bank_n(&mut self, address: u16, value: u8) {
        self.memory[self.internal_bank_select * WRAM_BANK_SIZE + (address - WRAM_BANK_NN_START) as usize] = value;
    }

    fn read_bank_select(&self) -> u8 {
        0xF8 | self.bank_select
    }

    fn write_bank_select(&mut self, value: u8) {
        self.bank_select = value & 0x7;
        self.internal_bank_select = self.bank_select as usize;

        if self.internal_bank_select == 0 {
            self.internal_bank_select = 1;
        }
    }
}

impl Addressable for Wram {
    fn in_range(&self, address: u16) -> bool {
        (WRAM_BANK_00_START..=WRAM_BANK_NN_END).contains(&address) || address == WRAM_BANK_SELECT
    }

    fn read(&self, address: u16) -> u8 {
        match address {
            WRAM_BANK_00_START..=WRAM_BANK_00_END => self.read_bank_0(address),
            WRAM_BANK_NN_START..=WRAM_BANK_NN_END => self.read_bank_n(address),
            WRAM_BANK_SELECT => self.read_bank_select(),
            _ => unreachable!("Wram asked for out-of-range address 0x{:04X}", address),
        }
    }

    fn write(&mut self, address: u16, value: u8) {
        match address {
            WRAM_BANK_00_START..=WRAM_BANK_00_END => self.write_bank_0(address, value),
            WRAM_BANK_NN_START..=WRAM_BANK_NN_END => self.write_bank_n(address, value),
            WRAM_BANK_SELECT => self.write_bank_select(value),
            _ => unreachable!("Wram asked to write out-of-range address 0x{:04X}", address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bank_select_masks_to_zero_becomes_one() {
        let mut wram = Wram::new();
        wram.write_bank_select(0);
        assert_eq!(0xF8, wram.read_bank_select());
    }

    #[test]
    fn switchable_bank_is_independent_storage() {
        let mut wram = Wram::new();
        wram.write(WRAM_BANK_NN_START, 0x11);
        wram.write_bank_select(2);
        wram.write(WRAM_BANK_NN_START, 0x22);
        wram.write_bank_select(1);
        assert_eq!(0x11, wram.read(WRAM_BANK_NN_START));
        wram.write_bank_select(2);
        assert_eq!(0x22, wram.read(WRAM_BANK_NN_START));
    }
}
