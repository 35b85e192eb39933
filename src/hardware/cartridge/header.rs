use std::str::from_utf8;

pub const HEADER_START: u16 = 0x0100;
pub const HEADER_END: u16 = 0x014F;

/// The handful of header fields this core actually cares about. Mapper-relevant fields
/// (cartridge type, ROM/RAM size codes) are the cartridge mapper's concern and out of scope
/// here; we only keep what identifies the ROM for logging purposes.
#[derive(Debug, Default)]
pub struct CartridgeHeader {
    /// Upper case ASCII title, zero-trimmed. CGB carts use up to 15 characters for this field.
    pub title: String,
    /// Whether byte 0x143 marks this cartridge as (at least) CGB-aware.
    pub cgb_flag: bool,
}

impl CartridgeHeader {
    pub fn new(rom: &[u8]) -> Self {
        CartridgeHeader {
            title: read_title(rom),
            cgb_flag: read_cgb_flag(rom),
        }
    }
}

fn read_title(rom: &[u8]) -> String {
    if rom.len() <= 0x13E {
        return String::new();
    }
    from_utf8(&rom[0x134..=0x13E])
        .unwrap_or_default()
        .trim_matches(char::from(0))
        .to_owned()
}

fn read_cgb_flag(rom: &[u8]) -> bool {
    rom.get(0x143).map_or(false, |&b| b == 0x80 || b == 0xC0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_title_trimmed_of_padding() {
        let mut rom = vec![0u8; 0x150];
        for (i, b) in b"Hello Wor".iter().enumerate() {
            rom[0x134 + i] = *b;
        }
        assert_eq!("Hello Wor", read_title(&rom));
    }

    #[test]
    fn recognises_cgb_flag() {
        let mut rom = vec![0u8; 0x150];
        rom[0x143] = 0x80;
        assert!(read_cgb_flag(&rom));
        rom[0x143] = 0x00;
        assert!(!read_cgb_flag(&rom));
    }
}
