//! Joypad register (0xFF00). Actual input polling is the host's concern; this only holds the
//! button/direction state and answers the register read the bus dispatches to it.
use bitflags::bitflags;

pub const JOYPAD_REGISTER: u16 = 0xFF00;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputKey {
    Start,
    Select,
    A,
    B,
    Up,
    Down,
    Left,
    Right,
}

bitflags! {
    #[derive(Default)]
    struct JoypadFlags: u8 {
        const RIGHT_A        = 0b0000_0001;
        const LEFT_B         = 0b0000_0010;
        const UP_SELECT      = 0b0000_0100;
        const DOWN_START     = 0b0000_1000;
        const SELECT_DIRECTIONS = 0b0001_0000;
        const SELECT_BUTTONS = 0b0010_0000;
    }
}

impl InputKey {
    fn flag(&self) -> JoypadFlags {
        match self {
            InputKey::Start | InputKey::Down => JoypadFlags::DOWN_START,
            InputKey::Select | InputKey::Up => JoypadFlags::UP_SELECT,
            InputKey::B | InputKey::Left => JoypadFlags::LEFT_B,
            InputKey::A | InputKey::Right => JoypadFlags::RIGHT_A,
        }
    }

    fn is_direction(&self) -> bool {
        matches!(self, InputKey::Up | InputKey::Down | InputKey::Left | InputKey::Right)
    }
}

#[derive(Debug, Default)]
pub struct JoyPad {
    pressed_buttons: JoypadFlags,
    pressed_directions: JoypadFlags,
    select: JoypadFlags,
}

impl JoyPad {
    pub fn new() -> Self {
        JoyPad::default()
    }

    pub fn press_key(&mut self, key: InputKey) {
        if key.is_direction() {
            self.pressed_directions.insert(key.flag());
        } else {
            self.pressed_buttons.insert(key.flag());
        }
    }

    pub fn release_key(&mut self, key: InputKey) {
        if key.is_direction() {
            self.pressed_directions.remove(key.flag());
        } else {
            self.pressed_buttons.remove(key.flag());
        }
    }

    pub fn read(&self) -> u8 {
        let mut active = JoypadFlags::empty();
        if self.select.contains(JoypadFlags::SELECT_DIRECTIONS) {
            active.insert(self.pressed_directions);
        }
        if self.select.contains(JoypadFlags::SELECT_BUTTONS) {
            active.insert(self.pressed_buttons);
        }
        !(self.select.bits() & 0x30 | active.bits()) | 0xC0
    }

    pub fn write(&mut self, value: u8) {
        self.select = JoypadFlags::from_bits_truncate(!value & 0x30);
    }
}
