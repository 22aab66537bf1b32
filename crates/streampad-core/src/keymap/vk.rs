//! Windows Virtual-Key style codes: the canonical key representation used
//! on the wire.
//!
//! The remote endpoint consumes VK codes, so every host key code is
//! translated into this space at the keyboard boundary. Left/right modifier
//! variants are folded into the generic code (e.g. both Ctrl keys become
//! [`VK_CONTROL`]); the modifier bitmask carried with each key command makes
//! the distinction unnecessary.

pub const VK_BACK: u16 = 0x08;
pub const VK_TAB: u16 = 0x09;
pub const VK_RETURN: u16 = 0x0D;
pub const VK_SHIFT: u16 = 0x10;
pub const VK_CONTROL: u16 = 0x11;
/// Alt. The Windows name for the Alt key is "menu".
pub const VK_MENU: u16 = 0x12;
pub const VK_PAUSE: u16 = 0x13;
pub const VK_CAPITAL: u16 = 0x14;
pub const VK_ESCAPE: u16 = 0x1B;
pub const VK_SPACE: u16 = 0x20;
pub const VK_PRIOR: u16 = 0x21;
pub const VK_NEXT: u16 = 0x22;
pub const VK_END: u16 = 0x23;
pub const VK_HOME: u16 = 0x24;
pub const VK_LEFT: u16 = 0x25;
pub const VK_UP: u16 = 0x26;
pub const VK_RIGHT: u16 = 0x27;
pub const VK_DOWN: u16 = 0x28;
pub const VK_SNAPSHOT: u16 = 0x2C;
pub const VK_INSERT: u16 = 0x2D;
pub const VK_DELETE: u16 = 0x2E;

/// Digits '0'–'9' occupy 0x30–0x39, matching ASCII.
pub const VK_0: u16 = 0x30;
/// Letters 'A'–'Z' occupy 0x41–0x5A, matching ASCII.
pub const VK_A: u16 = 0x41;
pub const VK_Z: u16 = 0x5A;

/// Left Meta (Windows/Super/Command).
pub const VK_LWIN: u16 = 0x5B;

pub const VK_NUMPAD0: u16 = 0x60;
pub const VK_MULTIPLY: u16 = 0x6A;
pub const VK_ADD: u16 = 0x6B;
pub const VK_SUBTRACT: u16 = 0x6D;
pub const VK_DECIMAL: u16 = 0x6E;
pub const VK_DIVIDE: u16 = 0x6F;

/// Function keys F1–F12 occupy 0x70–0x7B.
pub const VK_F1: u16 = 0x70;

pub const VK_NUMLOCK: u16 = 0x90;
pub const VK_SCROLL: u16 = 0x91;

pub const VK_OEM_1: u16 = 0xBA; // ';'
pub const VK_OEM_PLUS: u16 = 0xBB; // '='
pub const VK_OEM_COMMA: u16 = 0xBC; // ','
pub const VK_OEM_MINUS: u16 = 0xBD; // '-'
pub const VK_OEM_PERIOD: u16 = 0xBE; // '.'
pub const VK_OEM_2: u16 = 0xBF; // '/'
pub const VK_OEM_3: u16 = 0xC0; // '`'
pub const VK_OEM_4: u16 = 0xDB; // '['
pub const VK_OEM_5: u16 = 0xDC; // '\'
pub const VK_OEM_6: u16 = 0xDD; // ']'
pub const VK_OEM_7: u16 = 0xDE; // '\''
