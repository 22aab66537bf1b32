//! Android `KeyEvent` key code → VK code translation table.
//!
//! Reference: `android.view.KeyEvent` KEYCODE_* values. Keys with no VK
//! equivalent translate to 0 and are passed through to host default
//! handling.

use super::vk;

// Android KEYCODE_* values referenced by the table.
const KEYCODE_0: u16 = 7;
const KEYCODE_9: u16 = 16;
const KEYCODE_DPAD_UP: u16 = 19;
const KEYCODE_DPAD_DOWN: u16 = 20;
const KEYCODE_DPAD_LEFT: u16 = 21;
const KEYCODE_DPAD_RIGHT: u16 = 22;
const KEYCODE_A: u16 = 29;
const KEYCODE_Z: u16 = 54;
const KEYCODE_COMMA: u16 = 55;
const KEYCODE_PERIOD: u16 = 56;
const KEYCODE_ALT_LEFT: u16 = 57;
const KEYCODE_ALT_RIGHT: u16 = 58;
const KEYCODE_SHIFT_LEFT: u16 = 59;
const KEYCODE_SHIFT_RIGHT: u16 = 60;
const KEYCODE_TAB: u16 = 61;
const KEYCODE_SPACE: u16 = 62;
const KEYCODE_ENTER: u16 = 66;
const KEYCODE_DEL: u16 = 67;
const KEYCODE_GRAVE: u16 = 68;
const KEYCODE_MINUS: u16 = 69;
const KEYCODE_EQUALS: u16 = 70;
const KEYCODE_LEFT_BRACKET: u16 = 71;
const KEYCODE_RIGHT_BRACKET: u16 = 72;
const KEYCODE_BACKSLASH: u16 = 73;
const KEYCODE_SEMICOLON: u16 = 74;
const KEYCODE_APOSTROPHE: u16 = 75;
const KEYCODE_SLASH: u16 = 76;
const KEYCODE_PAGE_UP: u16 = 92;
const KEYCODE_PAGE_DOWN: u16 = 93;
const KEYCODE_ESCAPE: u16 = 111;
const KEYCODE_FORWARD_DEL: u16 = 112;
const KEYCODE_CTRL_LEFT: u16 = 113;
const KEYCODE_CTRL_RIGHT: u16 = 114;
const KEYCODE_CAPS_LOCK: u16 = 115;
const KEYCODE_SCROLL_LOCK: u16 = 116;
const KEYCODE_META_LEFT: u16 = 117;
const KEYCODE_META_RIGHT: u16 = 118;
const KEYCODE_SYSRQ: u16 = 120;
const KEYCODE_BREAK: u16 = 121;
const KEYCODE_MOVE_HOME: u16 = 122;
const KEYCODE_MOVE_END: u16 = 123;
const KEYCODE_INSERT: u16 = 124;
const KEYCODE_F1: u16 = 131;
const KEYCODE_F12: u16 = 142;
const KEYCODE_NUM_LOCK: u16 = 143;
const KEYCODE_NUMPAD_0: u16 = 144;
const KEYCODE_NUMPAD_9: u16 = 153;
const KEYCODE_NUMPAD_DIVIDE: u16 = 154;
const KEYCODE_NUMPAD_MULTIPLY: u16 = 155;
const KEYCODE_NUMPAD_SUBTRACT: u16 = 156;
const KEYCODE_NUMPAD_ADD: u16 = 157;
const KEYCODE_NUMPAD_DOT: u16 = 158;
const KEYCODE_NUMPAD_ENTER: u16 = 160;

/// Translates an Android key code to a VK code; 0 means unmapped.
pub fn keycode_to_vk(keycode: u16) -> u16 {
    match keycode {
        KEYCODE_0..=KEYCODE_9 => vk::VK_0 + (keycode - KEYCODE_0),
        KEYCODE_A..=KEYCODE_Z => vk::VK_A + (keycode - KEYCODE_A),
        KEYCODE_F1..=KEYCODE_F12 => vk::VK_F1 + (keycode - KEYCODE_F1),
        KEYCODE_NUMPAD_0..=KEYCODE_NUMPAD_9 => vk::VK_NUMPAD0 + (keycode - KEYCODE_NUMPAD_0),

        KEYCODE_DPAD_UP => vk::VK_UP,
        KEYCODE_DPAD_DOWN => vk::VK_DOWN,
        KEYCODE_DPAD_LEFT => vk::VK_LEFT,
        KEYCODE_DPAD_RIGHT => vk::VK_RIGHT,

        KEYCODE_COMMA => vk::VK_OEM_COMMA,
        KEYCODE_PERIOD => vk::VK_OEM_PERIOD,
        KEYCODE_ALT_LEFT | KEYCODE_ALT_RIGHT => vk::VK_MENU,
        KEYCODE_SHIFT_LEFT | KEYCODE_SHIFT_RIGHT => vk::VK_SHIFT,
        KEYCODE_CTRL_LEFT | KEYCODE_CTRL_RIGHT => vk::VK_CONTROL,
        KEYCODE_META_LEFT | KEYCODE_META_RIGHT => vk::VK_LWIN,

        KEYCODE_TAB => vk::VK_TAB,
        KEYCODE_SPACE => vk::VK_SPACE,
        KEYCODE_ENTER => vk::VK_RETURN,
        KEYCODE_DEL => vk::VK_BACK,
        KEYCODE_GRAVE => vk::VK_OEM_3,
        KEYCODE_MINUS => vk::VK_OEM_MINUS,
        KEYCODE_EQUALS => vk::VK_OEM_PLUS,
        KEYCODE_LEFT_BRACKET => vk::VK_OEM_4,
        KEYCODE_RIGHT_BRACKET => vk::VK_OEM_6,
        KEYCODE_BACKSLASH => vk::VK_OEM_5,
        KEYCODE_SEMICOLON => vk::VK_OEM_1,
        KEYCODE_APOSTROPHE => vk::VK_OEM_7,
        KEYCODE_SLASH => vk::VK_OEM_2,
        KEYCODE_PAGE_UP => vk::VK_PRIOR,
        KEYCODE_PAGE_DOWN => vk::VK_NEXT,
        KEYCODE_ESCAPE => vk::VK_ESCAPE,
        KEYCODE_FORWARD_DEL => vk::VK_DELETE,
        KEYCODE_CAPS_LOCK => vk::VK_CAPITAL,
        KEYCODE_SCROLL_LOCK => vk::VK_SCROLL,
        KEYCODE_SYSRQ => vk::VK_SNAPSHOT,
        KEYCODE_BREAK => vk::VK_PAUSE,
        KEYCODE_MOVE_HOME => vk::VK_HOME,
        KEYCODE_MOVE_END => vk::VK_END,
        KEYCODE_INSERT => vk::VK_INSERT,
        KEYCODE_NUM_LOCK => vk::VK_NUMLOCK,
        KEYCODE_NUMPAD_DIVIDE => vk::VK_DIVIDE,
        KEYCODE_NUMPAD_MULTIPLY => vk::VK_MULTIPLY,
        KEYCODE_NUMPAD_SUBTRACT => vk::VK_SUBTRACT,
        KEYCODE_NUMPAD_ADD => vk::VK_ADD,
        KEYCODE_NUMPAD_DOT => vk::VK_DECIMAL,
        KEYCODE_NUMPAD_ENTER => vk::VK_RETURN,

        _ => 0,
    }
}
