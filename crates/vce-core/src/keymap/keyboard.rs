//! Keyboard table.
//!
//! Listed in the order the game enumerates keys (DirectInput scan-code order).
//! Regional and vendor keys the automation layer cannot name are marked
//! [`Unsupported`].

use super::KeyTarget::{self, Mapped, Unsupported};

/// Game keyboard identifier → AutoHotkey key name.
pub const KEYBOARD_TABLE: &[(&str, KeyTarget)] = &[
    // ── Escape, digit row and editing keys ────────────────────────────────────
    ("Key_Escape", Mapped("Escape")),
    ("Key_1", Mapped("1")),
    ("Key_2", Mapped("2")),
    ("Key_3", Mapped("3")),
    ("Key_4", Mapped("4")),
    ("Key_5", Mapped("5")),
    ("Key_6", Mapped("6")),
    ("Key_7", Mapped("7")),
    ("Key_8", Mapped("8")),
    ("Key_9", Mapped("9")),
    ("Key_0", Mapped("0")),
    ("Key_Minus", Mapped("-")),
    ("Key_Equals", Mapped("=")),
    ("Key_Backspace", Mapped("Backspace")),
    ("Key_Tab", Mapped("Tab")),

    // ── Top letter row ────────────────────────────────────────────────────────
    ("Key_Q", Mapped("q")),
    ("Key_W", Mapped("w")),
    ("Key_E", Mapped("e")),
    ("Key_R", Mapped("r")),
    ("Key_T", Mapped("t")),
    ("Key_Y", Mapped("y")),
    ("Key_U", Mapped("u")),
    ("Key_I", Mapped("i")),
    ("Key_O", Mapped("o")),
    ("Key_P", Mapped("p")),
    ("Key_LeftBracket", Mapped("[")),
    ("Key_RightBracket", Mapped("]")),
    ("Key_Enter", Mapped("Enter")),
    ("Key_LeftControl", Mapped("LCtrl")),

    // ── Home row ──────────────────────────────────────────────────────────────
    ("Key_A", Mapped("a")),
    ("Key_S", Mapped("s")),
    ("Key_D", Mapped("d")),
    ("Key_F", Mapped("f")),
    ("Key_G", Mapped("g")),
    ("Key_H", Mapped("h")),
    ("Key_J", Mapped("j")),
    ("Key_K", Mapped("k")),
    ("Key_L", Mapped("l")),
    ("Key_SemiColon", Mapped(";")),
    ("Key_Apostrophe", Mapped("'")),
    ("Key_Grave", Mapped("``")), // backtick, escaped for AutoHotkey
    ("Key_LeftShift", Mapped("LShift")),
    ("Key_BackSlash", Mapped("\\")),

    // ── Bottom row ────────────────────────────────────────────────────────────
    ("Key_Z", Mapped("z")),
    ("Key_X", Mapped("x")),
    ("Key_C", Mapped("c")),
    ("Key_V", Mapped("v")),
    ("Key_B", Mapped("b")),
    ("Key_N", Mapped("n")),
    ("Key_M", Mapped("m")),
    ("Key_Comma", Mapped(",")),
    ("Key_Period", Mapped(".")),
    ("Key_Slash", Mapped("/")),
    ("Key_RightShift", Mapped("RShift")),
    ("Key_Numpad_Multiply", Mapped("NumpadMult")),
    ("Key_LeftAlt", Mapped("LAlt")),
    ("Key_Space", Mapped("Space")),

    // ── Function keys and locks ───────────────────────────────────────────────
    ("Key_CapsLock", Mapped("CapsLock")),
    ("Key_F1", Mapped("F1")),
    ("Key_F2", Mapped("F2")),
    ("Key_F3", Mapped("F3")),
    ("Key_F4", Mapped("F4")),
    ("Key_F5", Mapped("F5")),
    ("Key_F6", Mapped("F6")),
    ("Key_F7", Mapped("F7")),
    ("Key_F8", Mapped("F8")),
    ("Key_F9", Mapped("F9")),
    ("Key_F10", Mapped("F10")),
    ("Key_NumLock", Mapped("NumLock")),
    ("Key_ScrollLock", Mapped("ScrollLock")),

    // ── Numeric keypad ────────────────────────────────────────────────────────
    ("Key_Numpad_7", Mapped("Numpad7")),
    ("Key_Numpad_8", Mapped("Numpad8")),
    ("Key_Numpad_9", Mapped("Numpad9")),
    ("Key_Numpad_Subtract", Mapped("NumpadSub")),
    ("Key_Numpad_4", Mapped("Numpad4")),
    ("Key_Numpad_5", Mapped("Numpad5")),
    ("Key_Numpad_6", Mapped("Numpad6")),
    ("Key_Numpad_Add", Mapped("NumpadAdd")),
    ("Key_Numpad_1", Mapped("Numpad1")),
    ("Key_Numpad_2", Mapped("Numpad2")),
    ("Key_Numpad_3", Mapped("Numpad3")),
    ("Key_Numpad_0", Mapped("Numpad0")),
    ("Key_Numpad_Decimal", Mapped("NumpadDot")),
    ("Key_OEM_102", Unsupported),

    // ── Extended function keys and regional keys ──────────────────────────────
    ("Key_F11", Mapped("F11")),
    ("Key_F12", Mapped("F12")),
    ("Key_F13", Mapped("F13")),
    ("Key_F14", Mapped("F14")),
    ("Key_F15", Mapped("F15")),
    ("Key_Kana", Unsupported),
    ("Key_ABNT_C1", Unsupported),
    ("Key_Convert", Unsupported),
    ("Key_NoConvert", Unsupported),
    ("Key_Yen", Unsupported),
    ("Key_ABNT_C2", Unsupported),
    ("Key_Numpad_Equals", Unsupported),

    // ── Media keys ────────────────────────────────────────────────────────────
    ("Key_PrevTrack", Mapped("Media_Prev")),
    ("Key_AT", Unsupported),
    ("Key_Colon", Unsupported),
    ("Key_Underline", Unsupported),
    ("Key_Kanji", Unsupported),
    ("Key_Stop", Mapped("Media_Stop")),
    ("Key_AX", Unsupported),
    ("Key_Unlabeled", Unsupported),
    ("Key_NextTrack", Mapped("Media_Next")),
    ("Key_Numpad_Enter", Mapped("NumpadEnter")),
    ("Key_RightControl", Mapped("RCtrl")),
    ("Key_Mute", Mapped("Volume_Mute")),
    ("Key_Calculator", Mapped("Launch_App2")),
    ("Key_PlayPause", Mapped("Media_Play_Pause")),
    ("Key_MediaStop", Mapped("Media_Stop")),
    ("Key_VolumeDown", Mapped("Volume_Down")),
    ("Key_VolumeUp", Mapped("Volume_Up")),
    ("Key_WebHome", Mapped("Browser_Home")),
    ("Key_Numpad_Comma", Unsupported),
    ("Key_Numpad_Divide", Mapped("NumpadDiv")),
    ("Key_SYSRQ", Unsupported),

    // ── Right-hand modifiers and navigation cluster ───────────────────────────
    ("Key_RightAlt", Mapped("RAlt")),
    ("Key_Pause", Mapped("Pause")),
    ("Key_Home", Mapped("Home")),
    ("Key_UpArrow", Mapped("Up")),
    ("Key_PageUp", Mapped("PgUp")),
    ("Key_LeftArrow", Mapped("Left")),
    ("Key_RightArrow", Mapped("Right")),
    ("Key_End", Mapped("End")),
    ("Key_DownArrow", Mapped("Down")),
    ("Key_PageDown", Mapped("PgDn")),
    ("Key_Insert", Mapped("Ins")),
    ("Key_Delete", Mapped("Del")),
    ("Key_LeftWin", Mapped("LWin")),
    ("Key_RightWin", Mapped("RWin")),
    ("Key_Apps", Mapped("AppsKey")),

    // ── System and browser keys ───────────────────────────────────────────────
    ("Key_Power", Unsupported),
    ("Key_Sleep", Mapped("Sleep")),
    ("Key_Wake", Unsupported),
    ("Key_WebSearch", Mapped("Browser_Search")),
    ("Key_WebFavourites", Mapped("Browser_Favorites")),
    ("Key_WebRefresh", Mapped("Browser_Refresh")),
    ("Key_WebStop", Mapped("Browser_Stop")),
    ("Key_WebForward", Mapped("Browser_Forward")),
    ("Key_WebBack", Mapped("Browser_Back")),
    ("Key_MyComputer", Mapped("Launch_App1")),
    ("Key_Mail", Mapped("Launch_Mail")),
    ("Key_MediaSelect", Mapped("Launch_Media")),
    ("Key_GreenModifier", Unsupported),
    ("Key_OrangeModifier", Unsupported),
];
