//! Mouse button table.

use super::KeyTarget::{self, Mapped};

/// Game mouse button identifier → AutoHotkey button name.
pub const MOUSE_TABLE: &[(&str, KeyTarget)] = &[
    ("Mouse_1", Mapped("LButton")),
    ("Mouse_2", Mapped("RButton")),
    ("Mouse_3", Mapped("MButton")),
    ("Mouse_4", Mapped("XButton1")),
    ("Mouse_5", Mapped("XButton2")),
];
