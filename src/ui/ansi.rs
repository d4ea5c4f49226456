// ANSI/VT100 control sequences used by screens and terminal cleanup.

/// Clear the entire screen.
pub const CLEAR_SCREEN: &str = crate::csi!("2J");
/// Move the cursor to the top-left corner.
pub const CURSOR_HOME: &str = crate::csi!("H");

/// Hide the cursor.
pub const HIDE_CURSOR: &str = crate::csi!("?25l");
/// Show the cursor.
pub const SHOW_CURSOR: &str = crate::csi!("?25h");

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Bold text.
pub const STYLE_BOLD: &str = crate::csi!("1m");
/// Dim text, used for secondary lines such as the date under the clock.
pub const STYLE_DIM: &str = crate::csi!("2m");
