use terminal_size::{Height, Width, terminal_size};

use crate::ui::ascii::ESC_BYTE;
type ByteIter<'a> = std::iter::Peekable<std::str::Bytes<'a>>;

const DEFAULT_WIDTH: usize = 80;
const DEFAULT_HEIGHT: usize = 24;

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    fn strip_ansi(s: &str) -> String {
        let mut out = Vec::with_capacity(s.len());
        let mut bytes = s.bytes().peekable();

        while let Some(byte) = bytes.next() {
            if Self::is_escape_byte(byte) && Self::is_csi_start(bytes.peek()) {
                Self::consume_csi(&mut bytes);
                continue;
            }
            out.push(byte);
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    fn is_escape_byte(b: u8) -> bool {
        b == ESC_BYTE
    }

    fn is_csi_start(next: Option<&u8>) -> bool {
        matches!(next, Some(b'['))
    }

    fn consume_csi(bytes: &mut ByteIter<'_>) {
        let _ = bytes.next(); // skip '['
        for nb in bytes.by_ref() {
            if Self::is_csi_terminator(nb) {
                break;
            }
        }
    }

    fn is_csi_terminator(b: u8) -> bool {
        (b as char).is_ascii_alphabetic()
    }

    /// Number of visible characters, ignoring CSI escape sequences.
    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    #[cfg(test)]
    pub(crate) fn strip_ansi_for_test(s: &str) -> String {
        Self::strip_ansi(s)
    }

    /// Best-effort terminal size as `(columns, rows)`, defaulting to 80x24.
    pub fn terminal_size(&self) -> (usize, usize) {
        match terminal_size() {
            Some((Width(w), Height(h))) if w > 0 && h > 0 => (w as usize, h as usize),
            _ => (DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }

    /// Left padding that centers `content_width` inside `area_width`.
    pub fn center_pad(&self, content_width: usize, area_width: usize) -> usize {
        area_width.saturating_sub(content_width) / 2
    }
}
