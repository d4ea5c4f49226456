pub mod ansi;
pub mod ascii;
pub mod canvas;
mod width_util;
