//! Clipboard access through the terminal (OSC 52).
//!
//! The sequence is written to the terminal's own output, so copying works
//! over SSH and needs no system clipboard library. Terminals that do not
//! support OSC 52 ignore it.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::io::{self, Write};

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64.encode(text))
}

pub fn copy<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wraps_base64_payload() {
        assert_eq!(osc52_sequence("4"), "\x1b]52;c;NA==\x07");
        assert_eq!(osc52_sequence(""), "\x1b]52;c;\x07");
    }

    #[test]
    fn copy_writes_sequence() {
        let mut out = Vec::new();
        copy(&mut out, "x = 2").unwrap();
        assert_eq!(out, b"\x1b]52;c;eCA9IDI=\x07");
    }
}
