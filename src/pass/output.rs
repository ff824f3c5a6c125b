//! Password reveal output.

use std::io::{self, Write};
use std::thread::sleep;
use std::time::Duration;

use zeroize::Zeroize;

use super::Password;

/// Write `password` one character at a time, pausing `delay` after each.
///
/// Purely cosmetic: the password is fully sampled before this is called.
pub fn reveal<W: Write>(out: &mut W, password: &Password, delay: Duration) -> io::Result<()> {
    write!(out, "\nGenerated Password: ")?;

    let mut buf = [0u8; 4];
    for c in password.as_str().chars() {
        out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        out.flush()?;
        if !delay.is_zero() {
            sleep(delay);
        }
    }
    buf.zeroize();

    writeln!(out)
}
