//! Line-oriented prompts.

use std::io::{BufRead, Write};

use crate::error::{AppError, Result};

/// Print `prompt: ` and read one trimmed line.
pub fn get_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::InvalidInput("unexpected end of input".into()));
    }
    Ok(line.trim().to_string())
}

pub fn get_number<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<i64> {
    let line = get_line(input, out, prompt)?;
    line.parse()
        .map_err(|_| AppError::InvalidInput(format!("'{line}' is not a number")))
}

pub fn get_length<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<usize> {
    let n = get_number(input, out, prompt)?;
    usize::try_from(n).map_err(|_| AppError::InvalidInput(format!("length {n} is negative")))
}

/// `1` is yes, `0` is no; anything else is rejected.
pub fn get_flag<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<bool> {
    match get_number(input, out, &format!("{prompt} (1/0)"))? {
        1 => Ok(true),
        0 => Ok(false),
        n => Err(AppError::InvalidInput(format!("expected 1 or 0, got {n}"))),
    }
}
