use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::terminal::{box_bottom, box_line, box_top};

const BANNER: [&str; 3] = [
    "░░░█▀█░█▀█░█▀▀░█▀▀░█▀▀░█▀▀░█▀█░░░",
    "░░░█▀▀░█▀█░▀▀█░▀▀█░█░█░█▀▀░█░█░░░",
    "░░░▀░░░▀░▀░▀▀▀░▀▀▀░▀▀▀░▀▀▀░▀░▀░░░",
];

pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    for line in BANNER {
        writeln!(out, "{}", line.red().bold())?;
    }
    Ok(())
}

pub fn print_main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "1. Generate Password")?;
    writeln!(out, "2. Set Preferences")?;
    writeln!(out, "3. Show Password History")?;
    Ok(())
}

pub fn print_history<W: Write>(out: &mut W, entries: &[String]) -> io::Result<()> {
    writeln!(out)?;
    box_top(out, "Password History")?;
    if entries.is_empty() {
        box_line(out, "(no passwords generated yet)")?;
    }
    for (n, entry) in entries.iter().enumerate() {
        box_line(out, &format!("{}. {}", n + 1, entry))?;
    }
    box_bottom(out)
}

pub fn enter_prompt() -> &'static str {
    "Enter your choice"
}
