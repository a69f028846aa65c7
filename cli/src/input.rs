// cli/src/input.rs
//
// Prompt helpers. Validation itself lives in models::validation; these
// loops own the retry policy: invalid input re-prompts, it never fails
// the operation. Closed stdin surfaces as an error so the loops cannot
// spin forever.

use std::io::{self, Write};

use models::{parse_age, parse_gender, Gender};

/// Prints `prompt`, reads one line, and strips the line ending.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf)?;
    if n == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// Reads a numeric id, re-prompting until one parses.
pub fn prompt_id(prompt: &str) -> io::Result<u32> {
    let mut line = read_line(prompt)?;
    loop {
        match line.trim().parse() {
            Ok(id) => return Ok(id),
            Err(_) => line = read_line("Invalid ID. Please enter a number: ")?,
        }
    }
}

/// Reads an age, re-prompting until it is an integer in 0-120.
pub fn prompt_age(prompt: &str) -> io::Result<u8> {
    let mut line = read_line(prompt)?;
    loop {
        match parse_age(&line) {
            Ok(age) => return Ok(age),
            Err(_) => line = read_line("Invalid age. Please enter a valid age (0-120): ")?,
        }
    }
}

/// Reads a gender, re-prompting until it is exactly M or F.
pub fn prompt_gender(prompt: &str) -> io::Result<Gender> {
    let mut line = read_line(prompt)?;
    loop {
        match parse_gender(&line) {
            Ok(gender) => return Ok(gender),
            Err(_) => line = read_line("Invalid gender. Please enter M or F: ")?,
        }
    }
}

/// Reads an optional replacement value; Enter keeps the prior value.
pub fn prompt_optional(prompt: &str) -> io::Result<Option<String>> {
    let line = read_line(prompt)?;
    if line.is_empty() {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Reads the admission date as free text; Enter defaults to today.
pub fn prompt_admission_date() -> io::Result<String> {
    let line = read_line("Enter admission date (DD/MM/YYYY, Enter for today): ")?;
    if line.is_empty() {
        Ok(chrono::Local::now().format("%d/%m/%Y").to_string())
    } else {
        Ok(line)
    }
}
