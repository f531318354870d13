use colored::Colorize;

use crate::wire::Project;

pub const HEADER: &str = "=== Verify token - listing projects ===";

pub fn header() -> String {
    HEADER.bold().to_string()
}

/// `  {id} | {name}` with `marker` appended when the id is the target.
pub fn project_line(p: &Project, target: &str, marker: &str) -> String {
    let suffix = if p.id == target { marker } else { "" };
    format!("  {} | {}{}", p.id, p.display_name(), suffix)
}

/// Raw bodies may span several lines; CR/LF are escaped so the diagnostic
/// is always a single line.
pub fn error_line(descriptor: &str) -> String {
    format!("{} {}", "ERROR:".red().bold(), single_line(descriptor))
}

fn single_line(s: &str) -> String {
    s.replace('\r', "\\r").replace('\n', "\\n")
}

pub fn http_failure(code: u16, body: &str) -> String {
    format!("HTTP {code}: {body}")
}
