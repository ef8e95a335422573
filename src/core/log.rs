use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use ansi_term::Colour;
use chrono::Local;
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

const MAX_OP_WIDTH: usize = 60;

/// Append one line to the operation log.
///
/// Format: `timestamp \t operation \t target \t message`, timestamp in RFC 3339.
pub fn oplog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let now = Local::now().to_rfc3339();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(
        file,
        "{}\t{}\t{}\t{}",
        now,
        clean(operation),
        clean(target),
        clean(message)
    )?;
    Ok(())
}

/// Like `oplog`, but a failure only prints a warning.
pub fn oplog_quiet(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = oplog(path, operation, target, message) {
        warning(format!("Failed to write operation log: {e}"));
    }
}

fn clean(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}

fn strip_ansi(s: &str) -> String {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// ANSI color for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51),
        "render" => Colour::Green,
        "export" => Colour::Blue,
        "infeasible" => Colour::Red,
        "interrupted" => Colour::Yellow,
        _ => Colour::White,
    }
}

/// One parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Parse the log file; malformed lines are skipped.
pub fn read_log(path: &Path) -> AppResult<Vec<LogEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter_map(|line| {
            let mut parts = line.splitn(4, '\t');
            Some(LogEntry {
                date: parts.next()?.to_string(),
                operation: parts.next()?.to_string(),
                target: parts.next()?.to_string(),
                message: parts.next()?.to_string(),
            })
        })
        .collect())
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path) -> AppResult<()> {
        if !path.exists() {
            info("The operation log is empty.");
            return Ok(());
        }

        let entries = read_log(path)?;
        if entries.is_empty() {
            info("The operation log is empty.");
            return Ok(());
        }

        let op_targets: Vec<String> = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                }
            })
            .collect();

        let op_w = op_targets
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        println!("📜 Operation log:\n");

        for (i, (entry, op_target)) in entries.iter().zip(&op_targets).enumerate() {
            let color = color_for_operation(&entry.operation);

            let visible = if op_target.chars().count() > MAX_OP_WIDTH {
                let mut s: String = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target.clone()
            };

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                i + 1,
                entry.date,
                colored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
