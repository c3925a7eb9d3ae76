use crate::errors::AppResult;
use crate::storage::log;
use crate::storage::pool::DbPool;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for an audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "track" => Colour::Green,
        "widget" => Colour::Cyan,
        "session" | "fasting" => Colour::Yellow,
        "storage_error" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Truncate to `max` visible characters, ignoring ANSI escapes.
fn truncate_visible(s: &str, max: usize) -> String {
    let visible = strip_ansi(s);
    if visible.chars().count() <= max {
        return visible;
    }
    let mut out: String = visible.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = log::all(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in entries {
            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };

            let visible = truncate_visible(&op_target, MAX_OP_WIDTH);
            let padding = " ".repeat(MAX_OP_WIDTH.min(40).saturating_sub(visible.chars().count()));

            // only the operation word is coloured
            let colour = color_for_operation(&e.operation);
            let rendered = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", colour.paint(op), rest),
                None => colour.paint(visible.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                rendered,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
