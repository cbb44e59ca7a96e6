//! Pretty-printer for the internal audit log table.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// Color per operation kind, matching the subcommand that produced the row.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "brush" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "import" => Colour::Purple,
        "aliases" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| {
                if target.is_empty() {
                    op.len()
                } else {
                    op.len() + target.len() + 3
                }
            })
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);
            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };
            let padding = " ".repeat(op_w.saturating_sub(op_target.len()));

            // Color only the operation word; the target stays plain.
            let colored = if target.is_empty() {
                color.paint(operation).to_string()
            } else {
                format!("{} ({})", color.paint(operation), target)
            };

            println!("{id:>id_w$}: {date} | {colored}{padding} => {message}");
        }

        Ok(())
    }
}
