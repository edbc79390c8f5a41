use crate::db::log::{LogLine, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const OP_WIDTH_LIMIT: usize = 60;

/// Color of the operation column.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "submit" => Colour::Green,
        "garden_add" => Colour::Cyan,
        "garden_update" => Colour::Yellow,
        "garden_delete" => Colour::Red,
        "notify" => Colour::Blue,
        "export" => Colour::Purple,
        "init" | "seed" | "sample" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(LogLine, String)> = entries
            .into_iter()
            .map(|l| {
                let date = chrono::DateTime::parse_from_rfc3339(&l.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| l.date.clone());
                (l, date)
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(l, _)| op_target(l).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_LIMIT);
        let id_w = rows
            .iter()
            .map(|(l, _)| l.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows
            .iter()
            .map(|(_, d)| d.len())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (line, date) in rows {
            let rendered = render_op_target(&line);
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&rendered).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                line.id,
                date,
                rendered,
                padding,
                line.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn op_target(line: &LogLine) -> String {
    if line.target.is_empty() {
        line.operation.clone()
    } else {
        format!("{} ({})", line.operation, line.target)
    }
}

/// Operation in color, target plain, truncated to the column limit.
fn render_op_target(line: &LogLine) -> String {
    let color = color_for_operation(&line.operation);
    let plain = op_target(line);

    let visible = if plain.chars().count() > OP_WIDTH_LIMIT {
        let mut s: String = plain.chars().take(OP_WIDTH_LIMIT - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}
