//! Terminal output formatting.

use colored::Colorize;
use kanban_core::{AppState, List};
use unicode_width::UnicodeWidthStr;

/// Get terminal width, defaulting to 80 if unavailable.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string to a visual width, ending in ".." when cut.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

fn column_header(list: &List) -> String {
    format!("{} ({})", list.text, list.tasks.len())
}

/// Print the board, side by side when the terminal allows it.
pub fn print_board(title: &str, state: &AppState) {
    if state.lists.is_empty() {
        println!(
            "{}",
            "No lists yet. Add one with an ADD_LIST action.".dimmed()
        );
        return;
    }

    let width = term_width();
    if width < 60 {
        print_board_compact(title, state);
    } else {
        print_board_wide(title, state, width);
    }
}

/// Columns side by side with box-drawing borders.
fn print_board_wide(title: &str, state: &AppState, term_w: usize) {
    let lists = &state.lists;
    let num_cols = lists.len();
    // Distribute width: subtract borders (num_cols + 1 border chars)
    let available = if term_w > num_cols + 1 {
        term_w - num_cols - 1
    } else {
        num_cols * 10
    };
    let col_width = (available / num_cols).clamp(12, 35);

    println!("{}", title.bold());

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = (0..num_cols).map(|_| "─".repeat(col_width)).collect();
        println!(
            "{}{}{}",
            left.dimmed(),
            segments.join(mid).dimmed(),
            right.dimmed()
        );
    };

    // ── Header ──
    rule("┌", "┬", "┐");
    print!("{}", "│".dimmed());
    for (i, list) in lists.iter().enumerate() {
        let header = truncate_visual(&column_header(list), col_width);
        let padding = col_width.saturating_sub(UnicodeWidthStr::width(header.as_str()));
        let left_pad = padding / 2;
        let right_pad = padding - left_pad;
        print!(
            "{}{}{}",
            " ".repeat(left_pad),
            header.cyan().bold(),
            " ".repeat(right_pad)
        );
        if i < num_cols - 1 {
            print!("{}", "│".dimmed());
        }
    }
    println!("{}", "│".dimmed());
    rule("├", "┼", "┤");

    // ── Task rows ──
    let max_tasks = lists.iter().map(|l| l.tasks.len()).max().unwrap_or(0);
    for row in 0..max_tasks {
        print!("{}", "│".dimmed());
        for (i, list) in lists.iter().enumerate() {
            match list.tasks.get(row) {
                Some(task) => {
                    let text_w = col_width.saturating_sub(2).max(1);
                    let text = pad_right(&truncate_visual(&task.text, text_w), text_w);
                    print!("{} {}", "•".dimmed(), text);
                }
                None => print!("{}", " ".repeat(col_width)),
            }
            if i < num_cols - 1 {
                print!("{}", "│".dimmed());
            }
        }
        println!("{}", "│".dimmed());
    }

    // ── Footer ──
    rule("└", "┴", "┘");
    print_summary(state);
}

/// Vertical layout for narrow terminals.
fn print_board_compact(title: &str, state: &AppState) {
    println!("{}", format!(" {} ", title).on_blue().white().bold());
    println!();

    for list in &state.lists {
        println!(" {} {}", "▸".dimmed(), column_header(list).cyan().bold());
        for task in &list.tasks {
            println!("   {} {}", "•".dimmed(), task.text);
        }
        println!();
    }
    print_summary(state);
}

fn print_summary(state: &AppState) {
    println!(
        " {} {} lists {} {} tasks",
        "■".cyan(),
        state.lists.len().to_string().bold(),
        "·".dimmed(),
        state.task_count().to_string().bold()
    );
}
