use crate::data::{DivisionTimetable, ScheduledClass};
use itertools::Itertools;

const EMPTY_CELL: &str = "---";

fn cell_text(cell: Option<&ScheduledClass>) -> String {
    match cell {
        Some(class) => format!("{} ({}, {})", class.subject, class.teacher, class.room),
        None => EMPTY_CELL.to_owned(),
    }
}

/// Renders one division's weekly grid as a day x slot text table.
pub fn render_division(days: &[String], timetable: &DivisionTimetable) -> String {
    let slots_per_day = timetable.grid.first().map_or(0, Vec::len);
    let cells: Vec<Vec<String>> = timetable
        .grid
        .iter()
        .map(|row| row.iter().map(|cell| cell_text(cell.as_ref())).collect())
        .collect();

    let headers: Vec<String> = (1..=slots_per_day).map(|s| format!("Slot {s}")).collect();
    let cell_width = cells
        .iter()
        .flatten()
        .chain(&headers)
        .map(String::len)
        .max()
        .unwrap_or(0);
    let day_width = days.iter().map(String::len).max().unwrap_or(0);

    let mut out = format!(
        "Timetable for {} - {} - {}\n",
        timetable.department, timetable.semester, timetable.division
    );
    let header_row = headers
        .iter()
        .map(|h| format!("{h:<cell_width$}"))
        .join("  ");
    out.push_str(&format!("{:<day_width$}  {header_row}\n", ""));
    for (day, row) in days.iter().zip(&cells) {
        let body = row.iter().map(|c| format!("{c:<cell_width$}")).join("  ");
        out.push_str(&format!("{day:<day_width$}  {body}\n"));
    }
    out
}

/// Renders every division's grid, one table per division group.
pub fn render_all(days: &[String], timetables: &[DivisionTimetable]) -> String {
    timetables
        .iter()
        .map(|timetable| render_division(days, timetable))
        .join("\n")
}
