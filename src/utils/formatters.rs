use chrono::{NaiveDate, NaiveTime};

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Renders items as a numbered list, one per line.
pub fn numbered_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}) {}", i + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
