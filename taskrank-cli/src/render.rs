//! Plain-text rendering for the draft queue and scored results.

use taskrank_client::Notice;
use taskrank_core::{DraftQueue, ScoredTask, Strategy, Task};

/// Drop the trailing `.0` on whole numbers.
fn num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

pub fn queue_line(task: &Task) -> String {
    let due = task
        .due_date()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "unscheduled".to_string());
    format!(
        "{} · due {} · {}h · importance {}",
        task.title(),
        due,
        num(task.estimated_hours()),
        num(task.importance())
    )
}

pub fn queue(drafts: &DraftQueue) -> String {
    let mut s = format!("Queued Tasks ({})\n", drafts.len());
    if drafts.is_empty() {
        s.push_str("No tasks queued yet.\n");
        return s;
    }
    for (i, t) in drafts.iter().enumerate() {
        s.push_str(&format!("{:>3}. {}\n", i + 1, queue_line(t)));
    }
    s
}

pub fn strategies(active: Strategy) -> String {
    let mut s = String::new();
    for st in Strategy::ALL {
        let marker = if st == active { "*" } else { " " };
        s.push_str(&format!("{marker} {:<16} {}\n", st.id(), st.label()));
    }
    s
}

pub fn notice(n: &Notice) -> String {
    match n {
        Notice::Success(msg) => format!("ok: {msg}"),
        Notice::Error(msg) => format!("error: {msg}"),
    }
}

const HEADERS: [&str; 7] = [
    "Title",
    "Due",
    "Hours",
    "Importance",
    "Score",
    "Priority",
    "Explanation",
];

pub fn results_table(results: &[ScoredTask]) -> String {
    if results.is_empty() {
        return "No tasks analyzed yet.\n".to_string();
    }

    let rows: Vec<[String; 7]> = results
        .iter()
        .map(|r| {
            let mut title = r.title.clone();
            if let Some(id) = &r.source_id {
                title.push_str(&format!(" [{id}]"));
            }
            [
                title,
                r.due_date.clone().unwrap_or_else(|| "—".to_string()),
                num(r.estimated_hours),
                num(r.importance),
                num(r.score),
                r.tier().label().to_string(),
                r.explanation.clone(),
            ]
        })
        .collect();

    // Explanation is last and left ragged.
    let mut widths = [0usize; 6];
    for (i, w) in widths.iter_mut().enumerate() {
        *w = rows
            .iter()
            .map(|row| row[i].chars().count())
            .chain(std::iter::once(HEADERS[i].len()))
            .max()
            .unwrap_or(0);
    }

    let line = |cells: [&str; 7]| {
        let mut s = String::new();
        for (i, w) in widths.iter().enumerate() {
            let pad = w.saturating_sub(cells[i].chars().count());
            s.push_str(cells[i]);
            s.push_str(&" ".repeat(pad + 2));
        }
        s.push_str(cells[6]);
        s.trim_end().to_string()
    };

    let mut out = line(HEADERS);
    out.push('\n');
    for row in &rows {
        let cells = [
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
            row[4].as_str(),
            row[5].as_str(),
            row[6].as_str(),
        ];
        out.push_str(&line(cells));
        out.push('\n');
    }
    out
}
