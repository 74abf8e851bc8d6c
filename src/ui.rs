use crate::day::Day;
use crate::models::{GridCell, Status, StreakDetail, StreakSummary, YearGrid};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn render_summary_line(summary: &StreakSummary) -> String {
    format!(
        "[{}] {} {}  {} | current {} | longest {} | week {}/{} ({}%)",
        summary.id,
        summary.emoji,
        summary.name,
        summary.status_label,
        summary.current_streak,
        summary.longest_streak,
        summary.week.completed,
        summary.week.total,
        summary.week.percentage,
    )
}

pub fn render_detail_text(detail: &StreakDetail) -> String {
    let summary = &detail.summary;
    let mut lines = vec![format!("{} {}", summary.emoji, summary.name)];
    if !summary.description.is_empty() {
        lines.push(summary.description.clone());
    }
    lines.push(format!("Status: {}", summary.status_label));
    lines.push(format!(
        "Current: {}  Longest: {}  Total: {} days",
        summary.current_streak, summary.longest_streak, summary.total
    ));
    lines.push(format!(
        "This week: {}/{} ({}%)",
        summary.week.completed, summary.week.total, summary.week.percentage
    ));
    lines.push(match summary.last_completed {
        Some(last) => format!("Started: {} | Last completed: {last}", summary.created_date),
        None => format!("Started: {}", summary.created_date),
    });
    lines.push(String::new());
    lines.push(render_grid_text(&detail.grid));
    lines.join("\n")
}

/// One row per month: `#` done, `.` missed, `-` upcoming, blank past month end.
pub fn render_grid_text(grid: &YearGrid) -> String {
    let mut out = format!("{}  ", grid.year);
    for day in 1..=31 {
        out.push(if day % 5 == 0 { '|' } else { ' ' });
    }
    out.push('\n');

    for (label, row) in MONTHS.iter().zip(grid.months.iter()) {
        out.push_str(label);
        out.push_str("   ");
        for cell in row {
            out.push(match cell {
                GridCell::Completed => '#',
                GridCell::Missed => '.',
                GridCell::Future => '-',
                GridCell::Empty => ' ',
            });
        }
        out.push('\n');
    }
    out
}

pub fn render_report(year: i32, today: Day, details: &[StreakDetail]) -> String {
    let cards = if details.is_empty() {
        EMPTY_HTML.to_string()
    } else {
        details.iter().map(render_card).collect::<Vec<_>>().join("\n")
    };

    REPORT_HTML
        .replace("{{YEAR}}", &year.to_string())
        .replace("{{TODAY}}", &today.to_string())
        .replace("{{CARDS}}", &cards)
}

fn render_card(detail: &StreakDetail) -> String {
    let summary = &detail.summary;
    let status_class = match summary.status {
        Status::Completed => "status-completed",
        Status::ReadyToStart | Status::PendingToday => "status-pending",
        Status::MissedYesterday => "status-missed",
    };

    let mut rows = String::new();
    for (label, row) in MONTHS.iter().zip(detail.grid.months.iter()) {
        rows.push_str(&format!("<tr><th>{label}</th>"));
        for (index, cell) in row.iter().enumerate() {
            let day = index + 1;
            rows.push_str(&match cell {
                GridCell::Empty => r#"<td class="cell empty"></td>"#.to_string(),
                GridCell::Future => format!(r#"<td class="cell future" title="Due {day} {label}"></td>"#),
                GridCell::Missed => format!(r#"<td class="cell missed" title="Missed on {day} {label}"></td>"#),
                GridCell::Completed => format!(
                    r#"<td class="cell completed" title="Did it on {day} {label}">{}</td>"#,
                    escape_html(&summary.emoji)
                ),
            });
        }
        rows.push_str("</tr>\n");
    }

    CARD_HTML
        .replace("{{EMOJI}}", &escape_html(&summary.emoji))
        .replace("{{NAME}}", &escape_html(&summary.name))
        .replace("{{DESCRIPTION}}", &escape_html(&summary.description))
        .replace("{{STATUS_CLASS}}", status_class)
        .replace("{{STATUS}}", summary.status_label)
        .replace("{{CURRENT}}", &summary.current_streak.to_string())
        .replace("{{LONGEST}}", &summary.longest_streak.to_string())
        .replace("{{TOTAL}}", &summary.total.to_string())
        .replace("{{WEEK}}", &format!("{}/{}", summary.week.completed, summary.week.total))
        .replace("{{ROWS}}", &rows)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const EMPTY_HTML: &str = r#"<p class="empty-state">No streaks yet! Add your first streak to get started. 🎯</p>"#;

const CARD_HTML: &str = r#"<article class="streak-card">
  <header>
    <h2><span class="emoji">{{EMOJI}}</span> {{NAME}}</h2>
    <p class="description">{{DESCRIPTION}}</p>
    <span class="status {{STATUS_CLASS}}">{{STATUS}}</span>
  </header>
  <ul class="metrics">
    <li><strong>{{CURRENT}}</strong> current</li>
    <li><strong>{{LONGEST}}</strong> longest</li>
    <li><strong>{{TOTAL}}</strong> total days</li>
    <li><strong>{{WEEK}}</strong> this week</li>
  </ul>
  <table class="grid">
{{ROWS}}  </table>
</article>"#;

const REPORT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Streaks {{YEAR}}</title>
  <style>
    :root {
      --ink: #2b2a28;
      --done: #2e9e5b;
      --miss: #f1e4d3;
      --future: #fafafa;
      --accent: #ff6b4a;
    }

    body {
      margin: 0;
      padding: 32px 18px 48px;
      font-family: "Trebuchet MS", sans-serif;
      color: var(--ink);
      background: #f8f3e6;
    }

    .streak-card {
      background: #fff;
      border-radius: 18px;
      padding: 24px;
      margin: 0 auto 24px;
      max-width: 980px;
      box-shadow: 0 12px 30px rgba(47, 72, 88, 0.12);
    }

    .status { font-weight: 600; }
    .status-completed { color: var(--done); }
    .status-pending { color: #c98a00; }
    .status-missed { color: var(--accent); }

    .metrics {
      display: flex;
      gap: 18px;
      list-style: none;
      padding: 0;
    }

    .grid { border-collapse: separate; border-spacing: 2px; }
    .grid th { text-align: left; padding-right: 6px; font-size: 0.8em; }
    .cell { width: 22px; height: 22px; border-radius: 4px; text-align: center; font-size: 0.8em; }
    .cell.completed { background: var(--done); }
    .cell.missed { background: var(--miss); }
    .cell.future { background: var(--future); border: 1px dashed #ddd; }
    .cell.empty { background: transparent; }
  </style>
</head>
<body>
  <h1>Streaks {{YEAR}}</h1>
  <p>As of {{TODAY}}</p>
{{CARDS}}
</body>
</html>
"#;
