//! Drawing the interactive wheel.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use wheel_core::Clock;
use wheel_session::OutcomeLog;

use super::app::WheelApp;

/// Spins shown in the recent list.
const RECENT: usize = 8;

/// Rows shown on the leaderboard.
const LEADERS: usize = 8;

/// Draw the whole screen.
pub fn draw<C: Clock>(frame: &mut Frame, app: &WheelApp<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title(frame, app, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    draw_wheel(frame, app, columns[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Percentage(50),
            Constraint::Min(0),
        ])
        .split(columns[1]);
    draw_stats(frame, app, side[0]);
    draw_recent(frame, app, side[1]);
    draw_leaderboard(frame, app, side[2]);

    draw_status(frame, app, chunks[2]);

    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_title<C: Clock>(frame: &mut Frame, app: &WheelApp<C>, area: Rect) {
    let mode = if app.session.is_admin() {
        Span::styled(" ADMIN ", Style::default().fg(Color::Black).bg(Color::Yellow).bold())
    } else {
        Span::styled(" VIEWER ", Style::default().fg(Color::Black).bg(Color::Cyan))
    };
    let title = Line::from(vec![
        Span::styled(" Prize Wheel ", Style::default().bold()),
        mode,
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_wheel<C: Clock>(frame: &mut Frame, app: &WheelApp<C>, area: Rect) {
    let block = Block::default()
        .title(" Wheel ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 4 || inner.width < 12 {
        return;
    }

    let session = &app.session;
    let wheel = session.wheel();
    let entries = session.entries();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    if entries.is_empty() {
        let empty = Paragraph::new("No entries. Log in and add some to spin.")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, rows[0]);
        return;
    }

    let live = wheel.live_index(entries.len());
    let preset = session.preset().filter(|_| session.is_admin());

    // Keep the slice under the pointer in view on tall wheels.
    let visible = rows[0].height as usize;
    let skip = live
        .map_or(0, |i| i.saturating_sub(visible.saturating_sub(1) / 2))
        .min(entries.len().saturating_sub(visible));

    let lines: Vec<Line<'static>> = entries
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible)
        .map(|(i, entry)| {
            let under_pointer = live == Some(i);
            let pointer = if under_pointer { "\u{25b6} " } else { "  " };
            let label_style = if under_pointer {
                Style::default().fg(Color::Black).bg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let mut spans = vec![
                Span::styled(pointer, Style::default().fg(Color::Yellow)),
                Span::styled(
                    "\u{2588}\u{2588} ",
                    Style::default().fg(hex_color(entry.slice_color(i))),
                ),
                Span::styled(format!("{i:>2} {}", entry.label), label_style),
            ];
            if preset == Some(i) {
                spans.push(Span::styled(" (preset)", Style::default().fg(Color::DarkGray)));
            }
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), rows[0]);

    let ratio = wheel.progress().unwrap_or(0.0).clamp(0.0, 1.0);
    let gauge_label = match wheel.remaining_ms() {
        Some(ms) => format!("{:.1}s", ms as f64 / 1000.0),
        None => format!("{:.0}\u{b0}", wheel.current_orientation()),
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(ratio)
        .label(gauge_label);
    frame.render_widget(gauge, rows[1]);
}

fn draw_stats<C: Clock>(frame: &mut Frame, app: &WheelApp<C>, area: Rect) {
    let stats = app.session.stats();
    let remove = if app.session.effective_remove_after() {
        "on"
    } else {
        "off"
    };

    let lines = vec![
        stat_line("Entries", stats.entries.to_string()),
        stat_line("Spins", stats.total_spins.to_string()),
        stat_line(
            "Last winner",
            stats.last_winner.unwrap_or_else(|| "-".to_string()),
        ),
        stat_line("Remove winner", remove.to_string()),
    ];

    let block = Block::default().title(" Stats ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn stat_line(name: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name:<14}"), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White).bold()),
    ])
}

fn draw_recent<C: Clock>(frame: &mut Frame, app: &WheelApp<C>, area: Rect) {
    let lines: Vec<Line<'static>> = app
        .session
        .log()
        .recent(RECENT)
        .iter()
        .map(|record| {
            let time = record
                .time
                .with_timezone(&chrono::Local)
                .format("%H:%M:%S")
                .to_string();
            Line::from(vec![
                Span::styled(format!("{time} "), Style::default().fg(Color::DarkGray)),
                Span::raw(record.label.clone()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Recent ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_leaderboard<C: Clock>(frame: &mut Frame, app: &WheelApp<C>, area: Rect) {
    let lines = leaderboard_lines(app.session.log());

    let block = Block::default()
        .title(" Leaderboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn leaderboard_lines(log: &OutcomeLog) -> Vec<Line<'static>> {
    log.leaderboard()
        .into_iter()
        .take(LEADERS)
        .map(|(label, count)| {
            Line::from(vec![
                Span::raw(label),
                Span::styled(format!("  \u{d7}{count}"), Style::default().fg(Color::Green)),
            ])
        })
        .collect()
}

fn draw_status<C: Clock>(frame: &mut Frame, app: &WheelApp<C>, area: Rect) {
    let text = match &app.message {
        Some(message) => format!(" {message}"),
        None if app.session.is_admin() => {
            " Space spin | 0-9 preset | Bksp erase digit | r remove | d demo | c clear log | ? help | q quit"
                .to_string()
        }
        None => " Space spin | c clear log | ? help | q quit".to_string(),
    };
    let status = Paragraph::new(text).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  Space/Enter Spin the wheel"),
        Line::from("  c           Clear the spin log"),
        Line::from("  q / Esc     Quit"),
        Line::from(""),
        Line::from("Admin only:"),
        Line::from("  0-9         Type the preset slice number"),
        Line::from("  Backspace   Erase a preset digit"),
        Line::from("  r           Toggle removing winners"),
        Line::from("  d           Load the next demo wheel"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  Ctrl+C      Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Create a centered rectangle as a percentage of the given area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Parse a `#rrggbb` slice color, falling back to gray.
fn hex_color(hex: &str) -> Color {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return Color::Gray;
    }
    let channel = |i: usize| digits.get(i..i + 2).and_then(|c| u8::from_str_radix(c, 16).ok());
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Gray,
    }
}
