use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_WARN};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    let title = Paragraph::new(Line::from(Span::styled(
        " reflux demo ",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(GLOBAL_BORDER)));
    frame.render_widget(title, header);

    if app.is_authenticated() {
        draw_counter(frame, app, body);
    } else {
        draw_login(frame, body);
    }

    let hint = if app.is_authenticated() {
        "↑/+ increase   ↓/- decrease   Esc logout   q quit"
    } else {
        "Enter log in   q quit"
    };
    let mut footer_lines = vec![Line::from(Span::styled(
        hint,
        Style::default().fg(MUTED_TEXT),
    ))];
    if let Some(status) = app.status() {
        footer_lines.push(Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(STATUS_WARN),
        )));
    }
    let footer_widget = Paragraph::new(footer_lines).alignment(Alignment::Center);
    frame.render_widget(footer_widget, footer);
}

fn draw_login(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "You are not logged in.",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to log in",
            Style::default().fg(ACCENT),
        )),
    ];
    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" login ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(panel, area);
}

fn draw_counter(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}", app.counter()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ];
    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" counter ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(panel, area);
}

fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}
