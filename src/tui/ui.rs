//! UI rendering using ratatui
//!
//! One screen: the root word as a header, the input line, the words found
//! so far (newest first) and the total score. A rejected word pops an alert
//! over the screen until dismissed.

use crate::app::{Alert, App};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Used words
            Constraint::Length(1), // Score
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app.session().root());
    render_input(frame, layout[1], app);
    render_used_words(frame, layout[2], app.session().used_words());
    render_score(frame, layout[3], app);

    let footer = Paragraph::new("Enter Submit  Ctrl-N New Deal  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);

    if let Some(alert) = &app.alert {
        render_alert(frame, area, alert);
    }
}

/// Render the root word, spaced out and centered
fn render_header(frame: &mut Frame, area: Rect, root: &str) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let header = Paragraph::new(format_root_word(root))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(header, area);
}

/// Render the input line with cursor indicator
fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(format!("> {}_", app.input))];
    if let Some(points) = app.last_points {
        spans.push(Span::styled(
            format!("   +{}", points),
            Style::default().fg(Color::Green),
        ));
    }

    let input = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Enter your word"),
        );
    frame.render_widget(input, area);
}

/// Render the accepted words, each with its letter count
fn render_used_words(frame: &mut Frame, area: Rect, words: &[String]) {
    let items: Vec<ListItem> = words
        .iter()
        .map(|word| ListItem::new(format_used_word(word)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!("Words ({})", words.len())),
    );
    frame.render_widget(list, area);
}

fn render_score(frame: &mut Frame, area: Rect, app: &App) {
    let score = Paragraph::new(format!("Total Score: {}", app.session().score()))
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, area);
}

/// Render the alert centered over everything else
fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let popup = centered_rect(area, 50, 7);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().fg(Color::Yellow).bold())),
    ];

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(alert.title.as_str()),
        );
    frame.render_widget(body, popup);
}

/// A rect of at most `width` x `height`, centered in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Format the root word for display
fn format_root_word(root: &str) -> String {
    let letters = root
        .chars()
        .flat_map(char::to_uppercase)
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    format!("[ {} ]", letters)
}

/// Format an accepted word with its letter count
fn format_used_word(word: &str) -> String {
    format!("({}) {}", word.chars().count(), word)
}
