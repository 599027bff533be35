use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::present::{Banner, Detail, Presentation};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(report) = app.report() else {
        return;
    };
    let presentation = Presentation::from_report(report);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_banner(frame, chunks[1], &presentation.banner);
    render_details(frame, chunks[2], &presentation.details, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn verdict_color(passed: bool) -> Color {
    if passed { Color::Green } else { Color::Red }
}

fn render_banner(frame: &mut Frame, area: Rect, banner: &Banner) {
    let color = verdict_color(banner.passed);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            banner.headline,
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(
            banner.score.as_str(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(banner.percentage.as_str().fg(Color::Gray)),
        Line::from(banner.message.fg(Color::DarkGray)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_details(frame: &mut Frame, area: Rect, details: &[Detail], scroll: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(details.len() * 5);

    for detail in details {
        lines.push(Line::from(Span::styled(
            detail.title.as_str(),
            Style::default().fg(Color::White).bold(),
        )));
        lines.push(Line::from(Span::styled(
            detail.status,
            Style::default().fg(verdict_color(detail.correct)),
        )));
        lines.push(Line::from(vec![
            Span::styled("Your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(detail.your_answer.as_str(), Style::default().fg(Color::Gray)),
        ]));
        if let Some(correct) = &detail.correct_answer {
            lines.push(Line::from(vec![
                Span::styled("Correct answer: ", Style::default().fg(Color::DarkGray)),
                Span::styled(correct.as_str(), Style::default().fg(Color::Yellow)),
            ]));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  b back to form  ·  r reset  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
