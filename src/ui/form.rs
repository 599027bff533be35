use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, FieldState};
use crate::models::QuizPhase;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], app);
    render_questions(frame, chunks[1], app);
    render_notice(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let status = match app.phase() {
        QuizPhase::Unanswered => "not started",
        QuizPhase::Partial => "in progress",
        QuizPhase::Complete => "ready to submit",
        QuizPhase::Scored => "scored",
    };

    let widget = Paragraph::new(Line::from(vec![
        Span::styled(app.quiz().title.as_str(), Style::default().fg(Color::Cyan).bold()),
        Span::styled(format!("  ·  {}", status), Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_questions(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focused_row();
    let mut lines: Vec<Line> = Vec::new();
    let mut focused_line = 0;

    for (index, question) in app.quiz().questions.iter().enumerate() {
        let is_current = focused.is_some_and(|row| row.question == index);
        let title_style = if is_current {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::from(Span::styled(
            format!("Question {}", index + 1),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(question.prompt.as_str(), title_style)));

        match app.form().field(index) {
            Some(FieldState::Text(text)) => {
                if is_current {
                    focused_line = lines.len();
                }
                lines.push(text_input_line(text, is_current));
            }
            Some(field) => {
                for (option_index, choice) in question.options().iter().enumerate() {
                    let selected = focused
                        .is_some_and(|row| row.question == index && row.option == Some(option_index));
                    if selected {
                        focused_line = lines.len();
                    }
                    let checked = match field {
                        FieldState::Radio(picked) => *picked == Some(option_index),
                        FieldState::Checkboxes(checked) => checked.contains(&option_index),
                        FieldState::Text(_) => false,
                    };
                    let mark = match (question.is_multi_select(), checked) {
                        (true, true) => "[x]",
                        (true, false) => "[ ]",
                        (false, true) => "(•)",
                        (false, false) => "( )",
                    };
                    lines.push(option_line(mark, &choice.label, selected));
                }
            }
            None => {}
        }

        lines.push(Line::from(""));
    }

    let visible = area.height.saturating_sub(1) as usize;
    let scroll = focused_line.saturating_sub(visible / 2);

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn text_input_line(text: &str, selected: bool) -> Line<'_> {
    let style = if selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if selected { ">" } else { " " };
    let cursor = if selected { "_" } else { "" };

    Line::from(vec![
        Span::styled(format!(" {} ", marker), style),
        Span::styled("[ ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}{}", text, cursor), style),
        Span::styled(" ]", Style::default().fg(Color::DarkGray)),
    ])
}

fn option_line<'a>(mark: &'static str, label: &'a str, selected: bool) -> Line<'a> {
    let style = if selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if selected { ">" } else { " " };

    Line::from(vec![
        Span::styled(format!(" {} ", marker), style),
        Span::styled(format!("{} ", mark), style),
        Span::styled(label, style),
    ])
}

fn render_notice(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(notice) = app.notice() {
        let widget = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .fg(Color::Red)
            .bold();
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "↑/↓ move  ·  tab question  ·  space select  ·  ctrl-s submit  ·  ctrl-r reset  ·  esc quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
