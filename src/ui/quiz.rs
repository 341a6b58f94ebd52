use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_prompt(frame, chunks[1], &question.prompt);
    render_options(frame, chunks[2], &question.options, app.selected_option());
}

/// Closed state shown while the registration gate is shut: no question
/// content may appear here.
pub fn render_locked(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "REGISTRATION REQUIRED",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Sign up to take the quiz and check".fg(Color::Gray)),
        Line::from("your knowledge of the director's craft".fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled("R", Style::default().fg(Color::Green).bold())),
        Line::from("to register".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let chunks =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)]).split(area);

    // one dot per question: answered, current, still ahead
    let mut spans: Vec<Span> = Vec::with_capacity(session.total_questions() * 2);
    for index in 0..session.total_questions() {
        let style = if index < session.current_index() {
            Style::default().fg(Color::Cyan)
        } else if index == session.current_index() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled("●", style));
        spans.push(Span::from(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let counter = format!(
        "Question {} of {}",
        session.current_index() + 1,
        session.total_questions()
    );
    let widget = Paragraph::new(counter)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, chunks[1]);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let label = char::from(b'A' + (index % 26) as u8);

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
