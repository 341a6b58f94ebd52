mod about;
mod materials;
mod quiz;
mod register;
mod results;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Tabs},
};

use crate::app::{App, QuizPhase, Tab};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_hero(frame, chunks[0], app);
    render_tab_bar(frame, chunks[1], app);

    match app.tab {
        Tab::About => about::render(frame, chunks[2], app),
        Tab::Materials => materials::render(frame, chunks[2], app),
        Tab::Quiz => match app.quiz_phase() {
            QuizPhase::AwaitingAccess => quiz::render_locked(frame, chunks[2]),
            QuizPhase::InProgress => quiz::render(frame, chunks[2], app),
            QuizPhase::Complete => results::render(frame, chunks[2], app),
        },
    }

    render_footer(frame, chunks[3], app);

    // dialog overlay, above the active tab
    register::render(frame, area, app);
}

fn render_hero(frame: &mut Frame, area: Rect, app: &App) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.content().title.as_str(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(app.content().tagline.as_str().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let selected = Tab::ALL.iter().position(|tab| *tab == app.tab).unwrap_or(0);
    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(index, tab)| Line::from(format!("{} {}", index + 1, tab.title())));

    let widget = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).bold())
        .divider("·");
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let widget = match app.notice() {
        Some(notice) => Paragraph::new(notice).fg(Color::Green),
        None => Paragraph::new(key_hints(app)).fg(Color::DarkGray),
    };
    frame.render_widget(widget.alignment(Alignment::Center), area);
}

fn key_hints(app: &App) -> &'static str {
    if app.form().is_some() {
        return "tab next field  ·  enter submit  ·  esc close";
    }

    match app.tab {
        Tab::Quiz => match app.quiz_phase() {
            QuizPhase::AwaitingAccess => "r register  ·  1/2/3 switch view  ·  q quit",
            QuizPhase::InProgress => "j/k choose  ·  enter answer  ·  q quit",
            QuizPhase::Complete => "r retake  ·  1/2/3 switch view  ·  q quit",
        },
        _ if !app.is_registered() => "r register  ·  1/2/3 switch view  ·  q quit",
        _ => "1/2/3 switch view  ·  q quit",
    }
}
