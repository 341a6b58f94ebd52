use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::session::ScoreBand;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (score, total) = app.session().score();
    let band = ScoreBand::grade(score, total);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}", score, total),
            Style::default().fg(band_color(band)).bold(),
        )),
        Line::from(""),
        Line::from(band.message().fg(Color::Gray)),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("R", Style::default().fg(Color::Green).bold())),
        Line::from("to retake the quiz".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Top => Color::Green,
        ScoreBand::Mid => Color::Cyan,
        ScoreBand::Low => Color::Red,
    }
}
