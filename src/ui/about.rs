use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::AboutCard;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let cards = &app.content().about;
    let rows = cards.chunks(2).count();

    let row_areas = Layout::vertical(vec![Constraint::Length(7); rows])
        .margin(1)
        .split(area);

    for (row, pair) in cards.chunks(2).enumerate() {
        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(row_areas[row]);
        for (column, card) in pair.iter().enumerate() {
            render_card(frame, columns[column], card);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &AboutCard) {
    let widget = Paragraph::new(card.body.as_str())
        .wrap(Wrap { trim: true })
        .fg(Color::Gray)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1))
                .title(Span::styled(
                    format!(" {} ", card.title),
                    Style::default().fg(Color::White).bold(),
                )),
        );
    frame.render_widget(widget, area);
}
