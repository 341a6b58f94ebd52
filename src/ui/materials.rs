use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Material;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let materials = &app.content().materials;
    let registered = app.is_registered();
    let rows = materials.chunks(2).count();

    let row_areas = Layout::vertical(vec![Constraint::Length(7); rows])
        .margin(1)
        .split(area);

    for (row, pair) in materials.chunks(2).enumerate() {
        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(row_areas[row]);
        for (column, material) in pair.iter().enumerate() {
            render_card(frame, columns[column], material, registered);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, material: &Material, registered: bool) {
    let (status, status_color) = if registered {
        ("open · start studying", Color::Green)
    } else {
        ("requires registration", Color::DarkGray)
    };
    let body_color = if registered {
        Color::Gray
    } else {
        Color::DarkGray
    };

    let content = vec![
        Line::from(Span::styled(
            material.description.as_str(),
            Style::default().fg(body_color),
        )),
        Line::from(""),
        Line::from(Span::styled(status, Style::default().fg(status_color))),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if registered {
                Color::Cyan
            } else {
                Color::DarkGray
            })
            .padding(Padding::horizontal(1))
            .title(Span::styled(
                format!(" {} ", material.title),
                Style::default().fg(Color::White).bold(),
            )),
    );
    frame.render_widget(widget, area);
}
