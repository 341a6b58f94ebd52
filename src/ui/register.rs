//! Registration dialog, drawn over the active tab.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::app::{App, FormField};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.form() else {
        return;
    };

    let dialog = dialog_rect(area);
    frame.render_widget(Clear, dialog);

    let mut content = vec![Line::from("")];
    for field in FormField::ALL {
        let focused = form.focus == field;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let shown = match field {
            FormField::Password => "•".repeat(form.password.chars().count()),
            _ => form.value(field).to_string(),
        };

        let mut spans = vec![
            Span::styled(format!("{:>9}: ", field.label()), label_style),
            Span::styled(shown, Style::default().fg(Color::Yellow)),
        ];
        if focused {
            spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }
        content.push(Line::from(spans));
        content.push(Line::from(""));
    }

    match &form.error {
        Some(error) => content.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))),
        None => content.push(Line::from("")),
    }
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "[Enter] submit  ·  [Esc] close",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Cyan)
            .padding(Padding::horizontal(2))
            .title(Span::styled(
                " Registration ",
                Style::default().fg(Color::Cyan).bold(),
            )),
    );
    frame.render_widget(widget, dialog);
}

fn dialog_rect(area: Rect) -> Rect {
    let width = area.width.min(46);
    let height = area.height.min(13);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
