//! Contact section (page footer)

use super::widgets::render_section;
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Draw the footer: blurb, contact details, link columns and legal lines
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let footer = &app.content.footer;
    let heading = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(app.content.brand.as_str(), heading)),
        Line::from(Span::styled(
            footer.blurb.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![Span::raw("  ✉ "), Span::raw(footer.contact.email.as_str())]),
        Line::from(vec![Span::raw("  ☎ "), Span::raw(footer.contact.phone.as_str())]),
        Line::from(vec![Span::raw("  ⌖ "), Span::raw(footer.contact.location.as_str())]),
        Line::from(""),
    ];

    for column in &footer.columns {
        lines.push(Line::from(Span::styled(column.title.as_str(), heading)));
        for link in &column.links {
            let style = if link.is_anchor() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(link.name.as_str(), style),
                Span::styled(
                    format!("  {}", link.href),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        lines.push(Line::from(""));
    }

    let social: Vec<Span> = footer
        .social
        .iter()
        .flat_map(|link| {
            [
                Span::styled(link.name.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw("  "),
            ]
        })
        .collect();
    lines.push(Line::from(social));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", footer.newsletter_cta),
        Style::default().fg(Color::Green),
    )));
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            footer.copyright.as_str(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(
        Line::from(Span::styled(
            footer.registration.as_str(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    );

    render_section(frame, area, View::Contact.title(), lines, app.state.scroll_offset);
}
