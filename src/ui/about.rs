//! About section: the investor and farmer audiences

use super::widgets::{bullet, render_section, section_header};
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Draw the about section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let content = &app.content;
    let mut lines = section_header(&content.about_header);

    for audience in &content.audiences {
        lines.push(Line::from(Span::styled(
            format!(" {} ", audience.badge),
            Style::default().fg(Color::Black).bg(Color::Green),
        )));
        lines.push(Line::from(Span::styled(
            audience.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            audience.description.as_str(),
            Style::default().fg(Color::Gray),
        )));
        lines.extend(audience.features.iter().map(|f| bullet(f)));
        lines.push(Line::from(Span::styled(
            audience.cta.as_str(),
            Style::default().fg(Color::Green),
        )));
        lines.push(Line::from(""));
    }

    lines.extend(call_to_action(
        &content.about_cta.title,
        &content.about_cta.body,
        &content.about_cta.button,
    ));

    render_section(frame, area, View::About.title(), lines, app.state.scroll_offset);
}

/// Closing call to action lines shared by the about and steps sections
pub fn call_to_action<'a>(title: &'a str, body: &'a str, button: &'a str) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(body).alignment(Alignment::Center),
        Line::from(vec![
            Span::styled(
                format!("[ {button} ]"),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter", Style::default().fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center),
    ]
}
