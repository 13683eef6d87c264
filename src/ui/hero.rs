//! Hero section: headline, highlights and the two calls to action

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the hero section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let hero = &app.content.hero;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .split(inner);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("● {}", hero.banner),
            Style::default().fg(Color::Green),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    // Odd headline fragments are the emphasized ones
    let headline: Vec<Span> = hero
        .headline
        .iter()
        .enumerate()
        .flat_map(|(idx, part)| {
            let style = if idx % 2 == 1 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            [Span::styled(part.as_str(), style), Span::raw(" ")]
        })
        .collect();
    lines.push(Line::from(headline).alignment(Alignment::Center));
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            hero.subheadline.as_str(),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));

    let mut highlights = Vec::new();
    for (idx, highlight) in hero.highlights.iter().enumerate() {
        if idx > 0 {
            highlights.push(Span::styled("   │   ", Style::default().fg(Color::DarkGray)));
        }
        highlights.push(Span::styled(
            highlight.value.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        highlights.push(Span::raw(" "));
        highlights.push(Span::styled(
            highlight.label.as_str(),
            Style::default().fg(Color::Gray),
        ));
    }
    lines.push(Line::from(highlights).alignment(Alignment::Center));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((app.state.scroll_offset, 0)),
        chunks[0],
    );

    let ctas = [&hero.primary_cta, &hero.secondary_cta];
    let widths = ctas.map(|cta| Constraint::Length(cta.name.chars().count() as u16 + 6));
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths)
        .flex(Flex::Center)
        .spacing(2)
        .split(chunks[1]);

    for (idx, cta) in ctas.iter().enumerate() {
        render_button(
            frame,
            buttons[idx],
            &cta.name,
            app.state.selected_cta == idx,
            true,
        );
    }
}
