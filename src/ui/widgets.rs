//! Reusable UI widget helpers

use crate::content::SectionHeader;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Title and subtitle lines for a section, followed by a blank line
pub fn section_header(header: &SectionHeader) -> Vec<Line<'_>> {
    vec![
        Line::from(Span::styled(
            header.title.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            header.subtitle.as_str(),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ]
}

/// A `• item` bullet line
pub fn bullet(text: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(Color::Green)),
        Span::raw(text),
    ])
}

/// Render section lines in a bordered, wrapped, vertically scrolled panel
pub fn render_section(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, scroll: u16) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
