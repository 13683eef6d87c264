//! Impact section: statistics, testimonials and trust badges

use super::widgets::{render_section, section_header};
use crate::app::App;
use crate::state::{Role, View};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Draw the impact section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let impact = &app.content.impact;
    let mut lines = section_header(&impact.stats_header);

    for stat in &impact.stats {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>8} ", stat.number),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                stat.label.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", stat.description),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    lines.push(Line::from(""));

    lines.extend(section_header(&impact.testimonials_header));
    for testimonial in &impact.testimonials {
        let tag_color = match testimonial.kind {
            Role::Farmer => Color::Yellow,
            Role::Investor => Color::Cyan,
        };
        lines.push(Line::from(Span::styled(
            format!("“{}”", testimonial.quote),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(vec![
            Span::raw("  — "),
            Span::styled(
                testimonial.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(", {} ", testimonial.role),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("[{}]", testimonial.kind.as_str()),
                Style::default().fg(tag_color),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(
        Line::from(Span::styled(
            impact.trust_title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(
        Line::from(Span::styled(
            impact.trust_badges.join("  ✓  "),
            Style::default().fg(Color::Green),
        ))
        .alignment(Alignment::Center),
    );

    render_section(frame, area, View::Impact.title(), lines, app.state.scroll_offset);
}
