//! Three-step explainer

use super::about::call_to_action;
use super::widgets::{render_section, section_header};
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Draw the how-it-works section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let content = &app.content;
    let mut lines = section_header(&content.steps_header);

    for step in &content.steps {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", step.number),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                step.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", step.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    lines.extend(call_to_action(
        &content.steps_cta.title,
        &content.steps_cta.body,
        &content.steps_cta.button,
    ));

    render_section(frame, area, View::HowItWorks.title(), lines, app.state.scroll_offset);
}
