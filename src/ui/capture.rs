//! Early access signup form and its confirmation view

use super::components::{render_button, render_field, BUTTON_HEIGHT, FIELD_HEIGHT};
use super::widgets::section_header;
use crate::app::App;
use crate::state::{CaptureFocus, CaptureForm, Role, SubmissionPhase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SUBMIT_LABEL: &str = "Get Started →";
const PENDING_LABEL: &str = "Joining...";
const FORM_WIDTH: u16 = 60;

/// Draw the get-started section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Get Started ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [column] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Max(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(inner);

    if app.state.capture_form.is_succeeded() {
        draw_confirmation(frame, column, app);
    } else {
        draw_form(frame, column, app);
    }
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let copy = &app.content.capture;
    let form = &app.state.capture_form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(1),             // Validation / failure message
            Constraint::Length(4),             // Role selector
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),                // Notices
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(section_header(&copy.header)).wrap(Wrap { trim: true }),
        chunks[0],
    );

    render_field(
        frame,
        chunks[1],
        &form.email,
        form.focus == CaptureFocus::Email,
        true,
    );

    if let Some(line) = message_line(form) {
        frame.render_widget(Paragraph::new(line), chunks[2]);
    }

    frame.render_widget(
        Paragraph::new(role_lines(&copy.role_prompt, form)),
        chunks[3],
    );

    let label = if form.is_pending() {
        let frame_idx = (app.tick / 4) as usize % SPINNER.len();
        format!("{} {PENDING_LABEL}", SPINNER[frame_idx])
    } else {
        SUBMIT_LABEL.to_string()
    };
    render_button(
        frame,
        chunks[4],
        &label,
        form.focus == CaptureFocus::Submit,
        form.can_submit(),
    );

    let notices = vec![
        Line::from(""),
        Line::from(Span::styled(
            copy.privacy_notice.as_str(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            copy.launch_badge.as_str(),
            Style::default().fg(Color::Yellow),
        ))
        .alignment(Alignment::Center),
    ];
    frame.render_widget(
        Paragraph::new(notices).wrap(Wrap { trim: true }),
        chunks[5],
    );
}

/// Inline validation or failure message under the email field
fn message_line(form: &CaptureForm) -> Option<Line<'_>> {
    let text = match (form.validation_message(), form.phase()) {
        (Some(msg), _) => msg,
        (None, SubmissionPhase::Failed(reason)) => reason.as_str(),
        _ => return None,
    };
    Some(Line::from(Span::styled(
        format!(" ⚠ {text}"),
        Style::default().fg(Color::Red),
    )))
}

/// The role prompt followed by one radio line per role
fn role_lines<'a>(prompt: &'a str, form: &CaptureForm) -> Vec<Line<'a>> {
    let focused = form.focus == CaptureFocus::Role;
    let prompt_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut lines = vec![Line::from(Span::styled(prompt, prompt_style))];
    lines.extend(Role::ALL.iter().map(|role| {
        let selected = form.role() == *role;
        let marker = if selected { "◉" } else { "○" };
        let label_style = if selected {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("  {marker} "), label_style),
            Span::styled(role.label(), label_style),
            Span::styled(
                format!("  {}", role.tagline()),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }));
    lines
}

fn draw_confirmation(frame: &mut Frame, area: Rect, app: &App) {
    let copy = &app.content.capture;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            "✔",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            copy.success_title.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(copy.success_body.as_str()).alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);

    let [button] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(copy.reset_button.chars().count() as u16 + 6)])
        .flex(Flex::Center)
        .areas(chunks[2]);
    render_button(frame, button, &copy.reset_button, true, true);
}
