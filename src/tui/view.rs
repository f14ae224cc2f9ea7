//! Pure rendering: map App state to ratatui widget trees.
//!
//! The form is rendered field by field, skipping fields hidden by the
//! current values. A notice is drawn as a modal over the form.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::application::{Field, JobApplication, SKILLS, visible_fields};

use super::state::{App, JobForm, Screen};
use super::theme;

/// Lines kept visible below the focused label when scrolling.
const SCROLL_MARGIN: usize = 3;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Title, form, status, help
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    frame.render_widget(render_title(), chunks[0]);

    let (focus, skill_cursor) = match &app.screen {
        Screen::Editing {
            focus,
            skill_cursor,
        } => (*focus, Some(*skill_cursor)),
        Screen::Notice { focus, .. } => (*focus, None),
    };
    render_form(&app.form, focus, skill_cursor, frame, chunks[1]);

    frame.render_widget(render_status(&app.form), chunks[2]);
    frame.render_widget(render_help(&app.screen), chunks[3]);

    if let Screen::Notice { message, .. } = &app.screen {
        render_notice(message, frame, area);
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![Span::styled(
        "Job Application",
        theme::STYLE_TITLE,
    )]))
}

/// Summary of the last submit's errors, including hidden fields.
fn render_status(form: &JobForm) -> Paragraph<'static> {
    let count = form.errors().len();
    if count == 0 {
        return Paragraph::new("");
    }
    Paragraph::new(Span::styled(
        format!("{} field(s) need attention", count),
        theme::STYLE_DANGER,
    ))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Editing { .. } => {
            "[Tab/↑↓] move  [←→] choose  [Space] toggle  [Enter] submit  [Esc] quit"
        }
        Screen::Notice { .. } => "[Enter] OK",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// FORM
// ============================================================================

fn render_form(
    form: &JobForm,
    focus: Field,
    skill_cursor: Option<usize>,
    frame: &mut Frame,
    area: Rect,
) {
    let (lines, focus_line) = form_lines(form, focus, skill_cursor);

    // Keep the focused field on screen
    let height = area.height as usize;
    let offset = (focus_line + SCROLL_MARGIN).saturating_sub(height);

    let paragraph = Paragraph::new(lines).scroll((offset as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Build the form body. Returns the lines and the index of the focused
/// field's label line.
fn form_lines(
    form: &JobForm,
    focus: Field,
    skill_cursor: Option<usize>,
) -> (Vec<Line<'static>>, usize) {
    let values = form.values();
    let mut lines = vec![Line::from("")];
    let mut focus_line = 0;

    for field in visible_fields(values) {
        let focused = field == focus;
        if focused {
            focus_line = lines.len();
        }

        let (marker, label_style) = if focused {
            ("▸ ", theme::STYLE_INTERACTIVE)
        } else {
            ("  ", theme::STYLE_IMPORTANT)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, theme::STYLE_INTERACTIVE),
            Span::styled(format!("{}:", field.label()), label_style),
        ]));

        let mut value = vec![Span::raw("    ")];
        value.extend(value_spans(values, field, focused, skill_cursor));
        lines.push(Line::from(value));

        if let Some(message) = form.error(field) {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(message.to_string(), theme::STYLE_DANGER),
            ]));
        }
        lines.push(Line::from(""));
    }

    (lines, focus_line)
}

fn value_spans(
    values: &JobApplication,
    field: Field,
    focused: bool,
    skill_cursor: Option<usize>,
) -> Vec<Span<'static>> {
    match field {
        Field::Position => {
            let arrow_style = if focused {
                theme::STYLE_INTERACTIVE
            } else {
                theme::STYLE_DIM
            };
            let choice = match values.position {
                Some(p) => Span::raw(p.as_str()),
                None => Span::styled(field.placeholder().unwrap_or(""), theme::STYLE_DIM),
            };
            vec![
                Span::styled("< ", arrow_style),
                choice,
                Span::styled(" >", arrow_style),
            ]
        }
        Field::AdditionalSkills => skill_spans(&values.additional_skills, focused, skill_cursor),
        Field::RelevantExperience => {
            let text = values
                .relevant_experience
                .map(|n| n.to_string())
                .unwrap_or_default();
            text_spans(text, None, focused)
        }
        _ => {
            let text = match field {
                Field::FullName => &values.full_name,
                Field::Email => &values.email,
                Field::PhoneNumber => &values.phone_number,
                Field::PortfolioUrl => &values.portfolio_url,
                Field::ManagementExperience => &values.management_experience,
                _ => &values.interview_time,
            };
            text_spans(text.clone(), field.placeholder(), focused)
        }
    }
}

fn text_spans(text: String, placeholder: Option<&'static str>, focused: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if text.is_empty() {
        if let Some(hint) = placeholder.filter(|_| !focused) {
            spans.push(Span::styled(hint, theme::STYLE_DIM));
        }
    } else {
        spans.push(Span::raw(text));
    }
    if focused {
        spans.push(Span::styled("_", theme::STYLE_INTERACTIVE));
    }
    spans
}

fn skill_spans(selected: &[String], focused: bool, skill_cursor: Option<usize>) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, skill) in SKILLS.iter().enumerate() {
        let checked = selected.iter().any(|s| s == skill);
        let (mark, mut style) = if checked {
            ("[x] ", theme::STYLE_CHECKED)
        } else {
            ("[ ] ", theme::STYLE_UNCHECKED)
        };
        if focused && skill_cursor == Some(i) {
            style = style.patch(theme::STYLE_CURSOR);
        }
        spans.push(Span::styled(format!("{}{}", mark, skill), style));
        spans.push(Span::raw("  "));
    }
    spans
}

// ============================================================================
// NOTICE
// ============================================================================

fn render_notice(message: &str, frame: &mut Frame, area: Rect) {
    let width = (message.chars().count() as u16 + 8).max(24);
    let popup = centered(area, width, 6);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme::STYLE_SAFE)),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", theme::STYLE_INTERACTIVE)),
    ];
    let paragraph = Paragraph::new(text)
        .centered()
        .block(Block::bordered().title(" Submitted "));

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// A `width` × `height` rect centered in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ============================================================================
// TESTS
// ============================================================================
