//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! Frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::{AppState, LoginField, Notice, Route, SignupField};
use crate::update::ROLE_ROUTES;

/// Fixed width of the centered content column.
const CONTENT_WIDTH: u16 = 60;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = centered(frame.area());
    match app.route {
        Route::Landing => render_landing(frame, area),
        Route::RoleSelect => render_role_select(app, frame, area),
        Route::Login => render_login(app, frame, area),
        Route::Signup => render_signup(app, frame, area),
        Route::Dashboard => render_dashboard(app, frame, area),
    }
}

/// Returns a centered column of fixed width within `area`.
fn centered(area: Rect) -> Rect {
    let width = area.width.min(CONTENT_WIDTH);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    Rect::new(x, area.y, width, area.height)
}

fn render_landing(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "B-BBEE Compliance Score Portal",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Measure and track your company's B-BBEE compliance score."),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: get started   q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let block = Block::default().borders(Borders::ALL).title(" beescore ");
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_role_select(app: &AppState, frame: &mut Frame, area: Rect) {
    let labels = ["Administrator login", "Administrator sign-up"];
    debug_assert_eq!(labels.len(), ROLE_ROUTES.len());
    let mut lines = vec![Line::from(""), Line::from("Select an option:"), Line::from("")];
    for (i, label) in labels.iter().enumerate() {
        let (marker, style) = if i == app.role_selected {
            ("> ", Style::default().fg(Color::Yellow))
        } else {
            ("  ", Style::default())
        };
        lines.push(Line::from(Span::styled(format!("{marker}{label}"), style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down: select   Enter: confirm   Esc: back",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL).title(" role ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_login(app: &AppState, frame: &mut Frame, area: Rect) {
    let fields = [
        (
            "Business email",
            app.login.business_email.as_str(),
            app.login.focus == LoginField::BusinessEmail,
            false,
        ),
        (
            "Password",
            app.login.password.as_str(),
            app.login.focus == LoginField::Password,
            true,
        ),
    ];
    render_form(
        frame,
        area,
        " admin login ",
        &fields,
        &app.login.notice,
        app.login.submitting,
    );
}

fn render_signup(app: &AppState, frame: &mut Frame, area: Rect) {
    let fields = [
        (
            "Company email",
            app.signup.companymail.as_str(),
            app.signup.focus == SignupField::Companymail,
            false,
        ),
        (
            "Employee name",
            app.signup.employee_name.as_str(),
            app.signup.focus == SignupField::EmployeeName,
            false,
        ),
        (
            "Contact number",
            app.signup.contact_number.as_str(),
            app.signup.focus == SignupField::ContactNumber,
            false,
        ),
    ];
    render_form(
        frame,
        area,
        " admin sign-up ",
        &fields,
        &app.signup.notice,
        app.signup.submitting,
    );
}

/// Shared form layout: labeled fields, an outcome line, and key hints.
fn render_form(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    fields: &[(&str, &str, bool, bool)],
    notice: &Notice,
    submitting: bool,
) {
    let mut lines = vec![Line::from("")];
    for (label, value, focused, masked) in fields {
        let shown = if *masked {
            "*".repeat(value.chars().count())
        } else {
            (*value).to_string()
        };
        let cursor = if *focused { "_" } else { "" };
        let style = if *focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{label:>16}: "), Style::default().fg(Color::Cyan)),
            Span::styled(format!("{shown}{cursor}"), style),
        ]));
    }
    lines.push(Line::from(""));

    match notice {
        Notice::None => {}
        Notice::Error(text) => lines.push(Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::Red),
        ))),
        Notice::Success(text) => lines.push(Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::Green),
        ))),
    }

    if submitting {
        lines.push(Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab: next field   Enter: submit   Esc: back",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_dashboard(app: &AppState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0)])
        .split(area);

    let mut lines = vec![Line::from("")];
    if let Some(dashboard) = &app.dashboard {
        lines.push(Line::from(Span::styled(
            dashboard.message.clone(),
            Style::default().fg(Color::Green),
        )));
        lines.push(Line::from(""));
        if let Some(name) = &dashboard.business_name {
            lines.push(Line::from(format!("        Business: {name}")));
        }
        lines.push(Line::from(format!(
            "           Email: {}",
            dashboard.business_email
        )));
        if let Some(contact) = &dashboard.contact_number {
            lines.push(Line::from(format!("         Contact: {contact}")));
        }
        lines.push(Line::from(format!(
            "           Token: {}",
            dashboard.token_masked
        )));
    } else {
        lines.push(Line::from("Not logged in."));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc: back to landing   q: quit",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL).title(" dashboard ");
    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);
}
