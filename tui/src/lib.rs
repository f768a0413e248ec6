//! TUI rendering for Quadra using ratatui.

mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events, key_hints};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use quadra_engine::{App, Catalog, Coefficient, InputMode, NoticeLevel, ResolutionOutcome, Tab};
use quadra_types::format::field_label;
use quadra_types::{PanelLine, panel_lines};

const FIELD_HEIGHT: u16 = 3;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header + tabs
            Constraint::Min(1),    // Active panel
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette, &glyphs);
    match app.tab() {
        Tab::Quadratic => draw_quadratic(frame, app, chunks[1], &palette, &glyphs),
        Tab::LinearSystem => draw_linear_system(frame, app, chunks[1], &palette, &glyphs),
    }
    draw_status_bar(frame, app, chunks[2], &palette, &glyphs);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let language = app.language();
    let catalog = app.catalog();

    let mut spans = Vec::new();
    for (index, tab) in Tab::ALL.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.tab_divider),
                Style::default().fg(palette.bg_border),
            ));
        }
        let style = if tab == app.tab() {
            styles::tab_active(palette)
        } else {
            styles::tab_inactive(palette)
        };
        spans.push(Span::styled(
            format!(" {} {} ", index + 1, tab.title(language)),
            style,
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.bg_border))
            .title_top(Line::from(Span::styled(
                format!(" {} ", catalog.title),
                styles::title(palette),
            )))
            .title_top(
                Line::from(Span::styled(
                    format!(" {} ", language.code()),
                    styles::key_hint(palette),
                ))
                .alignment(Alignment::Right),
            ),
    );
    frame.render_widget(header, area);
}

fn draw_quadratic(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let catalog = app.catalog();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Equation template
            Constraint::Length(FIELD_HEIGHT), // a
            Constraint::Length(FIELD_HEIGHT), // b
            Constraint::Length(FIELD_HEIGHT), // c
            Constraint::Length(2),            // Buttons
            Constraint::Min(3),               // Result
        ])
        .split(area);

    let equation = if app.ui_options().ascii_only {
        "ax^2 + bx + c = 0"
    } else {
        "ax² + bx + c = 0"
    };
    let template = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", catalog.equation_form),
            Style::default().fg(palette.text_secondary),
        ),
        Span::styled(equation, styles::title(palette)),
    ]));
    frame.render_widget(template, chunks[0]);

    for coefficient in Coefficient::ALL {
        draw_field(
            frame,
            app,
            coefficient,
            chunks[1 + coefficient.index()],
            palette,
            glyphs,
        );
    }

    let buttons = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(format!(" {}   ", catalog.solve), styles::key_hint(palette)),
        Span::styled("c", styles::key_highlight(palette)),
        Span::styled(format!(" {}", catalog.clear), styles::key_hint(palette)),
    ]));
    frame.render_widget(buttons, chunks[4]);

    draw_result(frame, app.last_outcome(), catalog, chunks[5], palette, glyphs);
}

fn draw_field(
    frame: &mut Frame,
    app: &App,
    coefficient: Coefficient,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let catalog = app.catalog();
    let focused = app.focus() == coefficient;
    let editing = focused && app.input_mode() == InputMode::Insert;
    let draft = app.draft(coefficient);

    let marker = if focused { glyphs.selected } else { " " };
    let title = Line::from(vec![Span::styled(
        format!(" {marker} {} ", field_label(coefficient, catalog)),
        styles::field_label(palette, focused),
    )]);

    let content_width = area.width.saturating_sub(4).max(1) as usize;
    let (content, cursor_col) = if draft.text().is_empty() && !editing {
        (
            Span::styled(
                catalog.field_placeholders[coefficient.index()],
                styles::placeholder(palette),
            ),
            0,
        )
    } else {
        let (visible, cursor_col) = visible_slice(draft.text(), draft.byte_index(), content_width);
        (
            Span::styled(visible.to_string(), Style::default().fg(palette.text_primary)),
            cursor_col,
        )
    };

    let field = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::field_border(palette, focused))
            .title_top(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(field, area);

    if editing {
        let cursor_x = area.x.saturating_add(2).saturating_add(cursor_col as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Tail of `text` that keeps the cursor inside `width` columns, and the
/// cursor's column within it.
fn visible_slice(text: &str, cursor_byte: usize, width: usize) -> (&str, usize) {
    let cursor_display_pos = text[..cursor_byte].width();
    if cursor_display_pos < width {
        return (text, cursor_display_pos);
    }

    let scroll_target = cursor_display_pos - width + 1;
    let mut skipped_width = 0;
    let mut byte_offset = text.len();
    for (idx, grapheme) in text.grapheme_indices(true) {
        if skipped_width >= scroll_target {
            byte_offset = idx;
            break;
        }
        skipped_width += grapheme.width();
    }
    (
        &text[byte_offset..],
        cursor_display_pos.saturating_sub(skipped_width),
    )
}

fn draw_result(
    frame: &mut Frame,
    outcome: Option<&ResolutionOutcome>,
    catalog: &Catalog,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let label_style = Style::default().fg(palette.text_secondary);
    let value_style = styles::result_value(palette);

    let lines: Vec<Line> = outcome
        .map(|outcome| panel_lines(outcome, catalog))
        .unwrap_or_default()
        .into_iter()
        .map(|line| match line {
            PanelLine::Error(message) => Line::from(Span::styled(
                format!("{} {message}", glyphs.err),
                styles::error(palette),
            )),
            PanelLine::Discriminant { label, value } => Line::from(vec![
                Span::styled(format!("{label} "), label_style),
                Span::styled(value, value_style),
            ]),
            PanelLine::Conclusion { label, text } => Line::from(vec![
                Span::styled(format!("{label} "), label_style),
                Span::styled(text, Style::default().fg(palette.text_primary)),
            ]),
            PanelLine::RootsHeading(label) => Line::from(Span::styled(label, label_style)),
            PanelLine::Root { label, value } => Line::from(vec![
                Span::styled(format!("  {} {label} = ", glyphs.bullet), label_style),
                Span::styled(value, value_style),
            ]),
        })
        .collect();

    let result = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.bg_border))
            .title_top(Line::from(Span::styled(
                format!(" {} ", catalog.result_heading),
                styles::title(palette),
            )))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(result, area);
}

fn draw_linear_system(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let catalog = app.catalog();
    let text = Style::default().fg(palette.text_primary);

    let lines = vec![
        Line::from(Span::styled(catalog.linear_body[0], text)),
        Line::from(Span::styled(catalog.linear_body[1], text)),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{} ", glyphs.link), Style::default().fg(palette.accent)),
            Span::styled(app.linear_solver_url().to_string(), styles::link(palette)),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter", styles::key_highlight(palette)),
            Span::styled(format!(" {}", catalog.linear_open), styles::key_hint(palette)),
        ]),
        Line::default(),
        Line::from(Span::styled(catalog.linear_footer, styles::key_hint(palette))),
    ];

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.bg_border))
            .title_top(Line::from(Span::styled(
                format!(" {} ", catalog.linear_heading),
                styles::title(palette),
            )))
            .padding(Padding::new(2, 2, 1, 0)),
    );
    frame.render_widget(panel, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (mode_label, mode_style) = match app.input_mode() {
        InputMode::Normal => ("NORMAL", styles::mode_normal(palette)),
        InputMode::Insert => ("INSERT", styles::mode_insert(palette)),
    };

    let mut left = vec![Span::styled(format!(" {mode_label} "), mode_style)];
    if app.input_mode() == InputMode::Insert {
        left.push(Span::styled(
            format!(" {} ", app.focus().symbol()),
            Style::default().fg(palette.accent),
        ));
    }
    if let Some(notice) = app.notice() {
        let (glyph, color) = match notice.level {
            NoticeLevel::Info => (glyphs.info, palette.text_secondary),
            NoticeLevel::Error => (glyphs.err, palette.error),
        };
        left.push(Span::styled(
            format!(" {glyph} {}", notice.text),
            Style::default().fg(color),
        ));
    }

    let mut hints = Vec::new();
    for (key, action) in key_hints(app) {
        hints.push(Span::styled(*key, styles::key_highlight(palette)));
        hints.push(Span::styled(format!(" {action}  "), styles::key_hint(palette)));
    }
    let hints = Line::from(hints);
    let hints_width = (hints.width() as u16).min(area.width / 2);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(hints_width)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(left)), chunks[0]);
    frame.render_widget(
        Paragraph::new(hints.alignment(Alignment::Right)),
        chunks[1],
    );
}
