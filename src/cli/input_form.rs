use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::fmt::{group_digits, percent, rupiah, signed_percent};
use crate::metrics::DerivedSummary;
use crate::models::{sanitize_digits, FieldKey, FinancialRecord, Section};
use crate::tui::{
    self, View, ViewAction, AMOUNT_NEG_STYLE, AMOUNT_POS_STYLE, FOOTER_STYLE, HEADER_STYLE,
    SELECTED_STYLE,
};

pub type UpdateCallback = Box<dyn FnMut(&FinancialRecord)>;

const LABEL_WIDTH: usize = 26;

const TIPS: &[(&str, &str)] = &[
    (
        "Minimum input:",
        "latest month revenue and expenses, plus the current cash balance.",
    ),
    ("Best results:", "fill in all five months."),
    (
        "Number format:",
        "type plain digits, e.g. 5000000 for five million. Anything else is ignored.",
    ),
    (
        "After saving:",
        "the summary shows profit margin and month-on-month growth.",
    ),
];

/// Data-entry form for monthly figures and balance-sheet items.
///
/// Every update that leaves the three required fields filled is reported
/// to the callback, and so is an explicit save.
pub struct FinancialInputForm {
    record: FinancialRecord,
    is_complete: bool,
    show_form: bool,
    /// Index into `FieldKey::ALL`; one past the end is the Save button.
    focus: usize,
    scroll: usize,
    on_update: Option<UpdateCallback>,
}

impl FinancialInputForm {
    /// A seeded form opens on the read-only summary.
    pub fn new(initial: Option<FinancialRecord>) -> Self {
        let show_form = initial.is_none();
        let (record, is_complete) = match initial {
            Some(record) => (record, true),
            None => (FinancialRecord::default(), false),
        };
        Self {
            record,
            is_complete,
            show_form,
            focus: 0,
            scroll: 0,
            on_update: None,
        }
    }

    pub fn with_callback(mut self, callback: impl FnMut(&FinancialRecord) + 'static) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    pub fn record(&self) -> &FinancialRecord {
        &self.record
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn is_showing_summary(&self) -> bool {
        !self.show_form && self.is_complete
    }

    pub fn summary(&self) -> DerivedSummary {
        DerivedSummary::from_record(&self.record)
    }

    /// Store the digits of `raw` in `key` and re-check completeness.
    pub fn handle_input(&mut self, key: FieldKey, raw: &str) {
        let value = sanitize_digits(raw);
        self.record.set(key, value);
        self.is_complete = self.record.is_complete();
        tracing::debug!(field = key.key(), complete = self.is_complete, "field updated");

        if self.is_complete {
            self.notify();
        } else if self.focus >= FieldKey::ALL.len() {
            // Save button disappears with completeness
            self.focus = FieldKey::ALL.len() - 1;
        }
    }

    /// Switch to the summary and hand the record to the callback.
    pub fn save_and_analyze(&mut self) {
        if !self.is_complete {
            return;
        }
        self.show_form = false;
        tracing::info!(filled = self.record.filled_count(), "financial data saved");
        self.notify();
    }

    pub fn edit(&mut self) {
        self.show_form = true;
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_update.as_mut() {
            callback(&self.record);
        }
    }

    fn focused_field(&self) -> Option<FieldKey> {
        FieldKey::ALL.get(self.focus).copied()
    }

    fn last_focus(&self) -> usize {
        if self.is_complete {
            FieldKey::ALL.len()
        } else {
            FieldKey::ALL.len() - 1
        }
    }

    fn append_to_focused(&mut self, text: &str) {
        if let Some(key) = self.focused_field() {
            let raw = format!("{}{}", self.record.get(key), text);
            self.handle_input(key, &raw);
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) -> ViewAction {
        match code {
            KeyCode::Esc => return ViewAction::Close,
            KeyCode::Up | KeyCode::BackTab => {
                self.focus = self.focus.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Tab => {
                self.focus = (self.focus + 1).min(self.last_focus());
            }
            KeyCode::Enter => {
                if self.focused_field().is_none() {
                    self.save_and_analyze();
                } else {
                    self.focus = (self.focus + 1).min(self.last_focus());
                }
            }
            KeyCode::Home => self.focus = 0,
            KeyCode::End => self.focus = self.last_focus(),
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                self.append_to_focused(c.encode_utf8(&mut buf));
            }
            KeyCode::Backspace => {
                if let Some(key) = self.focused_field() {
                    let mut value = self.record.get(key).to_string();
                    if value.pop().is_some() {
                        self.handle_input(key, &value);
                    }
                }
            }
            KeyCode::Delete => {
                if let Some(key) = self.focused_field() {
                    self.handle_input(key, "");
                }
            }
            _ => {}
        }
        ViewAction::Continue
    }

    fn handle_summary_key(&mut self, code: KeyCode) -> ViewAction {
        match code {
            KeyCode::Char('e') => self.edit(),
            KeyCode::Esc | KeyCode::Char('q') => return ViewAction::Close,
            _ => {}
        }
        ViewAction::Continue
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    fn draw_form(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [header_area, sep, body_area, status_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(" Financial Data Entry").style(HEADER_STYLE),
            header_area,
        );
        tui::render_separator(frame, sep);

        let [fields_area, tips_area] =
            Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                .areas(body_area);

        let (lines, focused_line) = self.field_lines();
        self.scroll_to(focused_line, fields_area.height as usize);
        frame.render_widget(
            Paragraph::new(lines).scroll((self.scroll as u16, 0)),
            fields_area,
        );

        self.draw_tips(frame, tips_area);

        let status = if self.is_complete {
            Line::from(Span::styled(
                " Required fields filled. Select [ Save & view summary ] at the end of the form.",
                AMOUNT_POS_STYLE,
            ))
        } else {
            let missing: Vec<&str> = FieldKey::REQUIRED
                .iter()
                .filter(|k| self.record.get(**k).is_empty())
                .map(|k| k.label())
                .collect();
            Line::from(Span::styled(
                format!(" Still needed: {}", missing.join(", ")),
                Style::default().fg(Color::Yellow),
            ))
        };
        frame.render_widget(Paragraph::new(status), status_area);

        frame.render_widget(
            Paragraph::new(" Up/Down=field  Enter=next/save  Backspace=erase  Del=clear  Esc=back")
                .style(FOOTER_STYLE),
            hints_area,
        );
    }

    /// Build the scrollable field list. Returns the lines and the index of
    /// the line holding the focus.
    fn field_lines(&self) -> (Vec<Line<'static>>, usize) {
        let mut lines = Vec::new();
        let mut focused_line = 0;

        for section in Section::ALL {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(" {}", section.title()),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for (idx, key) in FieldKey::ALL.iter().enumerate() {
                if key.section() != *section {
                    continue;
                }
                if idx == self.focus {
                    focused_line = lines.len();
                }
                lines.push(self.field_line(*key, idx == self.focus));
            }
        }

        if self.is_complete {
            lines.push(Line::from(""));
            let focused = self.focused_field().is_none();
            if focused {
                focused_line = lines.len();
            }
            let style = if focused {
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(Span::styled(
                "   [ Save & view summary ]",
                style,
            )));
        }

        (lines, focused_line)
    }

    fn field_line(&self, key: FieldKey, focused: bool) -> Line<'static> {
        let marker = if key.is_required() { "*" } else { " " };
        let label_style = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let label = Span::styled(
            format!("  {marker} {:<width$}", key.label(), width = LABEL_WIDTH),
            label_style,
        );
        let prefix = if key.is_currency() { "Rp " } else { "   " };

        let value = self.record.get(key);
        let value_span = if focused {
            Span::styled(format!("{}\u{2588}", display_value(key, value)), SELECTED_STYLE)
        } else if value.is_empty() {
            Span::styled(key.placeholder().to_string(), FOOTER_STYLE)
        } else {
            Span::raw(display_value(key, value))
        };

        Line::from(vec![label, Span::styled(prefix, FOOTER_STYLE), value_span])
    }

    fn scroll_to(&mut self, focused_line: usize, height: usize) {
        if height == 0 {
            return;
        }
        // Keep the section heading above the first field in view
        if focused_line < self.scroll + 2 {
            self.scroll = focused_line.saturating_sub(2);
        } else if focused_line >= self.scroll + height {
            self.scroll = focused_line + 1 - height;
        }
    }

    fn draw_tips(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Tips ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner_width = area.width.saturating_sub(4) as usize;

        let mut lines = Vec::new();
        for (head, body) in TIPS {
            lines.push(Line::from(Span::styled(
                format!("\u{2022} {head}"),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            let (wrapped, _) = tui::wrap_text(body, inner_width);
            for part in wrapped.lines() {
                lines.push(Line::from(format!("  {part}")));
            }
        }
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_summary(&self, frame: &mut Frame) {
        let area = frame.area();
        let summary = self.summary();

        let [header_area, sep, cards_area, profit_area, note_area, _pad, hints_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(area);

        frame.render_widget(
            Paragraph::new(" Saved Financial Data").style(HEADER_STYLE),
            header_area,
        );
        tui::render_separator(frame, sep);

        let [revenue_area, margin_area, growth_area] = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas(cards_area);

        let growth_style = if summary.is_growing() {
            AMOUNT_POS_STYLE
        } else {
            AMOUNT_NEG_STYLE
        };

        draw_card(
            frame,
            revenue_area,
            "This month's revenue",
            rupiah(summary.current_revenue),
            AMOUNT_POS_STYLE,
        );
        draw_card(
            frame,
            margin_area,
            "Profit margin",
            percent(summary.profit_margin),
            Style::default().fg(Color::Cyan),
        );
        draw_card(
            frame,
            growth_area,
            "Growth rate",
            signed_percent(summary.growth),
            growth_style,
        );

        let profit_style = if summary.profit < 0.0 {
            AMOUNT_NEG_STYLE
        } else {
            AMOUNT_POS_STYLE
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(format!(" Expenses  {}   Profit  ", rupiah(summary.current_expense))),
                Span::styled(rupiah(summary.profit), profit_style),
            ])),
            profit_area,
        );

        frame.render_widget(
            Paragraph::new(
                "Financial data saved. Margin and growth are worked out from the latest two months.",
            )
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
            note_area,
        );

        frame.render_widget(
            Paragraph::new(" e=edit data  Esc=back  q=back").style(FOOTER_STYLE),
            hints_area,
        );
    }
}

fn draw_card(frame: &mut Frame, area: Rect, title: &str, value: String, style: Style) {
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(style);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(value, style.add_modifier(Modifier::BOLD))),
        ])
        .alignment(Alignment::Center)
        .block(block),
        area,
    );
}

/// Presentation form of a stored value: grouped for currency fields, as-is
/// for counts.
pub fn display_value(key: FieldKey, value: &str) -> String {
    if key.is_currency() {
        group_digits(value)
    } else {
        value.to_string()
    }
}

impl View for FinancialInputForm {
    fn draw(&mut self, frame: &mut Frame) {
        if self.is_showing_summary() {
            self.draw_summary(frame);
        } else {
            self.draw_form(frame);
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> ViewAction {
        if self.is_showing_summary() {
            self.handle_summary_key(code)
        } else {
            self.handle_form_key(code)
        }
    }

    fn handle_paste(&mut self, text: &str) -> ViewAction {
        if !self.is_showing_summary() {
            self.append_to_focused(text);
        }
        ViewAction::Continue
    }
}
