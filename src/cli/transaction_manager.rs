use std::path::Path;

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

use crate::fmt::{format_bytes, rupiah};
use crate::intake::{self, SelectedFile, ACCEPTED_EXTENSIONS};
use crate::models::{InvoiceRecord, InvoiceStatus, TransactionRecord, TxnStatus};
use crate::samples::{sample_invoices, sample_transactions, InvoiceCounters, INVOICE_COUNTERS};
use crate::tui::{
    self, View, ViewAction, AMOUNT_POS_STYLE, FOOTER_STYLE, HEADER_STYLE, PENDING_STYLE,
    SELECTED_STYLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    AutoCategorization,
    InvoiceTracker,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::AutoCategorization, Tab::InvoiceTracker];

    pub fn title(&self) -> &'static str {
        match self {
            Self::AutoCategorization => "Auto Categorization",
            Self::InvoiceTracker => "Invoice & Payment",
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::AutoCategorization => 0,
            Self::InvoiceTracker => 1,
        }
    }

    fn other(&self) -> Tab {
        match self {
            Self::AutoCategorization => Self::InvoiceTracker,
            Self::InvoiceTracker => Self::AutoCategorization,
        }
    }
}

/// Statement upload with categorized lines, plus the invoice tracker.
pub struct TransactionManager {
    active_tab: Tab,
    file_input: String,
    selected_file: Option<SelectedFile>,
    transactions: Vec<TransactionRecord>,
    invoices: Vec<InvoiceRecord>,
    selection: usize,
}

impl Default for TransactionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionManager {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::AutoCategorization,
            file_input: String::new(),
            selected_file: None,
            transactions: Vec::new(),
            invoices: sample_invoices(),
            selection: 0,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    pub fn invoices(&self) -> &[InvoiceRecord] {
        &self.invoices
    }

    pub fn counters(&self) -> InvoiceCounters {
        INVOICE_COUNTERS
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.selection = 0;
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.other());
    }

    /// Accept a statement file and show the categorized lines. Rejected
    /// paths leave everything as it was.
    pub fn select_file(&mut self, path: &Path) -> bool {
        match intake::inspect(path) {
            Some(file) => {
                tracing::info!(
                    file = %file.name,
                    size = file.size,
                    kind = file.kind.name(),
                    "statement selected"
                );
                self.selected_file = Some(file);
                self.transactions = sample_transactions();
                self.selection = 0;
                true
            }
            None => {
                tracing::debug!(path = %path.display(), "file not accepted");
                false
            }
        }
    }

    fn row_count(&self) -> usize {
        match self.active_tab {
            Tab::AutoCategorization => self.transactions.len(),
            Tab::InvoiceTracker => self.invoices.len(),
        }
    }

    fn submit_path(&mut self) {
        let input = self.file_input.trim();
        if input.is_empty() {
            return;
        }
        let path = intake::expand_home(input);
        if self.select_file(&path) {
            self.file_input.clear();
        }
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    fn draw_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles = Tab::ALL.iter().map(|t| format!(" {} ", t.title()));
        let tabs = Tabs::new(titles)
            .select(self.active_tab.index())
            .style(FOOTER_STYLE)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("|");
        frame.render_widget(tabs, area);
    }

    fn draw_categorization(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                " Upload a bank statement",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" Accepted: {}", ACCEPTED_EXTENSIONS.join(", ")),
                FOOTER_STYLE,
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("   File path      ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("{}_", self.file_input),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
        ];

        if let Some(file) = &self.selected_file {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(
                    "   \u{2713} {} ({}, {})",
                    file.name,
                    format_bytes(file.size),
                    file.kind.name()
                ),
                AMOUNT_POS_STYLE,
            )));
        }

        lines.push(Line::from(""));
        if self.transactions.is_empty() {
            lines.push(Line::from(Span::styled(
                "   No transactions yet. Select a statement file to categorize it.",
                FOOTER_STYLE,
            )));
        } else {
            lines.push(list_heading("Categorization results"));
            lines.push(Line::from(Span::styled(
                format!(
                    "   {:<12}{:<24}{:>16}  {:<16}{}",
                    "Date", "Description", "Amount", "Category", "Status"
                ),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for (i, txn) in self.transactions.iter().enumerate() {
                lines.push(transaction_line(txn, i == self.selection));
            }
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn draw_invoices(&self, frame: &mut Frame, area: Rect) {
        let counters = self.counters();
        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("   Draft "),
                Span::styled(counters.draft.to_string(), invoice_style(InvoiceStatus::Draft)),
                Span::raw("     Sent "),
                Span::styled(counters.sent.to_string(), invoice_style(InvoiceStatus::Sent)),
                Span::raw("     Paid "),
                Span::styled(counters.paid.to_string(), invoice_style(InvoiceStatus::Paid)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "   Create new invoice  ",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                inert_control("+ Create invoice"),
            ]),
            Line::from(Span::styled(
                "   Build a digital invoice and send it straight to the customer.",
                FOOTER_STYLE,
            )),
            Line::from(""),
            list_heading("Invoice list"),
            Line::from(Span::styled(
                format!(
                    "   {:<10}{:<22}{:>16}  {:<12}{:<12}{}",
                    "Invoice", "Customer", "Amount", "Date", "Due", "Status"
                ),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        for (i, invoice) in self.invoices.iter().enumerate() {
            lines.push(invoice_line(invoice, i == self.selection));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Button-like label with no key bound to it.
fn inert_control(label: &str) -> Span<'static> {
    Span::styled(format!("[{label}]"), FOOTER_STYLE)
}

/// Section title followed by the list's Filter and Export controls.
fn list_heading(title: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {title}  "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        inert_control("Filter"),
        Span::raw(" "),
        inert_control("Export"),
    ])
}

fn transaction_line(txn: &TransactionRecord, selected: bool) -> Line<'static> {
    let amount = tui::money_span(txn.amount);
    let badge_style = match txn.status {
        TxnStatus::Categorized => AMOUNT_POS_STYLE,
        TxnStatus::Pending => PENDING_STYLE,
    };
    let marker = if selected { ">" } else { " " };
    let line = Line::from(vec![
        Span::raw(format!(" {marker} {:<12}{:<24}", txn.date, txn.description)),
        Span::styled(format!("{:>16}", amount.content), amount.style),
        Span::raw(format!("  {:<16}", txn.category)),
        Span::styled(txn.status.label(), badge_style),
    ]);
    if selected {
        line.style(SELECTED_STYLE)
    } else {
        line
    }
}

fn invoice_style(status: InvoiceStatus) -> Style {
    match status {
        InvoiceStatus::Paid => AMOUNT_POS_STYLE,
        InvoiceStatus::Sent => PENDING_STYLE,
        InvoiceStatus::Draft => Style::default().fg(Color::Gray),
    }
}

fn invoice_line(invoice: &InvoiceRecord, selected: bool) -> Line<'static> {
    let marker = if selected { ">" } else { " " };
    let line = Line::from(vec![
        Span::raw(format!(
            " {marker} {:<10}{:<22}{:>16}  {:<12}{:<12}",
            invoice.id,
            invoice.customer,
            rupiah(invoice.amount as f64),
            invoice.date,
            invoice.due_date
        )),
        Span::styled(invoice.status.label(), invoice_style(invoice.status)),
    ]);
    if selected {
        line.style(SELECTED_STYLE)
    } else {
        line
    }
}

impl View for TransactionManager {
    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [header_area, sep1, tabs_area, sep2, content_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(" Transactions & Invoices").style(HEADER_STYLE),
            header_area,
        );
        tui::render_separator(frame, sep1);
        self.draw_tab_bar(frame, tabs_area);
        tui::render_separator(frame, sep2);

        let hints = match self.active_tab {
            Tab::AutoCategorization => {
                self.draw_categorization(frame, content_area);
                " Tab=switch tab  type a path + Enter=select file  Up/Down=rows  Esc=back"
            }
            Tab::InvoiceTracker => {
                self.draw_invoices(frame, content_area);
                " Tab=switch tab  Up/Down=rows  Esc=back"
            }
        };
        frame.render_widget(Paragraph::new(hints).style(FOOTER_STYLE), hints_area);
    }

    fn handle_key(&mut self, code: KeyCode) -> ViewAction {
        match code {
            KeyCode::Esc => return ViewAction::Close,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => self.next_tab(),
            KeyCode::Up => self.selection = self.selection.saturating_sub(1),
            KeyCode::Down => {
                let rows = self.row_count();
                if rows > 0 {
                    self.selection = (self.selection + 1).min(rows - 1);
                }
            }
            KeyCode::Char(c) if self.active_tab == Tab::AutoCategorization => {
                self.file_input.push(c);
            }
            KeyCode::Backspace if self.active_tab == Tab::AutoCategorization => {
                self.file_input.pop();
            }
            KeyCode::Enter if self.active_tab == Tab::AutoCategorization => self.submit_path(),
            _ => {}
        }
        ViewAction::Continue
    }

    fn handle_paste(&mut self, text: &str) -> ViewAction {
        if self.active_tab == Tab::AutoCategorization {
            self.file_input.push_str(text.trim_end_matches(['\r', '\n']));
        }
        ViewAction::Continue
    }
}
