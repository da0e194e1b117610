use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::KeyCode;
use rand::seq::SliceRandom;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::cli::input_form::FinancialInputForm;
use crate::cli::transaction_manager::{Tab, TransactionManager};
use crate::error::Result;
use crate::fmt::{percent, rupiah, signed_percent};
use crate::metrics::{parse_amount, DerivedSummary};
use crate::models::{FieldKey, FinancialRecord, TxnStatus};
use crate::settings::Settings;
use crate::tui::{
    self, View, ViewAction, AMOUNT_NEG_STYLE, AMOUNT_POS_STYLE, FOOTER_STYLE, HEADER_STYLE,
};

const GREETINGS: &[&str] = &[
    "Let's see how the shop is doing.",
    "Numbers first, coffee second.",
    "Back again? Good.",
    "The books won't fill themselves in.",
    "Another month, another statement.",
    "Shall we see where the money went?",
    "Pull up a chair.",
    "Everything's in order. Mostly.",
    "Ready when you are.",
    "Fancy a quick look at the numbers?",
];

const MENU_ITEMS: &[&str] = &[
    "Enter financial data",
    "Auto-categorize transactions",
    "Invoices & payments",
];

const REVENUE_MONTHS: [FieldKey; 5] = [
    FieldKey::RevenueMonth1,
    FieldKey::RevenueMonth2,
    FieldKey::RevenueMonth3,
    FieldKey::RevenueMonth4,
    FieldKey::RevenueMonth5,
];

const EXPENSE_MONTHS: [FieldKey; 5] = [
    FieldKey::ExpenseMonth1,
    FieldKey::ExpenseMonth2,
    FieldKey::ExpenseMonth3,
    FieldKey::ExpenseMonth4,
    FieldKey::ExpenseMonth5,
];

enum DashboardScreen {
    Home,
    Input,
    Transactions,
}

struct Dashboard {
    screen: DashboardScreen,
    greeting: String,
    menu_selection: usize,
    form: FinancialInputForm,
    transactions: TransactionManager,
    latest: Rc<RefCell<Option<FinancialRecord>>>,
}

fn build_greeting(first_name: Option<&str>, line: &str) -> String {
    match first_name {
        Some(name) if !name.is_empty() => format!("Hello, {name}. {line}"),
        _ => format!("Warung: {line}"),
    }
}

impl Dashboard {
    fn new(settings: &Settings) -> Self {
        let mut rng = rand::thread_rng();
        let line = GREETINGS.choose(&mut rng).unwrap_or(&"Hello.");

        let latest = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&latest);
        let form = FinancialInputForm::new(None).with_callback(move |record: &FinancialRecord| {
            *sink.borrow_mut() = Some(record.clone());
        });

        Self {
            screen: DashboardScreen::Home,
            greeting: build_greeting(settings.first_name(), line),
            menu_selection: 0,
            form,
            transactions: TransactionManager::new(),
            latest,
        }
    }

    fn draw_home(&self, frame: &mut Frame) {
        let area = frame.area();
        let menu_rows = MENU_ITEMS.len() as u16 + 1;

        let [header_area, sep1, stats_area, sep2, chart_area, sep3, menu_area, hints_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(menu_rows),
                Constraint::Length(1),
            ])
            .areas(area);

        frame.render_widget(
            Paragraph::new(format!(" {}", self.greeting)).style(HEADER_STYLE),
            header_area,
        );
        tui::render_separator(frame, sep1);
        tui::render_separator(frame, sep2);
        tui::render_separator(frame, sep3);

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(stats_area);

        let latest = self.latest.borrow();
        frame.render_widget(Paragraph::new(stats_lines(latest.as_ref())), left_area);
        frame.render_widget(Paragraph::new(self.list_lines()), right_area);

        if let Some(record) = latest.as_ref() {
            draw_monthly_chart(frame, chart_area, record);
        }

        let mut menu_lines = vec![Line::from(Span::styled(
            " What would you like to do?",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        menu_lines.extend((0..MENU_ITEMS.len()).map(|i| self.menu_item_line(i)));
        frame.render_widget(Paragraph::new(menu_lines), menu_area);

        frame.render_widget(
            Paragraph::new(" Up/Down=navigate  Enter=select  q=quit").style(FOOTER_STYLE),
            hints_area,
        );
    }

    fn list_lines(&self) -> Vec<Line<'static>> {
        let pending = self
            .transactions
            .transactions()
            .iter()
            .filter(|t| t.status == TxnStatus::Pending)
            .count();
        let file = self
            .transactions
            .selected_file()
            .map(|f| f.name.clone())
            .unwrap_or_else(|| "(none)".to_string());
        vec![
            Line::from(Span::styled(
                " Activity",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(" Statement      {file}")),
            Line::from(format!(
                " Transactions   {}",
                self.transactions.transactions().len()
            )),
            Line::from(format!(" Needs review   {pending}")),
            Line::from(format!(" Invoices       {}", self.transactions.invoices().len())),
        ]
    }

    fn menu_item_line(&self, i: usize) -> Line<'static> {
        let marker = if i == self.menu_selection { ">" } else { " " };
        let style = if i == self.menu_selection {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(Span::styled(format!(" {marker} {}", MENU_ITEMS[i]), style))
    }

    fn handle_home_key(&mut self, code: KeyCode) -> ViewAction {
        match code {
            KeyCode::Up => {
                self.menu_selection = self.menu_selection.saturating_sub(1);
            }
            KeyCode::Down => {
                self.menu_selection = (self.menu_selection + 1).min(MENU_ITEMS.len() - 1);
            }
            KeyCode::Char('q') => return ViewAction::Close,
            KeyCode::Enter => match self.menu_selection {
                0 => self.screen = DashboardScreen::Input,
                1 => {
                    self.transactions.select_tab(Tab::AutoCategorization);
                    self.screen = DashboardScreen::Transactions;
                }
                2 => {
                    self.transactions.select_tab(Tab::InvoiceTracker);
                    self.screen = DashboardScreen::Transactions;
                }
                _ => {}
            },
            _ => {}
        }
        ViewAction::Continue
    }
}

/// Home plus the two hosted views. Closing a hosted view returns home;
/// closing home ends the session.
impl View for Dashboard {
    fn draw(&mut self, frame: &mut Frame) {
        match self.screen {
            DashboardScreen::Home => self.draw_home(frame),
            DashboardScreen::Input => self.form.draw(frame),
            DashboardScreen::Transactions => self.transactions.draw(frame),
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> ViewAction {
        let action = match self.screen {
            DashboardScreen::Home => return self.handle_home_key(code),
            DashboardScreen::Input => self.form.handle_key(code),
            DashboardScreen::Transactions => self.transactions.handle_key(code),
        };
        if let ViewAction::Close = action {
            self.screen = DashboardScreen::Home;
        }
        ViewAction::Continue
    }

    fn handle_paste(&mut self, text: &str) -> ViewAction {
        match self.screen {
            DashboardScreen::Home => ViewAction::Continue,
            DashboardScreen::Input => self.form.handle_paste(text),
            DashboardScreen::Transactions => self.transactions.handle_paste(text),
        }
    }
}

fn stats_lines(latest: Option<&FinancialRecord>) -> Vec<Line<'static>> {
    let Some(record) = latest else {
        return vec![
            Line::from(Span::styled(
                " No financial data yet",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                " Choose \"Enter financial data\" to see profit, margin and growth.",
                FOOTER_STYLE,
            )),
        ];
    };

    let summary = DerivedSummary::from_record(record);
    let profit_style = if summary.profit < 0.0 {
        AMOUNT_NEG_STYLE
    } else {
        AMOUNT_POS_STYLE
    };
    let growth_style = if summary.is_growing() {
        AMOUNT_POS_STYLE
    } else {
        AMOUNT_NEG_STYLE
    };
    vec![
        Line::from(vec![
            Span::raw(" Revenue        "),
            Span::styled(rupiah(summary.current_revenue), AMOUNT_POS_STYLE),
        ]),
        Line::from(format!(" Expenses       {}", rupiah(summary.current_expense))),
        Line::from(vec![
            Span::raw(" Profit         "),
            Span::styled(rupiah(summary.profit), profit_style),
        ]),
        Line::from(format!(" Margin         {}", percent(summary.profit_margin))),
        Line::from(vec![
            Span::raw(" Growth         "),
            Span::styled(signed_percent(summary.growth), growth_style),
        ]),
    ]
}

/// Revenue/expense bar pairs for the five entered months, in thousands.
fn monthly_bars(record: &FinancialRecord) -> Vec<(String, u64, u64)> {
    REVENUE_MONTHS
        .iter()
        .zip(EXPENSE_MONTHS.iter())
        .enumerate()
        .map(|(i, (rev, exp))| {
            let to_k = |key: FieldKey| (parse_amount(record.get(key)) / 1000.0).round() as u64;
            (format!("M{}", i + 1), to_k(*rev), to_k(*exp))
        })
        .collect()
}

fn draw_monthly_chart(frame: &mut Frame, area: Rect, record: &FinancialRecord) {
    let data = monthly_bars(record);
    let income_style = Style::default().fg(Color::Rgb(80, 220, 100));
    let expense_style = Style::default().fg(Color::Red);

    let block = Block::default()
        .title(" Monthly revenue vs expenses (thousands)")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::NONE);

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2);
    for (label, revenue, expense) in &data {
        let bars = vec![
            Bar::default().value(*revenue).style(income_style),
            Bar::default().value(*expense).style(expense_style),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(label.clone()))
                .bars(&bars),
        );
    }
    frame.render_widget(chart, area);
}

pub fn run(settings: &Settings) -> Result<()> {
    let mut dashboard = Dashboard::new(settings);
    tracing::info!("dashboard opened");
    let result = tui::run_view(&mut dashboard);
    tracing::info!("dashboard closed");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        Dashboard::new(&Settings::default())
    }

    fn type_text(d: &mut Dashboard, text: &str) {
        for c in text.chars() {
            d.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_greeting_uses_first_name() {
        assert_eq!(
            build_greeting(Some("Siti"), "Ready when you are."),
            "Hello, Siti. Ready when you are."
        );
        assert_eq!(
            build_greeting(None, "Ready when you are."),
            "Warung: Ready when you are."
        );
    }

    #[test]
    fn test_menu_navigation_is_clamped() {
        let mut d = dashboard();
        d.handle_key(KeyCode::Up);
        assert_eq!(d.menu_selection, 0);
        for _ in 0..10 {
            d.handle_key(KeyCode::Down);
        }
        assert_eq!(d.menu_selection, MENU_ITEMS.len() - 1);
    }

    #[test]
    fn test_q_quits_only_from_home() {
        let mut d = dashboard();
        d.handle_key(KeyCode::Enter);
        assert!(matches!(d.screen, DashboardScreen::Input));
        // q is just another keystroke inside the form
        assert!(matches!(d.handle_key(KeyCode::Char('q')), ViewAction::Continue));
        // Esc closes the form but not the session
        assert!(matches!(d.handle_key(KeyCode::Esc), ViewAction::Continue));
        assert!(matches!(d.screen, DashboardScreen::Home));
        assert!(matches!(d.handle_key(KeyCode::Char('q')), ViewAction::Close));
    }

    #[test]
    fn test_form_callback_feeds_home_stats() {
        let mut d = dashboard();
        assert!(d.latest.borrow().is_none());

        d.form.handle_input(FieldKey::RevenueMonth5, "15000000");
        d.form.handle_input(FieldKey::ExpenseMonth5, "12000000");
        assert!(d.latest.borrow().is_none());
        d.form.handle_input(FieldKey::CashBalance, "1000000");

        let latest = d.latest.borrow();
        let record = latest.as_ref().unwrap();
        assert_eq!(record.revenue_month5, "15000000");
        assert_eq!(stats_lines(Some(record)).len(), 5);
    }

    #[test]
    fn test_invoice_menu_opens_invoice_tab() {
        let mut d = dashboard();
        d.handle_key(KeyCode::Down);
        d.handle_key(KeyCode::Down);
        d.handle_key(KeyCode::Enter);
        assert!(matches!(d.screen, DashboardScreen::Transactions));
        assert_eq!(d.transactions.active_tab(), Tab::InvoiceTracker);
    }

    #[test]
    fn test_views_keep_state_between_visits() {
        let mut d = dashboard();
        d.handle_key(KeyCode::Enter);
        type_text(&mut d, "42");
        d.handle_key(KeyCode::Esc);
        d.handle_key(KeyCode::Enter);
        assert_eq!(d.form.record().revenue_month1, "42");
    }

    #[test]
    fn test_paste_goes_to_active_view() {
        let mut d = dashboard();
        d.handle_paste("999");
        assert_eq!(d.form.record().revenue_month1, "");
        d.handle_key(KeyCode::Enter);
        d.handle_paste("Rp 999");
        assert_eq!(d.form.record().revenue_month1, "999");
    }

    #[test]
    fn test_monthly_bars_in_thousands() {
        let mut record = FinancialRecord::default();
        record.set(FieldKey::RevenueMonth1, "1500000");
        record.set(FieldKey::ExpenseMonth5, "499");
        let bars = monthly_bars(&record);
        assert_eq!(bars.len(), 5);
        assert_eq!(bars[0], ("M1".to_string(), 1500, 0));
        assert_eq!(bars[4], ("M5".to_string(), 0, 0));
    }

    #[test]
    fn test_stats_hint_without_data() {
        let lines = stats_lines(None);
        assert_eq!(lines.len(), 2);
    }
}
