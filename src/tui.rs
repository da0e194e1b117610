use std::io::stdout;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind, KeyModifiers,
};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};

use crate::error::Result;
use crate::fmt::signed_rupiah;

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const AMOUNT_POS_STYLE: Style = Style::new().fg(Color::Rgb(80, 220, 100));
pub const AMOUNT_NEG_STYLE: Style = Style::new().fg(Color::Red);

pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::Rgb(40, 40, 60))
    .add_modifier(Modifier::BOLD);

pub const PENDING_STYLE: Style = Style::new().fg(Color::Yellow);

/// Format a ledger amount as a colored Span: green `+Rp` for income, red
/// absolute value for expenses.
pub fn money_span(amount: i64) -> Span<'static> {
    let style = if amount < 0 {
        AMOUNT_NEG_STYLE
    } else {
        AMOUNT_POS_STYLE
    };
    Span::styled(signed_rupiah(amount), style)
}

/// Wrap text to a given width. Returns (wrapped_string, line_count).
pub fn wrap_text(text: &str, width: usize) -> (String, u16) {
    if width == 0 {
        return (text.to_string(), 1);
    }
    let wrapped = textwrap::fill(text, width);
    let lines = wrapped.lines().count().max(1) as u16;
    (wrapped, lines)
}

/// Full-width heavy separator line.
pub fn render_separator(frame: &mut Frame, area: Rect) {
    let line = "\u{2501}".repeat(area.width as usize);
    frame.render_widget(Paragraph::new(line).style(BORDER_STYLE), area);
}

// ---------------------------------------------------------------------------
// View infrastructure
// ---------------------------------------------------------------------------

pub enum ViewAction {
    Continue,
    Close,
}

pub trait View {
    fn draw(&mut self, frame: &mut Frame);
    fn handle_key(&mut self, code: KeyCode) -> ViewAction;
    /// Bracketed-paste text. Views without text input ignore it.
    fn handle_paste(&mut self, _text: &str) -> ViewAction {
        ViewAction::Continue
    }
}

/// Put the terminal in TUI mode with bracketed paste and a panic hook that
/// restores it.
pub fn enter_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();
        hook(info);
    }));

    let terminal = ratatui::init();
    crossterm::execute!(stdout(), EnableBracketedPaste)?;
    Ok(terminal)
}

pub fn leave_terminal(terminal: DefaultTerminal) {
    let _ = crossterm::execute!(stdout(), DisableBracketedPaste);
    drop(terminal);
    ratatui::restore();
}

/// Run a single view until it closes or the user hits Ctrl-C.
pub fn run_view(view: &mut dyn View) -> Result<()> {
    let mut terminal = enter_terminal()?;

    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| view.draw(frame)) {
            break Err(e.into());
        }

        let action = match event::read() {
            Err(e) => break Err(e.into()),
            Ok(Event::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    break Ok(());
                }
                view.handle_key(key.code)
            }
            Ok(Event::Paste(text)) => view.handle_paste(&text),
            _ => ViewAction::Continue,
        };

        if let ViewAction::Close = action {
            break Ok(());
        }
    };

    leave_terminal(terminal);
    result
}
