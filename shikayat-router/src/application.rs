//! Terminal host for a routed application.
//!
//! The application owns the tokio runtime, the terminal and the [`Router`].
//! Whatever the active page put into the outlet is drawn on every change;
//! key presses follow links (push) or walk history (popstate).

use crate::error::TerminalSnafu;
use crate::history::{History, MemoryHistory};
use crate::page::View;
use crate::router::Router;
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use snafu::ResultExt;
use std::io::{self, stdout};
use std::time::Duration;
use tokio::runtime::Runtime;

/// Settings for [`Application`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Location the history starts at, as if the page had been loaded there.
    pub start_location: String,
    /// How long to wait for input before checking for queued navigation.
    pub tick_rate: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_location: "/".to_string(),
            tick_rate: Duration::from_millis(100),
        }
    }
}

/// What a key press asks the loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Select(isize),
    Follow,
    Back,
    Forward,
    Quit,
}

impl Command {
    fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Command::Select(-1)),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(Command::Select(1)),
            KeyCode::Enter => Some(Command::Follow),
            KeyCode::Left | KeyCode::Char('b') | KeyCode::Backspace => Some(Command::Back),
            KeyCode::Right | KeyCode::Char('f') => Some(Command::Forward),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Main application handle.
pub struct Application {
    config: AppConfig,
}

impl Application {
    /// Create a new application instance.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Build the router, let `setup` register pages, then run until quit.
    ///
    /// `setup` runs inside the tokio runtime, so pages may spawn tasks from
    /// their constructors and from `render`.
    pub fn run<F>(self, setup: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Router<MemoryHistory>) -> anyhow::Result<()>,
    {
        let rt = Runtime::new().map_err(|e| anyhow::anyhow!("Failed to start tokio: {}", e))?;
        let mut router = Router::new(MemoryHistory::new(self.config.start_location.clone()));

        let _guard = rt.enter();
        setup(&mut router)?;
        tracing::info!(routes = router.routes().len(), "routes registered");
        router.init();
        drop(_guard);

        rt.block_on(async move { self.run_loop(router).await })
    }

    async fn run_loop<H: History>(&self, router: Router<H>) -> anyhow::Result<()> {
        let _restore = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend).context(TerminalSnafu)?;

        self.run_app_loop(&mut terminal, router).await
    }

    async fn run_app_loop<H: History>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mut router: Router<H>,
    ) -> anyhow::Result<()> {
        let mut changes = router.outlet().subscribe();
        let mut links = ListState::default();
        let mut redraw = true;

        loop {
            // Requests issued by tasks the pages spawned.
            router.dispatch_pending();

            if redraw || changes.has_changed().unwrap_or(false) {
                if changes.has_changed().unwrap_or(false) {
                    changes.mark_unchanged();
                    links.select(None);
                }
                let view = router.outlet().read(Clone::clone)?;
                if links.selected().is_none() && !view.links.is_empty() {
                    links.select(Some(0));
                }
                let status = status_line(&router);
                terminal
                    .draw(|frame| draw(frame, &view, &status, &mut links))
                    .context(TerminalSnafu)?;
                redraw = false;
            }

            let tick = self.config.tick_rate;
            let ready = event::poll(tick).context(TerminalSnafu)?;
            if !ready {
                continue;
            }

            let command = match event::read().context(TerminalSnafu)? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Command::from_key(key),
                CrosstermEvent::Resize(_, _) => {
                    redraw = true;
                    None
                }
                _ => None,
            };

            let Some(command) = command else { continue };
            redraw = true;
            match command {
                Command::Select(step) => {
                    let count = router.outlet().read(|view| view.links.len())?;
                    links.select(step_selection(links.selected(), step, count));
                }
                Command::Follow => {
                    let href = router.outlet().read(|view| {
                        links
                            .selected()
                            .and_then(|i| view.links.get(i))
                            .map(|link| link.href.clone())
                    })?;
                    if let Some(href) = href {
                        router.navigate(&href);
                    }
                }
                Command::Back => {
                    router.back();
                }
                Command::Forward => {
                    router.forward();
                }
                Command::Quit => {
                    tracing::info!("quit requested");
                    return Ok(());
                }
            }
        }
    }
}

/// Raw mode and the alternate screen, undone on drop (including unwinding
/// out of a panicking page).
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> crate::Result<Self> {
        enable_raw_mode().context(TerminalSnafu)?;
        let guard = TerminalGuard;
        execute!(stdout(), EnterAlternateScreen).context(TerminalSnafu)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::error!(%err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(stdout(), LeaveAlternateScreen, Show) {
            tracing::error!(%err, "failed to leave alternate screen");
        }
    }
}

fn step_selection(current: Option<usize>, step: isize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let current = current.unwrap_or(0) as isize;
    Some((current + step).rem_euclid(count as isize) as usize)
}

fn status_line<H: History>(router: &Router<H>) -> String {
    let history = router.history();
    format!(
        " {}  [{}/{}]  ↑↓ select · Enter open · ← back · → forward · q quit ",
        router.current_path().unwrap_or("-"),
        history.index() + 1,
        history.len(),
    )
}

fn draw(frame: &mut Frame, view: &View, status: &str, links: &mut ListState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(view.links.len().min(10) as u16 + 2),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let body: Vec<Line> = view.body.iter().map(|l| Line::from(l.as_str())).collect();
    let page = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} ", view.title))
                .borders(Borders::ALL),
        );
    frame.render_widget(page, chunks[0]);

    let items: Vec<ListItem> = view
        .links
        .iter()
        .map(|link| ListItem::new(format!("{}  ({})", link.label, link.href)))
        .collect();
    let list = List::new(items)
        .block(Block::default().title(" Links ").borders(Borders::ALL))
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(list, chunks[1], links);

    let status = Paragraph::new(status).style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(status, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(Command::from_key(key(KeyCode::Left)), Some(Command::Back));
        assert_eq!(Command::from_key(key(KeyCode::Char('f'))), Some(Command::Forward));
        assert_eq!(Command::from_key(key(KeyCode::Enter)), Some(Command::Follow));
        assert_eq!(Command::from_key(key(KeyCode::Up)), Some(Command::Select(-1)));
        assert_eq!(Command::from_key(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(Command::from_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_selection_wraps() {
        assert_eq!(step_selection(Some(0), -1, 3), Some(2));
        assert_eq!(step_selection(Some(2), 1, 3), Some(0));
        assert_eq!(step_selection(None, 1, 3), Some(1));
        assert_eq!(step_selection(Some(1), 1, 0), None);
    }

    #[test]
    fn test_status_line_shows_path_and_position() {
        let mut router: Router = Router::default();
        router
            .register("/faq", |_: &crate::Params, _: &mut crate::Context| {})
            .unwrap();
        router.navigate("/faq");
        let status = status_line(&router);
        assert!(status.contains("/faq"));
        assert!(status.contains("[2/2]"));
    }
}
