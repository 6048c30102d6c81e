use anyhow::{Result, bail};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lng_engine::{AvailableLanguage, Localizer, io, languages};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    io::{Stdout, stdout},
    path::PathBuf,
};

struct App {
    resources_path: PathBuf,
    languages: Vec<AvailableLanguage>,
    current_language: usize,
    localizer: Localizer,
    keys: Vec<String>,
    key_list_state: ListState,
    status: Option<String>,
}

impl App {
    fn new(resources_path: PathBuf, language: Option<String>) -> Result<Self> {
        let available = io::available_languages(&resources_path)?;
        if available.is_empty() {
            bail!("No .lng files in {}", resources_path.display());
        }

        let current_language = language
            .and_then(|code| position_of(&available, &code))
            .unwrap_or(0);

        let localizer = Localizer::new();
        localizer.set_language(&resources_path, &available[current_language].code)?;

        let mut app = Self {
            resources_path,
            languages: available,
            current_language,
            localizer,
            keys: Vec::new(),
            key_list_state: ListState::default(),
            status: None,
        };
        app.refresh_keys();
        Ok(app)
    }

    fn next_key(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        let i = match self.key_list_state.selected() {
            Some(i) => (i + 1) % self.keys.len(),
            None => 0,
        };
        self.key_list_state.select(Some(i));
    }

    fn previous_key(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        let i = match self.key_list_state.selected() {
            Some(0) | None => self.keys.len() - 1,
            Some(i) => i - 1,
        };
        self.key_list_state.select(Some(i));
    }

    /// Moves to the next language, keeping the current one if it fails to load.
    fn next_language(&mut self) {
        let next = (self.current_language + 1) % self.languages.len();
        let lang = &self.languages[next];

        match self.localizer.set_language(&self.resources_path, &lang.code) {
            Ok(()) => {
                self.current_language = next;
                self.status = None;
                self.refresh_keys();
            }
            Err(e) => {
                log::warn!("Could not switch to {}: {e}", lang.code);
                self.status = Some(format!("{}: {e}", lang.name));
            }
        }
    }

    /// Reloads the key list, keeping the selected key when it still exists.
    fn refresh_keys(&mut self) {
        let selected = self.selected_key().map(str::to_string);
        self.keys = self
            .localizer
            .store()
            .names()
            .map(str::to_string)
            .collect();

        let index = selected
            .and_then(|key| self.keys.iter().position(|k| *k == key))
            .or((!self.keys.is_empty()).then_some(0));
        self.key_list_state.select(index);
    }

    fn selected_key(&self) -> Option<&str> {
        self.key_list_state
            .selected()
            .and_then(|i| self.keys.get(i))
            .map(String::as_str)
    }

    fn content(&self) -> Vec<Line<'static>> {
        let Some(key) = self.selected_key() else {
            return vec![Line::from("This resource has no strings")];
        };
        let store = self.localizer.store();

        let mut lines = Vec::new();
        if let Some(comment) = store.comment(key) {
            lines.push(Line::from(Span::styled(
                format!("; {comment}"),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::default());
        }
        lines.extend(
            store
                .lookup_or_key(key)
                .text()
                .lines()
                .map(|line| Line::from(line.to_string())),
        );
        lines
    }
}

/// Index of `code` among `available`, matching legacy short codes too.
fn position_of(available: &[AvailableLanguage], code: &str) -> Option<usize> {
    let code = languages::normalize_code(code);
    available.iter().position(|l| l.code == code).or_else(|| {
        let full = languages::canonical_code(&code)?;
        available.iter().position(|l| l.code == full)
    })
}

pub fn run(resources_path: PathBuf, language: Option<String>) -> Result<()> {
    // Load before touching the terminal so errors print normally
    let mut app = App::new(resources_path, language)?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_key(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_key(),
                KeyCode::Tab => app.next_language(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Key list panel
    let key_items: Vec<ListItem> = app
        .keys
        .iter()
        .map(|key| ListItem::new(Line::from(key.clone())))
        .collect();

    let keys_list = List::new(key_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Keys ({})", app.keys.len())),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(keys_list, chunks[0], &mut app.key_list_state);

    // Text panel
    let lang = &app.languages[app.current_language];
    let content = Paragraph::new(app.content())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({})", lang.name, lang.code)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Instructions, or the last language switch error
    let help_text = match &app.status {
        Some(status) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k: Previous | "),
            Span::raw("↓/j: Next | "),
            Span::raw("Tab: Next language"),
        ]),
    };

    f.render_widget(Paragraph::new(vec![help_text]), rows[1]);
}
