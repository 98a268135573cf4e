use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pastel_background::{BackgroundController, TerminalCanvas, background_color_with_alpha};
use pastel_config::Config;
use pastel_core::Origin;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph},
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Frame interval of the render loop.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Game path used by `g` when none was given on the command line.
const DEMO_GAME_PATH: &str = "demo.iso";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging()?;

    let config_path = Config::config_path().ok();
    let config = match &config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };
    let game_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEMO_GAME_PATH));

    let terminal = ratatui::init();
    let result = App::new(config, config_path, game_path).run(terminal);
    ratatui::restore();
    result
}

/// Write tracing output to the file named by `PASTEL_LOG`, if set.
///
/// The terminal belongs to the UI, so nothing is logged otherwise.
fn init_logging() -> color_eyre::Result<()> {
    let Some(path) = std::env::var_os("PASTEL_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Menu entries shown over the background.
const MENU_ITEMS: [&str; 4] = ["Resume", "Load game", "Settings", "Exit"];

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// User settings.
    config: Config,
    /// Where settings are saved, if a config directory exists.
    config_path: Option<PathBuf>,
    /// Game toggled on and off with `g`.
    game_path: PathBuf,
    /// Menu background.
    background: BackgroundController,
    /// Highlighted menu entry.
    selected: usize,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, config_path: Option<PathBuf>, game_path: PathBuf) -> Self {
        Self {
            running: false,
            config,
            config_path,
            game_path,
            background: BackgroundController::new(),
            selected: 0,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.background.shutdown();
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        {
            let mut canvas = TerminalCanvas::new(frame.buffer_mut(), area);
            if self.config.game_path.is_some() {
                self.background.draw_game_background(
                    &mut canvas,
                    &self.config,
                    self.config.game_path(),
                    Origin::ZERO,
                );
            } else {
                self.background.draw_background(
                    &mut canvas,
                    &self.config,
                    self.config.alpha,
                    Origin::ZERO,
                );
            }
        }

        let menu_area = centered(area, 34, MENU_ITEMS.len() as u16 + 4);
        let (r, g, b) = background_color_with_alpha().over((0, 0, 0));
        let accent = Color::Rgb(150, 60, 110);

        let lines: Vec<Line> = MENU_ITEMS
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == self.selected {
                    Line::from(format!("> {item} <")).bold().fg(accent)
                } else {
                    Line::from(*item).fg(Color::Rgb(90, 60, 80))
                }
            })
            .collect();

        let menu = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(" pastel ")
                    .title_alignment(Alignment::Center)
                    .border_style(Style::new().fg(accent)),
            )
            .style(Style::new().bg(Color::Rgb(r, g, b)));
        frame.render_widget(Clear, menu_area);
        frame.render_widget(menu, menu_area);

        let [_, status_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .areas(area);
        let game = match &self.config.game_path {
            Some(path) => path.display().to_string(),
            None => "none".to_string(),
        };
        let status = Line::from(vec![
            "a".bold().fg(accent),
            format!(" animation: {}  ", self.config.animation().name()).dark_gray(),
            "g".bold().fg(accent),
            format!(" game: {game}  ").dark_gray(),
            "q".bold().fg(accent),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(status, status_area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('a')) => self.cycle_animation(),
            (_, KeyCode::Char('g')) => self.toggle_game(),
            (_, KeyCode::Up) => self.move_selection(MENU_ITEMS.len() - 1),
            (_, KeyCode::Down) => self.move_selection(1),
            _ => {}
        }
    }

    /// Cycle the animation setting and persist it.
    fn cycle_animation(&mut self) {
        self.config.cycle_animation();
        self.save_config();
    }

    /// Show or hide the game background.
    fn toggle_game(&mut self) {
        self.config.game_path = match self.config.game_path {
            Some(_) => None,
            None => Some(self.game_path.clone()),
        };
        self.save_config();
    }

    fn move_selection(&mut self, step: usize) {
        self.selected = (self.selected + step) % MENU_ITEMS.len();
    }

    fn save_config(&self) {
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(err) = self.config.save_to(path) {
            warn!(%err, "failed to save config");
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// A `width × height` rectangle centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
