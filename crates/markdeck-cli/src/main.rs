use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markdeck_config::Config;
use markdeck_engine::{
    Arrangement, Controller, Deck, Intent, Phase, Slide, TransitionTiming, compile, io,
    select_layout,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::stdout,
    path::PathBuf,
    process,
    time::{Duration, Instant},
};

struct App {
    deck_path: PathBuf,
    deck: Deck,
    nav: Controller,
    picker_open: bool,
    picker_state: ListState,
    status: Option<String>,
}

impl App {
    fn new(deck_path: PathBuf, timing: TransitionTiming) -> Result<Self> {
        let text = io::read_deck(&deck_path)?;
        let compiled = compile(&text);
        for diagnostic in &compiled.diagnostics {
            log::warn!("{}: {diagnostic}", deck_path.display());
        }

        let nav = Controller::new(compiled.deck.len(), timing);
        Ok(Self {
            deck_path,
            deck: compiled.deck,
            nav,
            picker_open: false,
            picker_state: ListState::default(),
            status: None,
        })
    }

    fn displayed_slide(&self) -> Option<&Slide> {
        self.deck.get(self.nav.display_index())
    }

    fn dispatch(&mut self, intent: Intent) {
        self.status = None;
        self.nav.dispatch(intent, Instant::now());
    }

    fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
        if self.picker_open {
            self.picker_state.select(Some(self.nav.display_index()));
        }
    }

    fn picker_next(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        let i = match self.picker_state.selected() {
            Some(i) => (i + 1) % self.deck.len(),
            None => 0,
        };
        self.picker_state.select(Some(i));
    }

    fn picker_previous(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        let i = match self.picker_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.deck.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.picker_state.select(Some(i));
    }

    fn picker_jump(&mut self) {
        if let Some(index) = self.picker_state.selected() {
            self.dispatch(Intent::Jump(index));
        }
        self.picker_open = false;
    }

    /// Recompile the deck from disk. The controller is force-flushed to
    /// idle first so no stale transition timer survives the new sequence.
    fn reload(&mut self) {
        match io::read_deck(&self.deck_path) {
            Ok(text) => {
                let compiled = compile(&text);
                for diagnostic in &compiled.diagnostics {
                    log::warn!("{}: {diagnostic}", self.deck_path.display());
                }
                self.deck = compiled.deck;
                self.nav.reload(self.deck.len());
                self.status = Some(format!("Reloaded {} slides", self.deck.len()));
            }
            Err(e) => {
                self.status = Some(format!("Reload failed: {e}"));
            }
        }
    }

    /// Write the canonical serialized form next to the source file.
    fn export(&mut self) {
        let out = self.deck_path.with_extension("export.md");
        match io::export_deck(&out, &self.deck) {
            Ok(()) => self.status = Some(format!("Exported to {}", out.display())),
            Err(e) => self.status = Some(format!("Export failed: {e}")),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Determine deck path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let deck_path;
    let timing;

    if args.len() == 2 {
        // CLI argument provided - use it, with default timing
        deck_path = PathBuf::from(&args[1]);
        timing = TransitionTiming::default();
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                deck_path = config.deck_path;
                timing = TransitionTiming {
                    exit: Duration::from_millis(config.exit_ms),
                    settle: Duration::from_millis(config.settle_ms),
                };
            }
            Ok(None) => {
                eprintln!("Error: No deck file provided and no config file found");
                eprintln!("Usage: {} <deck-file>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <deck-file>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [deck-file]", args[0]);
        process::exit(1);
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let app = App::new(deck_path, timing);
    let res = match app {
        Ok(mut app) => run_app(&mut terminal, &mut app),
        Err(e) => Err(e),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        app.nav.tick(Instant::now());
        terminal.draw(|f| ui(f, app))?;

        // Wake up in time for the next phase change, otherwise idle slowly.
        let timeout = app
            .nav
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(250));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            if app.picker_open {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.toggle_picker(),
                    KeyCode::Down | KeyCode::Char('j') => app.picker_next(),
                    KeyCode::Up | KeyCode::Char('k') => app.picker_previous(),
                    KeyCode::Enter => app.picker_jump(),
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('j') => {
                        app.dispatch(Intent::Advance);
                    }
                    KeyCode::Left | KeyCode::Char('k') => app.dispatch(Intent::Retreat),
                    KeyCode::Tab | KeyCode::Char('g') => app.toggle_picker(),
                    KeyCode::Char('r') => app.reload(),
                    KeyCode::Char('e') => app.export(),
                    _ => {}
                }
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let Some(slide) = app.displayed_slide() else {
        let message = Paragraph::new(format!(
            "No slides found. Check {}",
            app.deck_path.display()
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
        f.render_widget(message, f.area());
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(f.area());

    // Slides mid-transition render dimmed; the phase is the renderer's only
    // cue for visual treatment.
    let in_transition = app.nav.phase() != Phase::Idle;
    let base_style = slide_style(slide, in_transition);

    render_header(f, app, slide, chunks[0]);
    render_slide(f, slide, base_style, chunks[1]);
    render_footer(f, app, chunks[2]);

    if app.picker_open {
        render_picker(f, app);
    }
}

fn slide_style(slide: &Slide, in_transition: bool) -> Style {
    let mut style = if slide.kind.is_dark() {
        Style::default().fg(Color::White).bg(Color::Black)
    } else {
        Style::default()
    };
    if slide.accent {
        style = style.fg(Color::Yellow);
    }
    if in_transition {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}

fn render_header(f: &mut Frame, app: &App, slide: &Slide, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(area);

    // Chapter segments, with the active run highlighted.
    let display_index = app.nav.display_index();
    let mut spans: Vec<Span> = Vec::new();
    for run in app.deck.chapter_runs() {
        let style = if run.contains(display_index) {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if !spans.is_empty() {
            spans.push(Span::raw("  ·  "));
        }
        spans.push(Span::styled(run.label.clone(), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue))
        .ratio(app.nav.progress())
        .label(slide.chapter.clone());
    f.render_widget(gauge, rows[1]);
}

fn render_slide(f: &mut Frame, slide: &Slide, style: Style, area: Rect) {
    let mut constraints = vec![Constraint::Length(2)];
    if slide.image.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    if slide.notes.is_some() {
        constraints.push(Constraint::Length(1));
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut next = 0;

    let headline = Paragraph::new(slide.headline.clone())
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(headline, rows[next]);
    next += 1;

    if slide.image.is_some() {
        // The terminal cannot paint the asset itself; show its description.
        let alt = slide.image_alt.as_deref().unwrap_or("image");
        let placeholder = Paragraph::new(format!("[{alt}]"))
            .style(style.fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(placeholder, rows[next]);
        next += 1;
    }

    render_tiles(f, &slide.body, style, rows[next]);

    if let Some(notes) = &slide.notes {
        let notes = Paragraph::new(notes.clone())
            .style(style.fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center);
        f.render_widget(notes, rows[next + 1]);
    }
}

/// Tile the body items per the layout selector: one flex row for small
/// counts, fixed-column rows for grids and tiered grids.
fn render_tiles(f: &mut Frame, body: &[String], style: Style, area: Rect) {
    let layout = select_layout(body.len());
    let per_row = match layout.arrangement {
        Arrangement::None => return,
        Arrangement::Row => body.len(),
        Arrangement::Grid | Arrangement::Tiered => layout.columns.unwrap_or(1) as usize,
    };

    let tile_rows: Vec<&[String]> = body.chunks(per_row).collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, tile_rows.len() as u32); tile_rows.len()])
        .split(area);

    for (row_items, row_area) in tile_rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, per_row as u32); per_row])
            .split(*row_area);
        for (item, cell) in row_items.iter().zip(cells.iter()) {
            let tile = Paragraph::new(item.clone())
                .style(style)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(tile, *cell);
        }
    }
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(area);

    let counter = format!("{} / {}", app.nav.display_index() + 1, app.deck.len());
    let counter = Paragraph::new(counter).alignment(Alignment::Center);
    f.render_widget(counter, rows[0]);

    let text = app.status.clone().unwrap_or_else(|| {
        "q: Quit | ←/→: Navigate | Tab: Picker | r: Reload | e: Export".to_string()
    });
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, rows[1]);
}

fn render_picker(f: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = app
        .deck
        .slides()
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            let marker = if index == app.nav.display_index() {
                "▸ "
            } else {
                "  "
            };
            let text = format!("{marker}{:>3}  {}", index + 1, slide.headline);
            ListItem::new(vec![Line::from(vec![Span::raw(text)])])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Select Slide"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, area, &mut app.picker_state);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(vertical[1]);
    horizontal[1]
}
