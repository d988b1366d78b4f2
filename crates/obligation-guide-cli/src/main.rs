mod render;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use obligation_guide_config::Config;
use obligation_guide_engine::{
    Obligation, ObligationGuide, ParseCache, load_mapping_table, load_module_store,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    process,
};

const PAGE: u16 = 10;

struct App {
    code: String,
    modules: Vec<Obligation>,
    module_list_state: ListState,
    cache: ParseCache,
    current_content: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(code: String, modules: Vec<Obligation>) -> Self {
        let mut app = Self {
            code,
            modules,
            module_list_state: ListState::default(),
            cache: ParseCache::default(),
            current_content: Vec::new(),
            scroll: 0,
        };

        if !app.modules.is_empty() {
            app.module_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        app
    }

    fn next_module(&mut self) {
        if self.modules.is_empty() {
            return;
        }
        let i = match self.module_list_state.selected() {
            Some(i) => (i + 1) % self.modules.len(),
            None => 0,
        };
        self.module_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_module(&mut self) {
        if self.modules.is_empty() {
            return;
        }
        let i = match self.module_list_state.selected() {
            Some(0) | None => self.modules.len() - 1,
            Some(i) => i - 1,
        };
        self.module_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn scroll_down(&mut self, by: u16) {
        let max = u16::try_from(self.current_content.len()).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(by).min(max.saturating_sub(1));
    }

    fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        if let Some(index) = self.module_list_state.selected()
            && let Some(module) = self.modules.get(index)
        {
            self.current_content = render::module_lines(module, &mut self.cache);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [--list] <cpv-code>");
}

fn load_guide(config: &Config) -> Result<ObligationGuide> {
    let table = load_mapping_table(&config.mapping_path)
        .with_context(|| format!("loading mapping {}", config.mapping_path.display()))?;
    let paths = config.module_paths()?;
    let modules = load_module_store(&paths)?;
    log::info!(
        "Loaded {} mapping entries and {} modules",
        table.len(),
        modules.len()
    );

    Ok(ObligationGuide::new(table, modules)
        .with_terminal(config.terminal_module.clone())
        .with_fallback(config.fallback_module.clone()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("obligation-guide-cli");

    let (list_only, code) = match args.get(1..).unwrap_or_default() {
        [flag, code] if flag == "--list" => (true, code.clone()),
        [code] if !code.starts_with('-') => (false, code.clone()),
        _ => {
            print_usage(program);
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            eprintln!("Error: No config file found");
            eprintln!("Create one at {}", config_path.display());
            print_usage(program);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let guide = load_guide(&config)?;
    let modules: Vec<Obligation> = guide.obligations_for(&code).into_iter().cloned().collect();

    if list_only {
        for module in &modules {
            println!("{}", module.obligation_id);
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(code, modules);
    let res = run_app(&mut terminal, &mut app);

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

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_module(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_module(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(PAGE),
                KeyCode::PageUp => app.scroll_up(PAGE),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let module_items: Vec<ListItem> = app
        .modules
        .iter()
        .map(|module| {
            ListItem::new(vec![
                Line::from(Span::raw(module.title.clone())),
                Line::from(Span::styled(
                    format!("  {}", module.obligation_id),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let module_list = List::new(module_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("CPV {}", app.code)),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(module_list, chunks[0], &mut app.module_list_state);

    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Geen verplichtingen gevonden")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Verplichting"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgUp/PgDn: Scroll"),
    ]));
    f.render_widget(help, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn module(id: &str) -> Obligation {
        Obligation {
            obligation_id: id.to_string(),
            archetype: "generic".to_string(),
            title: format!("Titel {id}"),
            summary: "Korte **samenvatting**.".to_string(),
            badges: vec![],
            warnings: None,
            footer_warnings: None,
            legal_references: vec![],
            sections: vec![],
        }
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut app = App::new("30000000".into(), vec![module("a"), module("b")]);
        assert_eq!(app.module_list_state.selected(), Some(0));
        app.previous_module();
        assert_eq!(app.module_list_state.selected(), Some(1));
        app.next_module();
        assert_eq!(app.module_list_state.selected(), Some(0));
    }

    #[test]
    fn empty_result_has_no_selection() {
        let mut app = App::new("99999999".into(), vec![]);
        app.next_module();
        assert_eq!(app.module_list_state.selected(), None);
        assert!(app.current_content.is_empty());
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut app = App::new("30000000".into(), vec![module("a")]);
        app.scroll_down(1000);
        assert!(usize::from(app.scroll) < app.current_content.len());
        app.scroll_up(1000);
        assert_eq!(app.scroll, 0);
    }
}
