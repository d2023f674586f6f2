use agora_tui::{
    app::AppState,
    cli::Cli,
    data,
    event::AppEvent,
    logging,
    model::PageId,
    paths::Paths,
    shell::Shell,
    view::{builtin_registry, render},
};
use chrono::Utc;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let paths = Paths::from_env();

    let log_path = cli.log_path(&paths);
    logging::init(&log_path)
        .wrap_err_with(|| format!("failed to open log file {}", log_path.display()))?;

    let dataset_path = cli.dataset_path(&paths);
    let (dataset, data_error) = match data::load_or_demo(&dataset_path) {
        Ok(dataset) => (dataset, None),
        Err(error) => {
            tracing::warn!(
                path = %dataset_path.display(),
                %error,
                "data set unreadable, using demo data"
            );
            (data::demo_dataset()?, Some(error))
        }
    };

    let role = cli.user_role();
    let page = PageId::initial(cli.requested_page(), role.is_some());
    let mut state = AppState::with_page(page);
    state.user_role = role;
    let directory = dataset.apply(&mut state);
    tracing::info!(%page, role = ?state.user_role, "starting");

    let runtime = tokio::runtime::Runtime::new()?;
    let mut shell = Shell::new(
        state,
        directory,
        builtin_registry(cli.load_delay()),
        runtime.handle().clone(),
    );
    if let Some(error) = data_error {
        shell.apply(AppEvent::Error {
            source: dataset_path.display().to_string(),
            error: error.into(),
        });
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut shell, Duration::from_millis(250));

    // Terminal cleanup (always execute even if event loop errored)
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Render, apply keyboard input, apply whatever background loads queued,
/// tick the spinner.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    shell: &mut Shell,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| render(frame, shell))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                shell.apply(AppEvent::Key(key));
            }
        }

        shell.drain();

        if last_tick.elapsed() >= tick_rate {
            shell.apply(AppEvent::Tick(Utc::now()));
            last_tick = Instant::now();
        }

        if shell.should_quit() {
            tracing::info!("quit");
            break;
        }
    }

    Ok(())
}
