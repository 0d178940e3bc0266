use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};

use marquee::adapters::SystemBrowser;
use marquee::app::App;
use marquee::cli::CliArgs;
use marquee::config::Config;
use marquee::logging;
use marquee::terminal::{setup_panic_hook, TerminalManager};
use marquee::ui;

fn main() -> Result<()> {
    // --help / --version exit here, before the terminal is touched
    let args = CliArgs::parse();

    color_eyre::install()?;

    let config = match Config::load(args.config.as_deref()).and_then(Config::apply_env) {
        Ok(config) => args.apply(config),
        Err(err) => {
            eprintln!("{} [{}]", err.user_message(), err.error_code());
            eprintln!("Hint: {}", err.category().recovery_hint());
            return Err(err.into());
        }
    };

    if let Some(path) = logging::default_log_path() {
        if let Err(err) = logging::init(&path, &config.log_filter) {
            eprintln!("Warning: logging disabled: {}", err.user_message());
        }
    }
    tracing::info!(
        user = config.user.as_deref().unwrap_or("guest"),
        open_links = config.open_links,
        "configuration resolved"
    );

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(&config))?;

    tracing::info!("marquee exited cleanly");
    Ok(())
}

/// Own the terminal for the lifetime of the UI.
async fn run(config: &Config) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let size = manager.size()?;

    let mut app = App::new(config, Box::new(SystemBrowser));
    app.update_terminal_dimensions(size.width, size.height);

    let result = run_app(manager.terminal(), &mut app, config).await;
    manager.restore()?;
    result
}

/// Event loop: redraw when dirty, then wait for a terminal event or a tick.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config: &Config) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let tick_rate = config.tick_rate();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(tick_rate);

        tokio::select! {
            _ = timeout => {
                app.tick(Instant::now());
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key, Instant::now()),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse, Instant::now()),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::error!(error = %err, "terminal event stream failed");
                        return Err(err.into());
                    }
                    None => return Ok(()),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
