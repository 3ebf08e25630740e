use arbkeys::app::App;
use arbkeys::cli::{parse_args, run_cli_command, CliCommand};
use arbkeys::config::ClientConfig;
use arbkeys::logging::init_logging;
use arbkeys::terminal::{setup_panic_hook, TerminalManager};
use arbkeys::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::time::Duration;

/// Redraw cadence; also drives spinner frames and status expiry.
const FRAME: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = parse_args(std::env::args())?;

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = args.url {
        config = config.with_base_url(url);
    }
    if args.command != CliCommand::Help {
        config.validate()?;
    }

    if let Some(result) = run_cli_command(&args.command, &config).await {
        return result;
    }

    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    setup_panic_hook();

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(config);
    app.start();

    let result = run(&mut manager, &mut app).await;

    app.shutdown();
    manager.restore()?;
    tracing::info!("Exited");
    result
}

async fn run(manager: &mut TerminalManager, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut message_rx = app.message_rx.take();

    loop {
        manager.terminal().draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            _ = tokio::time::sleep(FRAME) => {
                app.tick();
            }
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    // Resize and focus changes only need the redraw at the top of the loop
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "Terminal event stream failed");
                        return Err(e.into());
                    }
                    None => break,
                }
            }
            Some(message) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
