use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use trayhud::controller::{RaisePolicy, TrayController};
use trayhud::geom::Size;
use trayhud::metrics::SystemSampler;
use trayhud::position::PositionStore;
use trayhud::ui::pump::{EventPump, PumpEvent};
use trayhud::ui::shell::TermShell;
use trayhud::ui::theme::Theme;
use trayhud::ui::{self, input};
use trayhud::{event, logging};

#[derive(Parser)]
#[command(
    name = "trayhud",
    about = "Tray-style system resource monitor with a draggable terminal overlay"
)]
struct Cli {
    /// Metrics refresh cadence in milliseconds
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Keep-on-top reassertion cadence in milliseconds
    #[arg(long, default_value_t = 500)]
    raise_ms: u64,

    /// Keep-on-top policy: continuous, on-show
    #[arg(long, default_value = "continuous")]
    raise_policy: String,

    /// Where the overlay position is persisted (defaults to the user
    /// config dir)
    #[arg(long)]
    position_file: Option<PathBuf>,

    /// Log file (defaults next to the position file)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose logging; RUST_LOG can refine it further
    #[arg(long, default_value_t = false)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if cli.tick_ms == 0 || cli.raise_ms == 0 {
        return Err(eyre!("--tick-ms and --raise-ms must be greater than 0"));
    }

    let position_path = match &cli.position_file {
        Some(path) => path.clone(),
        None => PositionStore::default_location()
            .ok_or_else(|| eyre!("no user config directory; pass --position-file"))?,
    };
    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| position_path.with_file_name("trayhud.log"));
    let _log_guard = logging::init(&log_path, cli.debug);

    let mut terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, &cli, position_path).await;

    execute!(stdout(), DisableMouseCapture)?;
    ratatui::restore();

    result
}

async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    cli: &Cli,
    position_path: PathBuf,
) -> Result<()> {
    let term_size = terminal.size()?;
    let mut shell = TermShell::new(Size::new(term_size.width as i32, term_size.height as i32));
    let mut controller = TrayController::new(
        SystemSampler::new(),
        PositionStore::new(position_path),
        RaisePolicy::from_config_str(&cli.raise_policy),
        &mut shell,
    );
    let theme = Theme::default();
    let mut events = EventPump::new(
        Duration::from_millis(cli.tick_ms),
        Duration::from_millis(cli.raise_ms),
    );

    terminal.draw(|frame| ui::draw(frame, &controller, &shell, &theme))?;

    while controller.running {
        if let Some(pump_event) = events.next().await {
            let mapped = match pump_event {
                PumpEvent::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        input::map_key(key, &mut shell)
                    } else {
                        None
                    }
                }
                PumpEvent::Mouse(mouse) => input::map_mouse(mouse, &mut shell),
                PumpEvent::Tick(kind) => Some(event::Event::Tick(kind)),
                PumpEvent::Resize => {
                    let size = terminal.size()?;
                    shell.resize(Size::new(size.width as i32, size.height as i32));
                    None
                }
            };
            if let Some(ev) = mapped {
                controller.handle(ev, &mut shell);
            }
            // Menu navigation and resizes change the picture without
            // producing a controller event, so every pump event redraws.
            terminal.draw(|frame| ui::draw(frame, &controller, &shell, &theme))?;
        }
    }

    Ok(())
}
