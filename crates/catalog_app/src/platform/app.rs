use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use catalog_core::{update, AppState, Msg};
use catalog_engine::EngineError;
use catalog_logging::{catalog_debug, catalog_info, LogDestination};
use log::LevelFilter;
use thiserror::Error;

use super::config::{self, ConfigError, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::ui::commands::{self, Command, HELP};
use super::ui::render::render;

/// How often the loop looks for finished fetches while waiting for input.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub fn run_app() -> Result<(), AppError> {
    catalog_logging::initialize(LogDestination::File, LevelFilter::Info);

    let config = config::load(Path::new(CONFIG_FILENAME))?;
    let runner = EffectRunner::new(config.engine_settings())?;

    let (input_tx, input_rx) = mpsc::channel::<Command>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(command) = commands::parse(&line) {
                if input_tx.send(command).is_err() {
                    return;
                }
            }
        }
        let _ = input_tx.send(Command::Quit);
    });

    let mut state = AppState::new();
    state.consume_dirty();
    present(&state);
    println!("\n{HELP}");

    loop {
        while let Some(msg) = runner.poll() {
            dispatch(&mut state, msg, &runner);
        }

        match input_rx.recv_timeout(POLL_INTERVAL) {
            Ok(Command::Dispatch(msg)) => dispatch(&mut state, msg, &runner),
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Unknown(text)) => println!("Unknown command `{text}`. Type `h` for help."),
            Ok(Command::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }

    catalog_info!("catalog_app exiting");
    Ok(())
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    catalog_debug!("dispatch {}", msg_name(&msg));
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.enqueue(effects);
    if state.consume_dirty() {
        present(state);
    }
}

fn present(state: &AppState) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "\n{}", render(&state.view()));
    let _ = stdout.flush();
}

fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::ShowCategories => "ShowCategories",
        Msg::OpenCategory { .. } => "OpenCategory",
        Msg::LoadPage { .. } => "LoadPage",
        Msg::NextPage => "NextPage",
        Msg::PrevPage => "PrevPage",
        Msg::LoadDetail { .. } => "LoadDetail",
        Msg::Back => "Back",
        Msg::PageLoaded { .. } => "PageLoaded",
        Msg::DetailLoaded { .. } => "DetailLoaded",
    }
}
