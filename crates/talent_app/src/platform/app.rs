use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use hub_logging::{hub_info, hub_warn};
use talent_core::{update, AppState, Msg};
use talent_engine::Sources;

use super::commands::{self, Command};
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui;

/// Also the polling interval for engine completions.
const TICK: Duration = Duration::from_millis(75);

enum InputEvent {
    Line(String),
    Closed,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    hub_logging::initialize(config.log_destination(), config.log_level());
    hub_info!(
        "Starting talent hub: jobs={:?} talent={:?} base_url={}",
        config.jobs_source,
        config.talent_source,
        config.base_url
    );

    let sources =
        Sources::from_config(&config.source_config()).context("configuring listing sources")?;
    let effects = EffectRunner::new(sources).context("starting the search engine")?;
    let input_rx = spawn_input_reader().context("starting the input reader")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_lines(&mut out, &ui::layout::banner())?;

    let mut app = App {
        state: AppState::new(),
        effects,
    };
    app.dispatch(Msg::SessionStarted);
    app.render(&mut out)?;

    loop {
        let flow = match input_rx.recv_timeout(TICK) {
            Ok(InputEvent::Line(line)) => app.handle_line(&line, &mut out)?,
            Ok(InputEvent::Closed) | Err(RecvTimeoutError::Disconnected) => Flow::Quit,
            Err(RecvTimeoutError::Timeout) => {
                app.dispatch(Msg::Tick);
                Flow::Continue
            }
        };
        if let Flow::Quit = flow {
            break;
        }
        for msg in app.effects.poll() {
            app.dispatch(msg);
        }
        app.render_if_dirty(&mut out)?;
    }

    hub_info!("Talent hub exiting");
    Ok(())
}

struct App {
    state: AppState,
    effects: EffectRunner,
}

impl App {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
    }

    fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        match commands::parse(line, self.state.filters()) {
            Command::Dispatch(msgs) => {
                let view = self.state.view();
                match commands::admit(&msgs, view.notification.is_some(), view.search_enabled) {
                    Ok(()) => {
                        msgs.into_iter().for_each(|msg| self.dispatch(msg));
                        // The next frame brings its own prompt.
                        if self.state.is_dirty() {
                            return Ok(Flow::Continue);
                        }
                    }
                    Err(reason) => writeln!(out, "{reason}")?,
                }
            }
            Command::Help => write_lines(out, &ui::layout::help())?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Nothing => {}
            Command::Invalid(reason) => writeln!(out, "? {reason}")?,
        }
        prompt(out)?;
        Ok(Flow::Continue)
    }

    fn render_if_dirty(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.state.consume_dirty() {
            self.render(out)?;
        }
        Ok(())
    }

    fn render(&mut self, out: &mut impl Write) -> io::Result<()> {
        let view = self.state.view();
        self.state.consume_dirty();
        write_lines(out, &ui::render::render(&view))?;
        prompt(out)
    }
}

fn spawn_input_reader() -> io::Result<mpsc::Receiver<InputEvent>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(InputEvent::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(err) => {
                        hub_warn!("Reading input failed: {}", err);
                        break;
                    }
                }
            }
            let _ = tx.send(InputEvent::Closed);
        })?;
    Ok(rx)
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
