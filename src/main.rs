//! spark-input demo: logs classified keyboard and mouse events.
//!
//! Runs a ~60 Hz frame loop on the terminal. Each frame drains the
//! terminal's pending input into the pipeline, then ticks it once; the
//! classified event (if any) is printed by the event log.
//!
//! Esc or Ctrl+C quits. Set `SPARK_INPUT_LOG=debug` for pipeline details.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use log::{error, info};

use spark_input::clock::Clock;
use spark_input::input::{convert_event, poll_event};
use spark_input::terminal::TerminalSetup;
use spark_input::{logger, EventLog, InputPipeline, PipelineConfig};

const FRAME: Duration = Duration::from_millis(16);

/// Lines kept in the demo's event history.
const LOG_LINES: usize = 500;

fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key.code == KeyCode::Esc
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        }
        _ => false,
    }
}

fn run() -> io::Result<()> {
    let mut setup = TerminalSetup::new();
    setup.enter()?;

    let mut pipeline =
        InputPipeline::new(PipelineConfig::default()).with_event_log(EventLog::new(LOG_LINES));
    info!(
        "spark-input: press keys or click (key releases {}); Esc quits",
        if setup.reports_key_releases() { "on" } else { "off" }
    );

    loop {
        let frame_start = Instant::now();

        // Input delivery: everything already queued by the terminal
        let mut timeout = FRAME;
        while let Some(event) = poll_event(timeout)? {
            if is_quit(&event) {
                return setup.exit();
            }
            let now = pipeline.clock().now();
            if let Some(raw) = convert_event(event, now) {
                pipeline.ingest(raw);
            }
            timeout = FRAME.saturating_sub(frame_start.elapsed());
            if timeout.is_zero() {
                break;
            }
        }

        if let Err(e) = pipeline.tick() {
            error!("classification failed: {}", e);
            setup.exit()?;
            return Err(io::Error::other(e));
        }
    }
}

fn main() {
    if let Err(e) = logger::init() {
        eprintln!("[spark-input] logger init failed: {}", e);
    }

    if let Err(e) = run() {
        eprintln!("[spark-input] {}", e);
        std::process::exit(1);
    }
}
