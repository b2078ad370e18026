//! Event Log - consumer of classified events
//!
//! Receives at most one classified event per tick, formats it, and keeps a
//! bounded text history for display.
//!
//! # API
//!
//! - `record(event)` - Log an event and notify handlers
//! - `last_event` - Reactive last recorded event
//! - `lines` - Formatted history, oldest first
//! - `lines_matching(filter)` - History lines passing a text filter
//! - `on(handler)` - Subscribe to recorded events
//! - `clear` - Drop the history
//!
//! # Example
//!
//! ```ignore
//! use spark_input::EventLog;
//!
//! let log = EventLog::new(500);
//! let cleanup = log.on(|event| {
//!     println!("got {}", event);
//! });
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use log::info;
use spark_signals::{signal, Signal};

use crate::types::RawInputEvent;

/// Default number of formatted lines kept by [`EventLog`].
pub const DEFAULT_MAX_LINES: usize = 1000;

/// Handler called for every recorded event.
pub type EventHandler = Rc<dyn Fn(&RawInputEvent)>;

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry {
    handlers: Vec<(usize, EventHandler)>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// =============================================================================
// TEXT FILTER
// =============================================================================

/// Comma separated, case-insensitive substring filter.
///
/// `"click,key"` passes lines containing either term; `"-move"` drops lines
/// containing "move". With no include terms every line not excluded passes.
struct TextFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl TextFilter {
    fn parse(filter: &str) -> Self {
        let mut include = Vec::new();
        let mut exclude = Vec::new();
        for term in filter.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match term.strip_prefix('-') {
                Some(rest) if !rest.is_empty() => exclude.push(rest.to_lowercase()),
                Some(_) => {}
                None => include.push(term.to_lowercase()),
            }
        }
        Self { include, exclude }
    }

    fn passes(&self, line: &str) -> bool {
        let line = line.to_lowercase();
        if self.exclude.iter().any(|t| line.contains(t.as_str())) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|t| line.contains(t.as_str()))
    }
}

// =============================================================================
// EVENT LOG
// =============================================================================

pub struct EventLog {
    lines: VecDeque<String>,
    max_lines: usize,
    recorded: u64,
    last_event: Signal<Option<RawInputEvent>>,
    registry: Rc<RefCell<HandlerRegistry>>,
}

impl EventLog {
    /// Create a log keeping at most `max_lines` lines (at least one).
    pub fn new(max_lines: usize) -> Self {
        let max_lines = max_lines.max(1);
        Self {
            lines: VecDeque::with_capacity(max_lines.min(DEFAULT_MAX_LINES)),
            max_lines,
            recorded: 0,
            last_event: signal(None),
            registry: Rc::new(RefCell::new(HandlerRegistry::new())),
        }
    }

    /// Record a classified event.
    pub fn record(&mut self, event: &RawInputEvent) {
        let line = event.to_string();
        info!(target: "spark_input::events", "{}", line);

        if self.lines.len() == self.max_lines {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
        self.recorded += 1;
        self.last_event.set(Some(*event));

        // Snapshot so a handler may run its own cleanup
        let handlers: Vec<EventHandler> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(event);
        }
    }

    /// Last recorded event (reactive).
    pub fn last_event(&self) -> Option<RawInputEvent> {
        self.last_event.get()
    }

    /// Signal backing [`last_event`](Self::last_event), for deriveds/effects.
    pub fn last_event_signal(&self) -> &Signal<Option<RawInputEvent>> {
        &self.last_event
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// History lines passing `filter`, oldest first. An empty filter passes
    /// everything.
    pub fn lines_matching<'a>(&'a self, filter: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let filter = TextFilter::parse(filter);
        self.lines
            .iter()
            .map(String::as_str)
            .filter(move |line| filter.passes(line))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total events recorded, including lines since dropped or cleared.
    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    /// Drop the text history. Handlers and the recorded count are kept.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Subscribe to recorded events. Returns a cleanup function.
    pub fn on<F>(&self, handler: F) -> impl FnOnce() + use<F>
    where
        F: Fn(&RawInputEvent) + 'static,
    {
        let id = {
            let mut reg = self.registry.borrow_mut();
            let id = reg.next_id();
            reg.handlers.push((id, Rc::new(handler)));
            id
        };

        let registry = Rc::downgrade(&self.registry);
        move || {
            if let Some(registry) = registry.upgrade() {
                registry
                    .borrow_mut()
                    .handlers
                    .retain(|(handler_id, _)| *handler_id != id);
            }
        }
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINES)
    }
}

// =============================================================================
// TESTS
// =============================================================================
