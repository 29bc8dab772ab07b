//! The application loop: [`Driver`], [`AppConfig`], [`App`].
//!
//! The loop polls the driver for input, turns it into session commands,
//! redraws, and flushes only the glyphs that changed. A search runs inline:
//! its step callback renders and flushes a frame, then polls the driver once
//! (waiting up to the configured step delay) so a quit request can cancel
//! the search between steps.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use pathviz_core::{CellState, Context, Grid};
use pathviz_search::Outcome;

use crate::input::{self, Action};
use crate::layout::Layout;
use crate::messages::Msg;
use crate::render::{self, Canvas, Frame, compute_frame};
use crate::session::{Command, Event, PaintOutcome, Phase, Session};

/// How long the idle loop waits for input before checking again.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

// ---------------------------------------------------------------------------
// Driver trait
// ---------------------------------------------------------------------------

/// Back-end driver (e.g. a terminal).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Wait up to `timeout` for input and send whatever is available through
    /// `tx`. Should return early once `ctx.is_done()`.
    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: Sender<Msg>,
        timeout: Duration,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Current screen size in cells, if the back-end knows it.
    fn screen_size(&self) -> Option<(i32, i32)> {
        None
    }

    /// Flush a computed frame to the screen.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Clean up / restore the terminal.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<D: Driver> {
    pub driver: D,
    /// Board dimension N.
    pub grid_size: i32,
    /// Terminal columns per board cell.
    pub cell_width: i32,
    /// Upper bound on the pause between two animated search steps.
    pub step_delay: Duration,
}

/// The main application runner.
pub struct App<D: Driver> {
    session: Session,
    driver: D,
    /// The layout asked for; `layout` may be narrower to fit the screen.
    preferred: Layout,
    layout: Layout,
    step_delay: Duration,
    status: String,
    prev: Canvas,
}

impl<D: Driver> App<D> {
    /// Create a new application from a configuration.
    pub fn new(config: AppConfig<D>) -> Self {
        let session = Session::new(config.grid_size);
        let status = phase_hint(session.phase()).to_string();
        let layout = Layout::new(config.grid_size, config.cell_width);
        Self {
            session,
            driver: config.driver,
            preferred: layout,
            layout,
            step_delay: config.step_delay,
            status,
            prev: Canvas::new(0, 0),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The layout in use, after fitting it to the screen.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Text currently shown on the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Run until the user quits or the driver fails.
    ///
    /// 1. Initialises the driver and fits the board to its screen, failing
    ///    if the screen is too small for it.
    /// 2. Sends `Msg::Init` and draws the empty board.
    /// 3. Enters the event loop: poll → translate → apply → draw → diff →
    ///    flush.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.driver.init()?;
        if let Some((width, height)) = self.driver.screen_size() {
            if let Err(e) = self.fit_screen(width, height) {
                self.driver.close();
                return Err(e);
            }
        }
        let ctx = Context::new();
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        tx.send(Msg::Init).ok();

        let result = self.event_loop(&ctx, &tx, &rx);
        self.driver.close();
        result
    }

    fn event_loop(
        &mut self,
        ctx: &Context,
        tx: &Sender<Msg>,
        rx: &Receiver<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        loop {
            let mut needs_draw = false;
            while let Ok(msg) = rx.try_recv() {
                needs_draw = true;
                self.handle(msg, ctx)?;
                if ctx.is_done() {
                    return Ok(());
                }
            }

            if needs_draw {
                self.redraw()?;
            }

            self.driver.poll_msgs(ctx, tx.clone(), FRAME_INTERVAL)?;
            if ctx.is_done() {
                return Ok(());
            }
        }
    }

    /// Draw the board and status line, flushing what changed.
    fn redraw(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let canvas = render::draw(self.session.grid(), &self.layout, &self.status);
        let frame = compute_frame(&self.prev, &canvas);
        if !frame.is_empty() {
            self.driver.flush(frame)?;
        }
        self.prev = canvas;
        Ok(())
    }

    /// Pick the widest cells that let the board fit a `width`×`height`
    /// screen.
    fn fit_screen(&mut self, width: i32, height: i32) -> Result<(), Box<dyn std::error::Error>> {
        let Some(layout) = self.preferred.fit_to(width, height) else {
            let (n, rows) = (self.preferred.size(), self.preferred.status_row() + 1);
            return Err(format!(
                "the terminal is {width}x{height} but a {n}x{n} board needs at least \
                 {n} columns and {rows} rows; use a smaller board"
            )
            .into());
        };
        if layout != self.layout {
            log::info!(
                "board cells are {} column(s) wide to fit a {width}x{height} screen",
                layout.cell_width()
            );
        }
        self.layout = layout;
        Ok(())
    }

    fn handle(&mut self, msg: Msg, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
        if let Msg::Screen { width, height } = msg {
            log::debug!("screen resized to {width}x{height}");
            if let Err(e) = self.fit_screen(width, height) {
                log::warn!("{e}");
                self.status = "terminal too small for the board".to_string();
            }
            // The terminal may have dropped its contents; repaint everything.
            self.prev = Canvas::new(0, 0);
            return Ok(());
        }

        match input::translate(&msg, &self.layout) {
            None => Ok(()),
            Some(Action::Quit) => {
                ctx.cancel();
                Ok(())
            }
            Some(Action::Command(Command::Run)) => self.run_search(ctx),
            Some(Action::Command(cmd)) => {
                let result = self.session.apply(cmd, ctx, |_| {});
                self.report(result);
                Ok(())
            }
        }
    }

    /// Run a search, animating each step and honouring quit requests.
    fn run_search(&mut self, app_ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
        let search_ctx = Context::new();
        let (step_tx, step_rx) = mpsc::channel();
        let mut failure: Option<Box<dyn std::error::Error>> = None;
        let mut quit = false;

        let Self {
            session,
            driver,
            layout,
            step_delay,
            prev,
            ..
        } = self;

        let result = session.apply(Command::Run, &search_ctx, |grid: &Grid| {
            if failure.is_some() {
                return;
            }
            let canvas = render::draw(grid, layout, &progress_line(grid));
            let frame = compute_frame(prev, &canvas);
            let step = driver
                .flush(frame)
                .and_then(|()| driver.poll_msgs(&search_ctx, step_tx.clone(), *step_delay));
            *prev = canvas;
            if let Err(e) = step {
                failure = Some(e);
                search_ctx.cancel();
                return;
            }
            while let Ok(msg) = step_rx.try_recv() {
                if input::translate(&msg, layout) == Some(Action::Quit) {
                    quit = true;
                    search_ctx.cancel();
                }
            }
        });

        if let Some(e) = failure {
            return Err(e);
        }
        self.report(result);
        if quit {
            app_ctx.cancel();
        }
        Ok(())
    }

    /// Update the status line with the result of a command.
    fn report(&mut self, result: pathviz_core::Result<Event>) {
        self.status = match result {
            Ok(Event::Painted(pos, PaintOutcome::Start)) => {
                format!("start at {pos}; {}", phase_hint(self.session.phase()))
            }
            Ok(Event::Painted(pos, PaintOutcome::End)) => {
                format!("end at {pos}; {}", phase_hint(self.session.phase()))
            }
            Ok(Event::Painted(..)) | Ok(Event::Erased(..)) | Ok(Event::Reset) => {
                phase_hint(self.session.phase()).to_string()
            }
            Ok(Event::Cleared(n)) => format!("cleared {n} cells; space: run again"),
            Ok(Event::Searched(res)) => match res.outcome {
                Outcome::Found => format!(
                    "path of {} cells, {} expanded; x: clear  c: reset",
                    res.path_len(),
                    res.expanded.len()
                ),
                Outcome::NoPath => format!(
                    "no path ({} expanded); x: clear  c: reset",
                    res.expanded.len()
                ),
                Outcome::Aborted => "search aborted".to_string(),
            },
            Err(e) => {
                log::warn!("command rejected: {e}");
                e.to_string()
            }
        };
    }
}

fn phase_hint(phase: Phase) -> &'static str {
    match phase {
        Phase::NoEndpoints | Phase::EndOnly => "left click: place start  q: quit",
        Phase::StartOnly => "left click: place end  right click: erase",
        Phase::Ready => "space: run  left: wall  right: erase  c: reset  q: quit",
    }
}

fn progress_line(grid: &Grid) -> String {
    format!(
        "searching: {} open, {} visited  q: quit",
        grid.count(CellState::Frontier),
        grid.count(CellState::Visited)
    )
}
