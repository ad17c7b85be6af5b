use tracing::{debug, warn};

use crate::event::{Event, TickKind};
use crate::format::{OverlayFields, tooltip_error, tooltip_text};
use crate::geom::Point;
use crate::metrics::MetricSource;
use crate::overlay::OverlayState;
use crate::position::PositionStore;
use crate::shell::Shell;

/// When the periodic raise tick re-asserts the overlay's stacking order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RaisePolicy {
    /// Re-raise on every raise tick while the overlay is visible.
    #[default]
    Continuous,
    /// Raise only when the overlay becomes visible; the periodic tick does
    /// nothing. For surfaces where a raise steals input focus.
    OnShow,
}

impl RaisePolicy {
    pub fn from_config_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "on-show" | "onshow" => RaisePolicy::OnShow,
            _ => RaisePolicy::Continuous,
        }
    }
}

/// Owns the sampler, the overlay state machine, the position store and the
/// authoritative overlay position. All events from both clocks and from the
/// user funnel through [`TrayController::handle`] on one thread; there is no
/// other mutation path.
pub struct TrayController<S: MetricSource> {
    pub running: bool,
    sampler: S,
    overlay: OverlayState,
    store: PositionStore,
    position: Point,
    raise_policy: RaisePolicy,
    quit_done: bool,
}

impl<S: MetricSource> TrayController<S> {
    /// Builds the controller and places the overlay: at the stored position
    /// when one parses, tucked into the bottom-right corner of the work
    /// area otherwise. The overlay itself stays hidden until the first
    /// primary activation.
    pub fn new(
        sampler: S,
        store: PositionStore,
        raise_policy: RaisePolicy,
        shell: &mut impl Shell,
    ) -> Self {
        let position = match store.load() {
            Some(pos) => pos,
            None => {
                let pos = default_placement(shell);
                debug!(x = pos.x, y = pos.y, "no stored position, using default placement");
                pos
            }
        };
        shell.move_overlay(position);

        TrayController {
            running: true,
            sampler,
            overlay: OverlayState::new(),
            store,
            position,
            raise_policy,
            quit_done: false,
        }
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Single synchronous dispatch point. Each event is handled to
    /// completion before the next is looked at.
    pub fn handle(&mut self, event: Event, shell: &mut impl Shell) {
        match event {
            Event::Tick(TickKind::Metrics) => self.refresh_metrics(shell),
            Event::Tick(TickKind::Raise) => self.reassert_raise(shell),
            Event::PrimaryActivate => self.toggle_overlay(shell),
            Event::ContextActivate => shell.show_menu(),
            Event::MenuToggleLock => self.overlay.toggle_lock(),
            Event::MenuQuit => self.quit(shell),
            Event::MouseDown(cursor) => self.overlay.begin_drag(cursor, self.position),
            Event::MouseMove(cursor) => {
                if let Some(pos) = self.overlay.drag_to(cursor) {
                    self.position = pos;
                    shell.move_overlay(pos);
                }
            }
            Event::MouseUp => self.overlay.end_drag(),
        }
    }

    fn refresh_metrics(&mut self, shell: &mut impl Shell) {
        match self.sampler.sample() {
            Ok(metrics) => {
                shell.set_tooltip(&tooltip_text(&metrics));
                if self.overlay.visible() {
                    shell.set_overlay_fields(&OverlayFields::from_metrics(&metrics));
                }
            }
            Err(err) => {
                // Overlay fields keep their last-known values.
                warn!(error = %err, "metrics sample failed");
                shell.set_tooltip(&tooltip_error(&err));
            }
        }
    }

    fn reassert_raise(&mut self, shell: &mut impl Shell) {
        if self.overlay.visible() && self.raise_policy == RaisePolicy::Continuous {
            shell.raise_overlay();
        }
    }

    fn toggle_overlay(&mut self, shell: &mut impl Shell) {
        if self.overlay.toggle_visibility() {
            shell.show_overlay();
            shell.raise_overlay();
        } else {
            shell.hide_overlay();
        }
    }

    /// Persist-then-teardown, exactly once no matter how many quit paths
    /// fire before the loop stops.
    fn quit(&mut self, shell: &mut impl Shell) {
        if self.quit_done {
            return;
        }
        self.quit_done = true;

        if let Err(err) = self.store.save(self.position) {
            warn!(error = %err, "could not persist overlay position");
        }
        shell.close();
        self.running = false;
    }
}

/// Bottom-right corner of the work area, mirroring where a tray widget
/// naturally sits.
fn default_placement(shell: &impl Shell) -> Point {
    let work = shell.work_area();
    let size = shell.overlay_size();
    Point::new(work.width - size.width, work.height - size.height)
}
