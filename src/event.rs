use crate::geom::Point;

/// Which of the two recurring clocks fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickKind {
    /// Metrics refresh cadence (1 s by default).
    Metrics,
    /// Keep-on-top reassertion cadence (500 ms by default).
    Raise,
}

/// Every stimulus the controller reacts to, from either clock or from the
/// user. Frontends translate their native input into these; the controller
/// consumes them one at a time on a single thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Tick(TickKind),
    /// Primary tray activation (left-click on the tray icon, or its
    /// keyboard stand-in). Toggles overlay visibility.
    PrimaryActivate,
    /// Context activation (right-click). Opens the menu.
    ContextActivate,
    MenuToggleLock,
    MenuQuit,
    /// Left button pressed at a display position, already hit-tested against
    /// the overlay by the frontend.
    MouseDown(Point),
    MouseMove(Point),
    MouseUp,
}
