use crate::format::OverlayFields;
use crate::geom::{Point, Size};

/// Everything the controller asks of the platform surface: tray tooltip,
/// overlay window verbs, the context menu, display geometry and teardown.
///
/// The bundled terminal frontend (`ui::shell::TermShell`) implements this
/// against a terminal session; a desktop embedding would implement it
/// against a real tray icon and a frameless always-on-top window. The
/// controller never learns which one it is talking to.
pub trait Shell {
    /// Replace the tray tooltip text.
    fn set_tooltip(&mut self, text: &str);

    fn show_overlay(&mut self);

    fn hide_overlay(&mut self);

    /// Push freshly formatted readings into the overlay.
    fn set_overlay_fields(&mut self, fields: &OverlayFields);

    /// Move the overlay's top-left corner in display coordinates.
    fn move_overlay(&mut self, pos: Point);

    /// Re-assert the overlay's topmost stacking order.
    fn raise_overlay(&mut self);

    /// Open the context menu at the surface's idea of the invocation point.
    fn show_menu(&mut self);

    /// Current outer size of the overlay window.
    fn overlay_size(&self) -> Size;

    /// Usable area of the primary display, OS-reserved regions excluded.
    fn work_area(&self) -> Size;

    /// Release the surface. Called exactly once, right before the event
    /// loop stops.
    fn close(&mut self);
}
