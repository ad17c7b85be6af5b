use crate::geom::Point;

/// Visibility, lock and drag state of the overlay window.
///
/// Pure bookkeeping: this type never touches a window. The controller reads
/// the transitions and tells the shell what to show or move. Four effective
/// states: hidden, visible-locked, visible-unlocked idle, and
/// visible-unlocked with a drag in progress (`drag_anchor` held).
#[derive(Debug)]
pub struct OverlayState {
    visible: bool,
    locked: bool,
    drag_anchor: Option<Point>,
}

impl OverlayState {
    /// Starts hidden and locked.
    pub fn new() -> Self {
        OverlayState {
            visible: false,
            locked: true,
            drag_anchor: None,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Flips visibility, preserving the lock flag. Hiding cancels an active
    /// drag so an anchor can never outlive visibility. Returns the new
    /// visibility.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        if !self.visible {
            self.drag_anchor = None;
        }
        self.visible
    }

    /// Ignored while a drag is in progress: releasing the button with a
    /// stale anchor would teleport the window.
    pub fn toggle_lock(&mut self) {
        if self.drag_anchor.is_none() {
            self.locked = !self.locked;
        }
    }

    /// Arms a drag from a button press at `cursor` while the window sits at
    /// `window_pos`. Only valid when visible, unlocked and idle; every other
    /// state ignores the press.
    pub fn begin_drag(&mut self, cursor: Point, window_pos: Point) {
        if self.visible && !self.locked && self.drag_anchor.is_none() {
            self.drag_anchor = Some(cursor - window_pos);
        }
    }

    /// New window position for a cursor at `cursor`, or `None` when no drag
    /// is active. The caller applies the move; this state never stores
    /// positions.
    pub fn drag_to(&self, cursor: Point) -> Option<Point> {
        self.drag_anchor.map(|anchor| cursor - anchor)
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_locked() {
        let state = OverlayState::new();
        assert!(!state.visible());
        assert!(state.locked());
        assert!(!state.dragging());
    }

    #[test]
    fn double_toggle_restores_visibility_and_keeps_lock() {
        let mut state = OverlayState::new();
        state.toggle_lock();

        state.toggle_visibility();
        state.toggle_visibility();

        assert!(!state.visible());
        assert!(!state.locked());
    }

    #[test]
    fn drag_anchor_keeps_grab_offset_constant() {
        let mut state = OverlayState::new();
        state.toggle_visibility();
        state.toggle_lock();

        state.begin_drag(Point::new(100, 100), Point::new(10, 10));
        assert!(state.dragging());
        assert_eq!(state.drag_to(Point::new(150, 130)), Some(Point::new(60, 40)));

        state.end_drag();
        assert_eq!(state.drag_to(Point::new(150, 130)), None);
    }

    #[test]
    fn press_is_ignored_while_locked() {
        let mut state = OverlayState::new();
        state.toggle_visibility();

        state.begin_drag(Point::new(5, 5), Point::new(0, 0));
        assert!(!state.dragging());
    }

    #[test]
    fn press_is_ignored_while_hidden() {
        let mut state = OverlayState::new();
        state.toggle_lock();

        state.begin_drag(Point::new(5, 5), Point::new(0, 0));
        assert!(!state.dragging());
    }

    #[test]
    fn second_press_does_not_rearm_anchor() {
        let mut state = OverlayState::new();
        state.toggle_visibility();
        state.toggle_lock();

        state.begin_drag(Point::new(100, 100), Point::new(10, 10));
        state.begin_drag(Point::new(200, 200), Point::new(10, 10));

        assert_eq!(state.drag_to(Point::new(100, 100)), Some(Point::new(10, 10)));
    }

    #[test]
    fn lock_toggle_is_ignored_mid_drag() {
        let mut state = OverlayState::new();
        state.toggle_visibility();
        state.toggle_lock();
        state.begin_drag(Point::new(50, 50), Point::new(40, 40));

        state.toggle_lock();

        assert!(!state.locked());
        assert!(state.dragging());
    }

    #[test]
    fn hiding_cancels_an_active_drag() {
        let mut state = OverlayState::new();
        state.toggle_visibility();
        state.toggle_lock();
        state.begin_drag(Point::new(50, 50), Point::new(40, 40));

        state.toggle_visibility();

        assert!(!state.dragging());
        assert_eq!(state.drag_to(Point::new(60, 60)), None);
    }
}
