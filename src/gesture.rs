//! Pointer-drag sessions and hit testing against pitch spots.

use crate::board::Board;
use crate::layout::PitchLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "mouse" => Some(Self::Mouse),
            "touch" => Some(Self::Touch),
            "pen" => Some(Self::Pen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub button: i16,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    /// Only the primary mouse button starts a drag; touch and pen always do.
    pub fn starts_drag(&self) -> bool {
        self.kind != PointerKind::Mouse || self.button == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

/// Owner of the move/up/cancel listeners for a drag.
pub trait ListenerHost {
    fn attach(&mut self) -> ListenerId;
    fn detach(&mut self, id: ListenerId);
}

impl<T: ListenerHost + ?Sized> ListenerHost for &mut T {
    fn attach(&mut self) -> ListenerId {
        (**self).attach()
    }

    fn detach(&mut self, id: ListenerId) {
        (**self).detach(id)
    }
}

/// Attached listeners, detached once when released or dropped.
pub struct Subscription<H: ListenerHost> {
    host: H,
    id: Option<ListenerId>,
}

impl<H: ListenerHost> Subscription<H> {
    pub fn attach(mut host: H) -> Self {
        let id = host.attach();
        Self { host, id: Some(id) }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.host.detach(id);
        }
    }
}

impl<H: ListenerHost> Drop for Subscription<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// An in-progress drag of a player badge.
pub struct DragSession<H: ListenerHost> {
    player: String,
    ghost: (f64, f64),
    subscription: Subscription<H>,
}

impl<H: ListenerHost> DragSession<H> {
    pub fn start(host: H, player: &str, event: &PointerEvent) -> Option<Self> {
        if !event.starts_drag() {
            return None;
        }
        log::trace!("drag start {} at ({}, {})", player, event.x, event.y);
        Some(Self {
            player: player.to_string(),
            ghost: (event.x, event.y),
            subscription: Subscription::attach(host),
        })
    }

    /// Like [`DragSession::start`], refusing players not on the board's roster.
    pub fn start_on(board: &Board, host: H, player: &str, event: &PointerEvent) -> Option<Self> {
        if !board.roster().contains(player) {
            log::debug!("refusing drag of unknown player {:?}", player);
            return None;
        }
        Self::start(host, player, event)
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    /// Current ghost badge position.
    pub fn ghost(&self) -> (f64, f64) {
        self.ghost
    }

    pub fn on_move(&mut self, x: f64, y: f64) {
        self.ghost = (x, y);
    }

    /// End the drag at (x, y), returning the slot under the pointer.
    pub fn finish(mut self, targets: &SpotRects, x: f64, y: f64) -> Option<usize> {
        self.subscription.release();
        let hit = targets.hit(x, y);
        log::trace!("drag end {} -> {:?}", self.player, hit);
        hit
    }

    /// End the drag and place the player in the slot hit. Returns the slot
    /// only when the board accepted the player there.
    pub fn drop_on(
        self,
        board: &mut Board,
        targets: &SpotRects,
        x: f64,
        y: f64,
    ) -> Option<usize> {
        let player = self.player.clone();
        let hit = self.finish(targets, x, y)?;
        board.assign(hit, &player).then_some(hit)
    }

    pub fn cancel(mut self) {
        self.subscription.release();
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Pixel rectangles of every spot, in slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotRects {
    rects: Vec<Rect>,
}

impl SpotRects {
    pub fn from_layout(layout: &PitchLayout, width: f64, height: f64, spot: f64) -> Self {
        let half = spot / 2.0;
        let rects = layout
            .slots
            .iter()
            .map(|s| {
                let cx = s.x * width / 100.0;
                let cy = s.y * height / 100.0;
                Rect {
                    left: cx - half,
                    top: cy - half,
                    right: cx + half,
                    bottom: cy + half,
                }
            })
            .collect();
        Self { rects }
    }

    pub fn hit(&self, x: f64, y: f64) -> Option<usize> {
        self.rects.iter().position(|r| r.contains(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::FormationTemplate;
    use crate::layout::LayoutEngine;
    use crate::roster::Roster;

    #[derive(Default)]
    struct MockHost {
        next: u32,
        attached: Vec<ListenerId>,
        detached: Vec<ListenerId>,
    }

    impl ListenerHost for MockHost {
        fn attach(&mut self) -> ListenerId {
            self.next += 1;
            let id = ListenerId(self.next);
            self.attached.push(id);
            id
        }

        fn detach(&mut self, id: ListenerId) {
            self.detached.push(id);
        }
    }

    fn touch(x: f64, y: f64) -> PointerEvent {
        PointerEvent {
            kind: PointerKind::Touch,
            button: 0,
            x,
            y,
        }
    }

    fn rects() -> SpotRects {
        let layout = LayoutEngine::default().layout(FormationTemplate::Gk321, false);
        SpotRects::from_layout(&layout, 400.0, 600.0, 60.0)
    }

    #[test]
    fn test_secondary_mouse_button_ignored() {
        let mut host = MockHost::default();
        let event = PointerEvent {
            kind: PointerKind::Mouse,
            button: 2,
            x: 0.0,
            y: 0.0,
        };
        assert!(DragSession::start(&mut host, "A", &event).is_none());
        assert!(host.attached.is_empty());
    }

    #[test]
    fn test_finish_detaches_once() {
        let mut host = MockHost::default();
        let mut drag = DragSession::start(&mut host, "A", &touch(10.0, 10.0)).unwrap();
        drag.on_move(150.0, 300.0);
        assert_eq!(drag.ghost(), (150.0, 300.0));
        // Goalkeeper spot centre is (200, 528)
        assert_eq!(drag.finish(&rects(), 205.0, 520.0), Some(0));
        assert_eq!(host.attached, vec![ListenerId(1)]);
        assert_eq!(host.detached, vec![ListenerId(1)]);
    }

    #[test]
    fn test_finish_outside_spots() {
        let mut host = MockHost::default();
        let drag = DragSession::start(&mut host, "A", &touch(0.0, 0.0)).unwrap();
        assert_eq!(drag.finish(&rects(), 1.0, 1.0), None);
        assert_eq!(host.detached.len(), 1);
    }

    #[test]
    fn test_cancel_detaches() {
        let mut host = MockHost::default();
        let drag = DragSession::start(&mut host, "A", &touch(0.0, 0.0)).unwrap();
        drag.cancel();
        assert_eq!(host.detached, vec![ListenerId(1)]);
    }

    #[test]
    fn test_drop_detaches() {
        let mut host = MockHost::default();
        {
            let drag = DragSession::start(&mut host, "A", &touch(0.0, 0.0)).unwrap();
            assert_eq!(drag.player(), "A");
        }
        assert_eq!(host.detached, vec![ListenerId(1)]);
    }

    #[test]
    fn test_subscription_release_idempotent() {
        let mut host = MockHost::default();
        {
            let mut sub = Subscription::attach(&mut host);
            assert!(sub.is_active());
            sub.release();
            sub.release();
            assert!(!sub.is_active());
        }
        assert_eq!(host.detached.len(), 1);
    }

    #[test]
    fn test_hit_edges_inclusive() {
        // Goalkeeper spot: centre (200, 528), 60px across
        let rects = rects();
        assert_eq!(rects.hit(170.0, 498.0), Some(0));
        assert_eq!(rects.hit(230.0, 558.0), Some(0));
        assert_eq!(rects.hit(230.5, 558.0), None);
    }

    fn squad() -> Board {
        Board::with_roster(FormationTemplate::Gk321, Roster::from_names(["A", "B"]))
    }

    #[test]
    fn test_drag_of_unknown_player_refused() {
        let mut host = MockHost::default();
        let board = squad();
        assert!(DragSession::start_on(&board, &mut host, "Zed", &touch(0.0, 0.0)).is_none());
        assert!(host.attached.is_empty());
    }

    #[test]
    fn test_drop_on_places_player() {
        let mut host = MockHost::default();
        let mut board = squad();
        let drag = DragSession::start_on(&board, &mut host, "A", &touch(0.0, 0.0)).unwrap();
        assert_eq!(drag.drop_on(&mut board, &rects(), 200.0, 528.0), Some(0));
        assert_eq!(board.assignments().occupant(0), Some("A"));
        assert_eq!(host.detached.len(), 1);
    }

    #[test]
    fn test_drop_after_player_removed_reports_nothing() {
        let mut host = MockHost::default();
        let mut board = squad();
        let drag = DragSession::start_on(&board, &mut host, "A", &touch(0.0, 0.0)).unwrap();
        board.remove_player("A");
        assert_eq!(drag.drop_on(&mut board, &rects(), 200.0, 528.0), None);
        assert_eq!(board.assignments().occupant(0), None);
        assert_eq!(host.detached.len(), 1);
    }

    #[test]
    fn test_drop_off_pitch_leaves_board() {
        let mut host = MockHost::default();
        let mut board = squad();
        let drag = DragSession::start_on(&board, &mut host, "B", &touch(0.0, 0.0)).unwrap();
        assert_eq!(drag.drop_on(&mut board, &rects(), 1.0, 1.0), None);
        assert_eq!(board.bench(), vec!["A", "B"]);
    }

    #[test]
    fn test_pointer_kind() {
        assert_eq!(PointerKind::from_str("pen"), Some(PointerKind::Pen));
        assert_eq!(PointerKind::from_str("stylus"), None);
    }
}
