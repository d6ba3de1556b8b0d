//! Focus router: key dispatch, tab cycling, and mouse hit-testing.
//!
//! Key events go to the active control and nowhere else. Tab cycling
//! walks the active pane's controls in wrap-around insertion order,
//! skipping anything that does not handle keys, and gives up after one
//! full lap. Mouse routing hit-tests panes top-down, except that a set
//! modal pane captures all mouse routing exclusively.

use super::display::Display;
use crate::input::{Click, Cycle, Event};
use crate::widget::Control;
use std::io::{Read, Write};

impl<R: Read, W: Write> Display<R, W> {
    /// Deliver a key event to the active control only.
    ///
    /// No active control means the event is silently dropped.
    pub(super) fn dispatch_key(&mut self, event: &Event) {
        let Some((pane_name, control_name)) = self.active.clone() else {
            return;
        };
        let changed = self
            .pane_mut(&pane_name)
            .and_then(|pane| pane.control_mut(&control_name))
            .is_some_and(|control| control.on_key(event));
        if changed {
            let _ = self.mark_dirty(&pane_name);
        }
    }

    /// Move focus to the next/previous key-capable control in the
    /// active pane, wrapping around.
    ///
    /// Terminates after one full lap; a pane with no key-capable
    /// controls leaves focus unchanged. A successful move repaints the
    /// pane, covering both the old and new control.
    pub(super) fn cycle_focus(&mut self, direction: Cycle) {
        let Some((pane_name, control_name)) = self.active.clone() else {
            return;
        };
        let Some(pane) = self.pane(&pane_name) else {
            return;
        };
        let Some(current) = pane.index_of(&control_name) else {
            return;
        };

        let len = pane.len();
        let mut next = None;
        for step in 1..=len {
            let index = match direction {
                Cycle::Forward => (current + step) % len,
                Cycle::Backward => (current + len - step % len) % len,
            };
            if pane.control_at(index).is_some_and(|c| c.handles_keys()) {
                if index != current {
                    next = pane.name_at(index).map(str::to_owned);
                }
                break;
            }
        }

        if let Some(name) = next {
            self.active = Some((pane_name.clone(), name));
            let _ = self.mark_dirty(&pane_name);
        }
    }

    /// Hit-test a click against panes in reverse insertion order
    /// (topmost first) and deliver it inside the hit pane.
    ///
    /// With a modal pane set, that pane alone is eligible, whatever
    /// the hit-test would otherwise have found.
    pub(super) fn route_click(&mut self, click: &Click) {
        let screen = self.screen();
        let hit = |pane: &super::pane::Pane| {
            pane.is_visible() && pane.bounds().resolve(screen).contains(click.x, click.y)
        };

        let target = if let Some(modal) = self.modal.clone() {
            self.find(&modal)
                .filter(|&index| hit(&self.panes()[index].1))
        } else {
            self.panes()
                .iter()
                .enumerate()
                .rev()
                .find_map(|(index, (_, pane))| hit(pane).then_some(index))
        };

        let Some(index) = target else { return };
        let name = self.panes()[index].0.clone();
        let area = self.panes()[index].1.bounds().resolve(screen);
        if self.pane_at_mut(index).route_click(area, click) {
            let _ = self.mark_dirty(&name);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::display::{Dirty, Display, Pane};
    use crate::input::{Click, Cycle, Event, Key, Modifiers, MouseButton};
    use crate::layout::{Bounds, Rect};
    use crate::terminal::{Driver, OutputBuffer};
    use crate::widget::Control;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Records every event it is handed, with configurable
    /// capabilities.
    struct Probe {
        bounds: Bounds,
        keys: bool,
        clicks: bool,
        tag: &'static str,
        log: Log,
    }

    impl Probe {
        fn new(tag: &'static str, bounds: Bounds, log: &Log) -> Self {
            Self {
                bounds,
                keys: false,
                clicks: false,
                tag,
                log: Rc::clone(log),
            }
        }

        fn keyed(mut self) -> Self {
            self.keys = true;
            self
        }

        fn clickable(mut self) -> Self {
            self.clicks = true;
            self
        }
    }

    impl Control for Probe {
        fn bounds(&self) -> Bounds {
            self.bounds
        }
        fn set_bounds(&mut self, bounds: Bounds) {
            self.bounds = bounds;
        }
        fn render(&self, _area: Rect, _out: &mut OutputBuffer) {}
        fn handles_keys(&self) -> bool {
            self.keys
        }
        fn on_key(&mut self, event: &Event) -> bool {
            self.log.borrow_mut().push(format!("{}:{event:?}", self.tag));
            true
        }
        fn handles_clicks(&self) -> bool {
            self.clicks
        }
        fn on_click(&mut self, click: &Click, _area: Rect) -> bool {
            self.log
                .borrow_mut()
                .push(format!("{}:click@{},{}", self.tag, click.x, click.y));
            true
        }
    }

    fn click_at(x: i32, y: i32) -> Event {
        Event::Click(Click {
            button: MouseButton::Left,
            modifiers: Modifiers::empty(),
            x,
            y,
        })
    }

    fn display() -> Display<io::Empty, Vec<u8>> {
        Display::new(Driver::detached(Vec::new(), 80, 24), io::empty())
    }

    fn cycling_fixture() -> (Display<io::Empty, Vec<u8>>, Log) {
        let log = Log::default();
        let mut pane = Pane::new(Bounds::new(0, 0, 40, 10));
        pane.add_control("a", Probe::new("a", Bounds::new(0, 0, 10, 1), &log));
        pane.add_control("b", Probe::new("b", Bounds::new(0, 1, 10, 2), &log).keyed());
        pane.add_control("c", Probe::new("c", Bounds::new(0, 2, 10, 3), &log).keyed());
        let mut d = display();
        d.add_pane("main", pane).unwrap();
        d.set_active("main", "a").unwrap();
        d.handle().unwrap();
        (d, log)
    }

    #[test]
    fn test_forward_cycle_skips_non_key_controls() {
        let (mut d, _log) = cycling_fixture();
        d.dispatch(&Event::Cycle(Cycle::Forward));
        assert_eq!(d.active(), Some(("main", "b")));
        d.dispatch(&Event::Cycle(Cycle::Forward));
        assert_eq!(d.active(), Some(("main", "c")));
        // wraps around, skipping "a"
        d.dispatch(&Event::Cycle(Cycle::Forward));
        assert_eq!(d.active(), Some(("main", "b")));
    }

    #[test]
    fn test_backward_cycle_walks_the_other_way() {
        let (mut d, _log) = cycling_fixture();
        d.dispatch(&Event::Cycle(Cycle::Backward));
        assert_eq!(d.active(), Some(("main", "c")));
        d.dispatch(&Event::Cycle(Cycle::Backward));
        assert_eq!(d.active(), Some(("main", "b")));
    }

    #[test]
    fn test_cycle_marks_the_pane_for_repaint() {
        let (mut d, _log) = cycling_fixture();
        d.dispatch(&Event::Cycle(Cycle::Forward));
        assert_eq!(*d.dirty(), Dirty::Panes(vec!["main".into()]));
    }

    #[test]
    fn test_cycle_terminates_when_nothing_is_key_capable() {
        let log = Log::default();
        let mut pane = Pane::new(Bounds::new(0, 0, 40, 10));
        pane.add_control("a", Probe::new("a", Bounds::new(0, 0, 10, 1), &log));
        pane.add_control("b", Probe::new("b", Bounds::new(0, 1, 10, 2), &log));
        let mut d = display();
        d.add_pane("main", pane).unwrap();
        d.set_active("main", "a").unwrap();
        d.handle().unwrap();

        d.dispatch(&Event::Cycle(Cycle::Forward));
        assert_eq!(d.active(), Some(("main", "a")));
        assert_eq!(*d.dirty(), Dirty::Clean);
    }

    #[test]
    fn test_keys_reach_the_active_control_only() {
        let (mut d, log) = cycling_fixture();
        d.dispatch(&Event::Cycle(Cycle::Forward)); // focus "b"
        d.dispatch(&Event::Char(b'x'));
        d.dispatch(&Event::Key(Key::Up));
        assert_eq!(
            *log.borrow(),
            vec!["b:Char(120)".to_string(), "b:Key(Up)".to_string()]
        );
    }

    #[test]
    fn test_keys_without_active_control_are_dropped() {
        let (mut d, log) = {
            let log = Log::default();
            let mut pane = Pane::new(Bounds::FULL);
            pane.add_control("a", Probe::new("a", Bounds::new(0, 0, 10, 1), &log).keyed());
            let mut d = display();
            d.add_pane("main", pane).unwrap();
            (d, log)
        };
        d.dispatch(&Event::Char(b'x'));
        assert!(log.borrow().is_empty());
        assert_eq!(d.active(), None);
    }

    #[test]
    fn test_click_hits_the_topmost_pane() {
        let log = Log::default();
        let mut lower = Pane::new(Bounds::new(0, 0, 40, 10));
        lower.add_control(
            "low",
            Probe::new("low", Bounds::FULL, &log).clickable(),
        );
        // overlaps the lower pane; added later, so on top
        let mut upper = Pane::new(Bounds::new(20, 0, 60, 10));
        upper.add_control(
            "high",
            Probe::new("high", Bounds::FULL, &log).clickable(),
        );
        let mut d = display();
        d.add_pane("lower", lower).unwrap();
        d.add_pane("upper", upper).unwrap();

        d.dispatch(&click_at(30, 5));
        assert_eq!(*log.borrow(), vec!["high:click@30,5".to_string()]);
        // outside the overlap the lower pane is hit
        d.dispatch(&click_at(5, 5));
        assert_eq!(log.borrow().last().unwrap(), "low:click@5,5");
    }

    #[test]
    fn test_click_on_hidden_pane_falls_through() {
        let log = Log::default();
        let mut lower = Pane::new(Bounds::new(0, 0, 40, 10));
        lower.add_control("low", Probe::new("low", Bounds::FULL, &log).clickable());
        let mut upper = Pane::new(Bounds::new(0, 0, 40, 10)).hidden();
        upper.add_control("high", Probe::new("high", Bounds::FULL, &log).clickable());
        let mut d = display();
        d.add_pane("lower", lower).unwrap();
        d.add_pane("upper", upper).unwrap();

        d.dispatch(&click_at(5, 5));
        assert_eq!(*log.borrow(), vec!["low:click@5,5".to_string()]);
    }

    #[test]
    fn test_modal_captures_all_mouse_routing() {
        let log = Log::default();
        let mut base = Pane::new(Bounds::new(0, 0, 80, 24));
        base.add_control("base", Probe::new("base", Bounds::FULL, &log).clickable());
        let mut overlay = Pane::new(Bounds::new(20, 5, 60, 15));
        overlay.add_control("ok", Probe::new("ok", Bounds::FULL, &log).clickable());
        let mut d = display();
        d.add_pane("base", base).unwrap();
        d.add_pane("overlay", overlay).unwrap();
        d.set_modal("overlay").unwrap();

        // inside the base pane but outside the modal: no dispatch
        d.dispatch(&click_at(5, 2));
        assert!(log.borrow().is_empty());

        // inside the modal: dispatches normally
        d.dispatch(&click_at(30, 10));
        assert_eq!(*log.borrow(), vec!["ok:click@30,10".to_string()]);
    }

    #[test]
    fn test_consumed_click_marks_the_pane_dirty() {
        let log = Log::default();
        let mut pane = Pane::new(Bounds::new(0, 0, 40, 10));
        pane.add_control("btn", Probe::new("btn", Bounds::FULL, &log).clickable());
        let mut d = display();
        d.add_pane("main", pane).unwrap();
        d.handle().unwrap();

        d.dispatch(&click_at(3, 3));
        assert_eq!(*d.dirty(), Dirty::Panes(vec!["main".into()]));
    }

    #[test]
    fn test_handle_decodes_and_routes_reader_bytes() {
        let log = Log::default();
        let mut pane = Pane::new(Bounds::new(0, 0, 40, 10));
        pane.add_control("a", Probe::new("a", Bounds::new(0, 0, 10, 1), &log).keyed());
        pane.add_control("b", Probe::new("b", Bounds::new(0, 1, 10, 2), &log).keyed());
        // one tick's worth of input: TAB, then a plain byte
        let reader = io::Cursor::new(b"\tx".to_vec());
        let mut d = Display::new(Driver::detached(Vec::new(), 80, 24), reader);
        d.add_pane("main", pane).unwrap();
        d.set_active("main", "a").unwrap();
        d.handle().unwrap();

        assert_eq!(d.active(), Some(("main", "b")));
        assert_eq!(*log.borrow(), vec!["b:Char(120)".to_string()]);
    }

    #[test]
    fn test_click_outside_every_pane_is_dropped() {
        let log = Log::default();
        let mut pane = Pane::new(Bounds::new(0, 0, 10, 5));
        pane.add_control("a", Probe::new("a", Bounds::FULL, &log).clickable());
        let mut d = display();
        d.add_pane("main", pane).unwrap();

        d.dispatch(&click_at(50, 20));
        assert!(log.borrow().is_empty());
    }
}
