//! Viewport width tracking and responsive breakpoint classification.
//!
//! A [`Viewport`] models the display surface: it knows its width (or that it
//! has none) and fans resize events out to registered listeners. Listener
//! registration is scoped: [`Viewport::add_listener`] returns a
//! [`ResizeListener`] guard that deregisters on drop, so repeatedly attaching
//! and detaching consumers never accumulates dangling listeners.
//!
//! [`BreakpointObserver`] is the standard consumer. It owns one listener and
//! recomputes its [`ViewportClass`] on every resize, without debouncing.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::Serialize;

/// Widths at or below this are mobile.
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Widths at or below this are tablet.
pub const TABLET_MAX_WIDTH: u32 = 1024;

/// Breakpoint thresholds in logical pixels (inclusive upper bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    /// Mobile upper bound
    pub mobile: u32,
    /// Tablet upper bound
    pub tablet: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: MOBILE_MAX_WIDTH,
            tablet: TABLET_MAX_WIDTH,
        }
    }
}

/// Responsive classification of the current width.
///
/// The two flags are independent thresholds; a mobile width is also a tablet
/// width. Layouts treat `is_mobile` as authoritative for single-column flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewportClass {
    /// Width <= mobile breakpoint
    pub is_mobile: bool,
    /// Width <= tablet breakpoint
    pub is_tablet: bool,
}

impl ViewportClass {
    /// Classifies a width against the default breakpoints.
    ///
    /// `None` (no display surface) classifies as neither mobile nor tablet.
    #[must_use]
    pub fn from_width(width: Option<u32>) -> Self {
        Self::classify(width, Breakpoints::default())
    }

    /// Classifies a width against explicit breakpoints.
    #[must_use]
    pub fn classify(width: Option<u32>, breakpoints: Breakpoints) -> Self {
        match width {
            Some(width) => Self {
                is_mobile: width <= breakpoints.mobile,
                is_tablet: width <= breakpoints.tablet,
            },
            None => Self::default(),
        }
    }

    /// True when content should flow in one column.
    #[must_use]
    pub const fn is_single_column(self) -> bool {
        self.is_mobile
    }

    /// Picks a value by layout tier: mobile first, then tablet, then desktop.
    #[must_use]
    pub fn pick<T>(self, mobile: T, tablet: T, desktop: T) -> T {
        if self.is_mobile {
            mobile
        } else if self.is_tablet {
            tablet
        } else {
            desktop
        }
    }
}

type Listener = Rc<RefCell<dyn FnMut(Option<u32>)>>;

#[derive(Default)]
struct ViewportInner {
    width: Option<u32>,
    listeners: BTreeMap<u64, Listener>,
    next_id: u64,
    dispatching: bool,
    pending: Option<u32>,
}

/// Clears the dispatching flag when a round ends, even by unwinding.
struct DispatchRound<'a>(&'a RefCell<ViewportInner>);

impl Drop for DispatchRound<'_> {
    fn drop(&mut self) {
        let mut inner = self.0.borrow_mut();
        inner.dispatching = false;
        inner.pending = None;
    }
}

/// A display surface that may be resized.
///
/// Cloning yields another handle to the same surface.
#[derive(Clone, Default)]
pub struct Viewport {
    inner: Rc<RefCell<ViewportInner>>,
}

impl Viewport {
    /// Creates a surface with a known width.
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewportInner {
                width: Some(width),
                ..ViewportInner::default()
            })),
        }
    }

    /// Creates a surface without a width (server-side or headless rendering).
    #[must_use]
    pub fn headless() -> Self {
        Self::default()
    }

    /// Current width, if the surface has one.
    #[must_use]
    pub fn width(&self) -> Option<u32> {
        self.inner.borrow().width
    }

    /// Sets a new width and notifies every listener synchronously.
    ///
    /// Every call dispatches, even when the width is unchanged. A resize
    /// requested from inside a listener is queued and dispatched once the
    /// current round finishes, so listeners always see widths in order.
    pub fn resize(&self, width: u32) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.width = Some(width);
            if inner.dispatching {
                inner.pending = Some(width);
                return;
            }
            inner.dispatching = true;
        }
        let _round = DispatchRound(&self.inner);

        let mut next = Some(width);
        while let Some(width) = next {
            self.dispatch(width);
            next = self.inner.borrow_mut().pending.take();
        }
    }

    fn dispatch(&self, width: u32) {
        let listeners: Vec<(u64, Listener)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        // The registry borrow is released so listeners may add or drop guards
        for (id, listener) in listeners {
            if !self.inner.borrow().listeners.contains_key(&id) {
                continue;
            }
            let mut callback = listener.borrow_mut();
            (*callback)(Some(width));
        }
    }

    /// Registers a resize listener for as long as the returned guard lives.
    pub fn add_listener<F>(&self, listener: F) -> ResizeListener
    where
        F: FnMut(Option<u32>) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner
            .listeners
            .insert(id, Rc::new(RefCell::new(listener)) as Listener);

        ResizeListener {
            viewport: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Viewport")
            .field("width", &inner.width)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Registration guard; dropping it removes the listener.
#[derive(Debug)]
#[must_use = "the listener is removed as soon as the guard is dropped"]
pub struct ResizeListener {
    viewport: Weak<RefCell<ViewportInner>>,
    id: u64,
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some(inner) = self.viewport.upgrade() {
            inner.borrow_mut().listeners.remove(&self.id);
        }
    }
}

/// Keeps a [`ViewportClass`] current for one consumer.
#[derive(Debug)]
pub struct BreakpointObserver {
    class: Rc<Cell<ViewportClass>>,
    _listener: ResizeListener,
}

impl BreakpointObserver {
    /// Starts observing with the default breakpoints.
    #[must_use]
    pub fn attach(viewport: &Viewport) -> Self {
        Self::attach_with(viewport, Breakpoints::default(), |_| {})
    }

    /// Starts observing with explicit breakpoints, calling `on_change` with
    /// every recomputed class.
    #[must_use]
    pub fn attach_with<F>(viewport: &Viewport, breakpoints: Breakpoints, mut on_change: F) -> Self
    where
        F: FnMut(ViewportClass) + 'static,
    {
        let class = Rc::new(Cell::new(ViewportClass::classify(
            viewport.width(),
            breakpoints,
        )));

        let shared = Rc::clone(&class);
        let listener = viewport.add_listener(move |width| {
            let next = ViewportClass::classify(width, breakpoints);
            shared.set(next);
            on_change(next);
        });

        Self {
            class,
            _listener: listener,
        }
    }

    /// Latest classification.
    #[must_use]
    pub fn current_class(&self) -> ViewportClass {
        self.class.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_widths() {
        assert_eq!(
            ViewportClass::from_width(Some(500)),
            ViewportClass { is_mobile: true, is_tablet: true }
        );
        assert_eq!(
            ViewportClass::from_width(Some(900)),
            ViewportClass { is_mobile: false, is_tablet: true }
        );
        assert_eq!(
            ViewportClass::from_width(Some(1200)),
            ViewportClass { is_mobile: false, is_tablet: false }
        );
    }

    #[test]
    fn test_classify_boundaries() {
        assert!(ViewportClass::from_width(Some(768)).is_mobile);
        assert!(!ViewportClass::from_width(Some(769)).is_mobile);
        assert!(ViewportClass::from_width(Some(1024)).is_tablet);
        assert!(!ViewportClass::from_width(Some(1025)).is_tablet);
    }

    #[test]
    fn test_headless_defaults_to_desktop() {
        let viewport = Viewport::headless();
        let observer = BreakpointObserver::attach(&viewport);
        assert_eq!(observer.current_class(), ViewportClass::default());
        assert!(!observer.current_class().is_single_column());
    }

    #[test]
    fn test_custom_breakpoints() {
        let breakpoints = Breakpoints { mobile: 400, tablet: 600 };
        let class = ViewportClass::classify(Some(500), breakpoints);
        assert!(!class.is_mobile);
        assert!(class.is_tablet);
    }

    #[test]
    fn test_pick_by_tier() {
        assert_eq!(ViewportClass::from_width(Some(500)).pick(1, 2, 4), 1);
        assert_eq!(ViewportClass::from_width(Some(900)).pick(1, 2, 4), 2);
        assert_eq!(ViewportClass::from_width(Some(1400)).pick(1, 2, 4), 4);
    }

    #[test]
    fn test_observer_tracks_resizes() {
        let viewport = Viewport::new(1200);
        let observer = BreakpointObserver::attach(&viewport);
        assert!(!observer.current_class().is_tablet);

        viewport.resize(900);
        assert!(observer.current_class().is_tablet);
        assert!(!observer.current_class().is_mobile);

        viewport.resize(500);
        assert!(observer.current_class().is_mobile);
    }

    #[test]
    fn test_every_resize_recomputes() {
        let viewport = Viewport::new(1200);
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let _observer = BreakpointObserver::attach_with(&viewport, Breakpoints::default(), move |_| {
            counter.set(counter.get() + 1);
        });

        viewport.resize(1200);
        viewport.resize(1201);
        viewport.resize(1202);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_drop_deregisters_listener() {
        let viewport = Viewport::new(1200);

        for _ in 0..5 {
            let observer = BreakpointObserver::attach(&viewport);
            assert_eq!(viewport.listener_count(), 1);
            drop(observer);
        }

        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_listener_dropped_during_dispatch() {
        let viewport = Viewport::new(1200);
        let slot: Rc<RefCell<Option<ResizeListener>>> = Rc::default();

        let own_slot = Rc::clone(&slot);
        let guard = viewport.add_listener(move |_| {
            own_slot.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(guard);

        viewport.resize(800);
        assert_eq!(viewport.listener_count(), 0);

        // A second dispatch finds nothing to call
        viewport.resize(700);
    }

    #[test]
    fn test_listener_dropping_a_later_listener() {
        let viewport = Viewport::new(1200);
        let victim_slot: Rc<RefCell<Option<ResizeListener>>> = Rc::default();
        let victim_calls = Rc::new(Cell::new(0));

        let slot = Rc::clone(&victim_slot);
        let _dropper = viewport.add_listener(move |_| {
            slot.borrow_mut().take();
        });
        let counter = Rc::clone(&victim_calls);
        let victim = viewport.add_listener(move |_| counter.set(counter.get() + 1));
        *victim_slot.borrow_mut() = Some(victim);

        viewport.resize(800);
        assert_eq!(viewport.listener_count(), 1);
        assert_eq!(victim_calls.get(), 0, "removed listener must not run");
    }

    #[test]
    fn test_resize_from_inside_listener_is_queued() {
        let viewport = Viewport::new(1200);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let handle = viewport.clone();
        let log = Rc::clone(&seen);
        let _shrinker = viewport.add_listener(move |width| {
            log.borrow_mut().push(width);
            if width == Some(800) {
                handle.resize(500);
            }
        });
        let observer = BreakpointObserver::attach(&viewport);

        viewport.resize(800);

        assert_eq!(*seen.borrow(), vec![Some(800), Some(500)]);
        assert_eq!(viewport.width(), Some(500));
        assert!(observer.current_class().is_mobile);

        // The queue is drained; later resizes dispatch normally
        viewport.resize(1100);
        assert_eq!(seen.borrow().last(), Some(&Some(1100)));
    }

    #[test]
    fn test_guard_outliving_viewport() {
        let viewport = Viewport::new(1200);
        let guard = viewport.add_listener(|_| {});
        drop(viewport);
        drop(guard);
    }
}
