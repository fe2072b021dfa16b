//! Tracks which section of the page is currently in view.
//!
//! [`ActiveSectionTracker`] holds the state and is independent of the browser;
//! [`DomObserver`] connects it to an `IntersectionObserver`, and
//! [`use_active_section`] wires both into a component's lifecycle.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// A single report from the host: one element crossed the visibility threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct Visibility {
    pub id: String,
    pub is_intersecting: bool,
}

impl Visibility {
    pub fn new(id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
        }
    }
}

/// Host side of the tracker: something that can watch rendered elements by id.
pub trait VisibilityObserver {
    /// Starts watching the element with `id`. Returns false when no such element exists.
    fn observe(&mut self, id: &str) -> bool;

    /// Stops watching every element.
    fn disconnect(&mut self);
}

type Listener = Box<dyn Fn(Option<&str>)>;

pub struct ActiveSectionTracker<O: VisibilityObserver> {
    observer: O,
    // Observed ids in document order.
    watched: Vec<String>,
    active: Option<String>,
    listeners: Vec<Listener>,
    attached: bool,
}

impl<O: VisibilityObserver> ActiveSectionTracker<O> {
    pub fn new(observer: O) -> Self {
        Self {
            observer,
            watched: Vec::new(),
            active: None,
            listeners: Vec::new(),
            attached: false,
        }
    }

    /// Registers a listener called with the new active id whenever it changes.
    pub fn subscribe(&mut self, listener: impl Fn(Option<&str>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Starts observing the given section ids, in display order.
    ///
    /// Ids without a rendered element are skipped with a warning. Any previous
    /// registration is released first. Returns how many sections are observed.
    pub fn attach<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) -> usize {
        self.detach();
        self.attached = true;

        for id in ids {
            if self.is_watched(id) {
                debug!("section `{}` is listed twice, observing it once", id);
                continue;
            }
            if self.observer.observe(id) {
                self.watched.push(id.to_owned());
            } else {
                warn!("no element for section `{}`, it will not be tracked", id);
            }
        }

        self.watched.len()
    }

    /// Handles one visibility report.
    pub fn on_visibility_change(&mut self, id: &str, is_intersecting: bool) {
        if !is_intersecting {
            return;
        }
        if !self.is_watched(id) {
            debug!("ignoring visibility report for unobserved element `{}`", id);
            return;
        }
        self.set_active(id);
    }

    /// Handles a batch of reports delivered together by the host.
    ///
    /// When several sections start intersecting in the same batch the one
    /// highest on the page wins, whatever order the host listed them in.
    pub fn apply_batch(&mut self, batch: &[Visibility]) {
        let topmost = batch
            .iter()
            .filter(|entry| entry.is_intersecting)
            .filter_map(|entry| self.position(&entry.id))
            .min();

        if let Some(index) = topmost {
            let id = self.watched[index].clone();
            self.on_visibility_change(&id, true);
        }
    }

    /// Releases every observation and clears the active id. Safe to call repeatedly.
    ///
    /// Listeners are not notified: the consuming view is going away.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.observer.disconnect();
        self.watched.clear();
        self.active = None;
        self.attached = false;
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn observed(&self) -> &[String] {
        &self.watched
    }

    fn is_watched(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.watched.iter().position(|watched| watched == id)
    }

    fn set_active(&mut self, id: &str) {
        if self.active.as_deref() == Some(id) {
            return;
        }
        self.active = Some(id.to_owned());
        for listener in &self.listeners {
            listener(self.active.as_deref());
        }
    }
}

impl<O: VisibilityObserver> Drop for ActiveSectionTracker<O> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// `IntersectionObserver` backed implementation of [`VisibilityObserver`].
pub struct DomObserver {
    document: Document,
    inner: IntersectionObserver,
    _on_entries: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl DomObserver {
    pub fn new(threshold: f64, on_batch: Callback<Vec<Visibility>>) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("document is not available"))?;

        let on_entries = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| Visibility::new(entry.target().id(), entry.is_intersecting()))
                    .collect();
                on_batch.emit(batch);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let inner =
            IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            document,
            inner,
            _on_entries: on_entries,
        })
    }
}

impl VisibilityObserver for DomObserver {
    fn observe(&mut self, id: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                self.inner.observe(&element);
                true
            }
            None => false,
        }
    }

    fn disconnect(&mut self) {
        self.inner.disconnect();
    }
}

/// Observes the sections with the given ids and returns the one currently in view.
///
/// The observer is created after the first render and released on unmount.
#[hook]
pub fn use_active_section(ids: Rc<Vec<String>>, threshold: f64) -> Option<String> {
    let active = use_state(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |(ids, threshold)| {
                let slot: Rc<RefCell<Option<ActiveSectionTracker<DomObserver>>>> = Rc::default();

                let on_batch = {
                    let slot = Rc::downgrade(&slot);
                    Callback::from(move |batch: Vec<Visibility>| {
                        if let Some(slot) = slot.upgrade() {
                            if let Some(tracker) = slot.borrow_mut().as_mut() {
                                tracker.apply_batch(&batch);
                                debug!("active section: {:?}", tracker.active());
                            }
                        }
                    })
                };

                match DomObserver::new(*threshold, on_batch) {
                    Ok(observer) => {
                        let mut tracker = ActiveSectionTracker::new(observer);
                        tracker.subscribe(move |id| active.set(id.map(str::to_owned)));
                        let observed = tracker.attach(ids.iter().map(String::as_str));
                        debug!(
                            "observing {} of {} sections: {:?}",
                            observed,
                            ids.len(),
                            tracker.observed()
                        );
                        *slot.borrow_mut() = Some(tracker);
                    }
                    Err(err) => warn!("section tracking unavailable: {:?}", err),
                }

                move || {
                    if let Some(mut tracker) = slot.borrow_mut().take() {
                        tracker.detach();
                    }
                }
            },
            (ids, threshold),
        );
    }

    (*active).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct Host {
        rendered: HashSet<String>,
        observing: Vec<String>,
        disconnects: usize,
    }

    #[derive(Clone, Default)]
    struct FakeObserver(Rc<RefCell<Host>>);

    impl FakeObserver {
        fn with_elements(ids: &[&str]) -> Self {
            let observer = Self::default();
            observer
                .0
                .borrow_mut()
                .rendered
                .extend(ids.iter().map(|id| id.to_string()));
            observer
        }

        fn observing(&self) -> usize {
            self.0.borrow().observing.len()
        }

        fn disconnects(&self) -> usize {
            self.0.borrow().disconnects
        }
    }

    impl VisibilityObserver for FakeObserver {
        fn observe(&mut self, id: &str) -> bool {
            let mut host = self.0.borrow_mut();
            if !host.rendered.contains(id) {
                return false;
            }
            host.observing.push(id.to_string());
            true
        }

        fn disconnect(&mut self) {
            let mut host = self.0.borrow_mut();
            host.observing.clear();
            host.disconnects += 1;
        }
    }

    fn attached(ids: &[&str]) -> (ActiveSectionTracker<FakeObserver>, FakeObserver) {
        let host = FakeObserver::with_elements(ids);
        let mut tracker = ActiveSectionTracker::new(host.clone());
        tracker.attach(ids.iter().copied());
        (tracker, host)
    }

    #[test]
    fn nothing_is_active_before_any_report() {
        let (tracker, _) = attached(&["a", "b", "c"]);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn latest_intersecting_section_becomes_active() {
        let (mut tracker, _) = attached(&["a", "b", "c"]);

        tracker.on_visibility_change("b", true);
        assert_eq!(tracker.active(), Some("b"));

        tracker.on_visibility_change("a", true);
        assert_eq!(tracker.active(), Some("a"));
    }

    #[test]
    fn leaving_the_viewport_keeps_the_last_active_section() {
        let (mut tracker, _) = attached(&["a", "b"]);
        tracker.on_visibility_change("b", true);
        tracker.on_visibility_change("b", false);
        assert_eq!(tracker.active(), Some("b"));
    }

    #[test]
    fn reports_for_unobserved_elements_are_ignored() {
        let (mut tracker, _) = attached(&["a"]);
        tracker.on_visibility_change("a", true);
        tracker.on_visibility_change("footer", true);
        assert_eq!(tracker.active(), Some("a"));
    }

    #[test]
    fn missing_elements_are_skipped() {
        let host = FakeObserver::with_elements(&["a", "c"]);
        let mut tracker = ActiveSectionTracker::new(host.clone());

        let observed = tracker.attach(["a", "b", "c", "d"]);

        assert_eq!(observed, 2);
        assert_eq!(host.observing(), 2);
        assert_eq!(tracker.observed(), ["a".to_string(), "c".to_string()]);

        tracker.on_visibility_change("b", true);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn duplicate_ids_are_observed_once() {
        let host = FakeObserver::with_elements(&["a", "b"]);
        let mut tracker = ActiveSectionTracker::new(host.clone());
        assert_eq!(tracker.attach(["a", "b", "a"]), 2);
        assert_eq!(host.observing(), 2);
    }

    #[test]
    fn batch_prefers_topmost_intersecting_section() {
        let (mut tracker, _) = attached(&["a", "b", "c"]);

        tracker.apply_batch(&[
            Visibility::new("c", true),
            Visibility::new("b", true),
            Visibility::new("a", false),
        ]);
        assert_eq!(tracker.active(), Some("b"));

        tracker.apply_batch(&[Visibility::new("b", true), Visibility::new("c", true)]);
        assert_eq!(tracker.active(), Some("b"));
    }

    #[test]
    fn batch_without_intersections_changes_nothing() {
        let (mut tracker, _) = attached(&["a", "b"]);
        tracker.apply_batch(&[Visibility::new("a", true)]);
        tracker.apply_batch(&[Visibility::new("a", false), Visibility::new("b", false)]);
        tracker.apply_batch(&[]);
        assert_eq!(tracker.active(), Some("a"));
    }

    #[test]
    fn single_entry_batches_follow_the_last_report() {
        let (mut tracker, _) = attached(&["a", "b", "c"]);
        for id in ["c", "a", "b", "b", "c"] {
            tracker.apply_batch(&[Visibility::new(id, true)]);
        }
        assert_eq!(tracker.active(), Some("c"));
    }

    #[test]
    fn listeners_hear_only_changes() {
        let (mut tracker, _) = attached(&["a", "b"]);
        let heard = Rc::new(RefCell::new(Vec::new()));
        {
            let heard = heard.clone();
            tracker.subscribe(move |id| heard.borrow_mut().push(id.map(str::to_owned)));
        }

        tracker.on_visibility_change("a", true);
        tracker.on_visibility_change("a", true);
        tracker.on_visibility_change("b", true);

        assert_eq!(
            *heard.borrow(),
            vec![Some("a".to_string()), Some("b".to_string())]
        );
    }

    #[test]
    fn detach_releases_everything_once() {
        let (mut tracker, host) = attached(&["a", "b"]);
        tracker.on_visibility_change("a", true);

        tracker.detach();
        assert_eq!(host.observing(), 0);
        assert_eq!(host.disconnects(), 1);
        assert_eq!(tracker.active(), None);
        assert!(tracker.observed().is_empty());

        tracker.detach();
        assert_eq!(host.disconnects(), 1);

        drop(tracker);
        assert_eq!(host.disconnects(), 1);
    }

    #[test]
    fn reports_after_detach_are_ignored() {
        let (mut tracker, _) = attached(&["a"]);
        tracker.detach();
        tracker.on_visibility_change("a", true);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn dropping_an_attached_tracker_disconnects() {
        let (tracker, host) = attached(&["a"]);
        drop(tracker);
        assert_eq!(host.disconnects(), 1);
        assert_eq!(host.observing(), 0);
    }

    #[test]
    fn reattaching_replaces_previous_registration() {
        let host = FakeObserver::with_elements(&["a", "b", "c"]);
        let mut tracker = ActiveSectionTracker::new(host.clone());
        tracker.attach(["a", "b"]);
        tracker.on_visibility_change("a", true);

        assert_eq!(tracker.attach(["c"]), 1);
        assert_eq!(host.disconnects(), 1);
        assert_eq!(host.observing(), 1);
        assert_eq!(tracker.active(), None);
    }
}
