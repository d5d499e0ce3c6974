//! Observable holder of the [`UiState`].
//!
//! Components subscribe through `tokio::sync::watch` receivers and are woken
//! only when a transition actually changed the state. Derived views are
//! computed from the snapshot they receive, so they always agree with it.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::ui::header::HeaderClasses;
use crate::ui::scroll::ScrollMetrics;
use crate::ui::state::{Menu, UiState};

/// Minimum spacing between two scroll updates applied to the state.
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(50);

/// Receiver handed to components interested in the shell state.
pub type UiWatcher = watch::Receiver<UiState>;

/// Aborts the scroll listener when dropped.
struct ListenerGuard(JoinHandle<()>);

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

pub struct UiStore {
    state: Arc<watch::Sender<UiState>>,
    listener: Option<ListenerGuard>,
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UiStore {
    /// Store without a scroll source.
    pub fn new() -> Self {
        let (state, _) = watch::channel(UiState::default());
        Self {
            state: Arc::new(state),
            listener: None,
        }
    }

    /// Store that follows `source`, applying at most one scroll update per
    /// [`SCROLL_THROTTLE`] window. The first update of a burst is applied at
    /// once and the latest one when the window closes.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_scroll_source(source: watch::Receiver<ScrollMetrics>) -> Self {
        let mut store = Self::new();
        let task = tokio::spawn(listen(Arc::clone(&store.state), source));
        store.listener = Some(ListenerGuard(task));
        store
    }

    pub fn subscribe(&self) -> UiWatcher {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> UiState {
        self.state.borrow().clone()
    }

    pub fn toggle_mobile_menu(&self) {
        self.toggle(Menu::Mobile);
    }

    pub fn toggle_search(&self) {
        self.toggle(Menu::Search);
    }

    pub fn toggle_profile_menu(&self) {
        self.toggle(Menu::Profile);
    }

    pub fn toggle_notifications(&self) {
        self.toggle(Menu::Notifications);
    }

    pub fn toggle(&self, menu: Menu) {
        self.state.send_if_modified(|state| state.toggle(menu));
    }

    pub fn set_active_nav_item(&self, item: Option<&str>) {
        let item = item.map(str::to_string);
        self.state
            .send_if_modified(|state| state.set_active_nav_item(item));
    }

    pub fn close_all_menus(&self) {
        self.state.send_if_modified(UiState::close_all_menus);
    }

    pub fn reset_scroll_state(&self) {
        self.state.send_if_modified(UiState::reset_scroll_state);
    }

    pub fn is_any_menu_open(&self) -> bool {
        self.state.borrow().is_any_menu_open()
    }

    pub fn header_classes(&self) -> HeaderClasses {
        self.state.borrow().header_classes()
    }

    pub fn is_listening(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|guard| !guard.0.is_finished())
    }

    /// Detaches the scroll listener. Dropping the store has the same effect.
    pub fn dispose(&mut self) {
        if self.listener.take().is_some() {
            debug!("Scroll listener detached");
        }
    }
}

async fn listen(state: Arc<watch::Sender<UiState>>, mut source: watch::Receiver<ScrollMetrics>) {
    // The position held at construction counts as the first update.
    loop {
        let metrics = *source.borrow_and_update();
        state.send_if_modified(|state| state.apply_scroll(&metrics));
        // Values sent meanwhile are picked up by the next `changed()`.
        tokio::time::sleep(SCROLL_THROTTLE).await;
        if source.changed().await.is_err() {
            break;
        }
    }
    debug!("Scroll source closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics::new(scroll_top, 1_100.0, 100.0)
    }

    #[tokio::test]
    async fn subscribers_see_consistent_derived_views() {
        let store = UiStore::new();
        let mut watcher = store.subscribe();

        store.toggle_search();
        assert!(watcher.has_changed().expect("store alive"));
        let state = watcher.borrow_and_update().clone();
        assert!(state.search_open());
        assert!(state.is_any_menu_open());
        assert!(state.header_classes().elevated);

        store.toggle_notifications();
        assert!(store.snapshot().notifications_open());
        assert!(!store.snapshot().search_open());

        store.close_all_menus();
        assert!(!store.is_any_menu_open());
        assert!(store.header_classes().transparent);
    }

    #[tokio::test]
    async fn unchanged_state_does_not_notify() {
        let store = UiStore::new();
        let watcher = store.subscribe();

        store.close_all_menus();
        store.reset_scroll_state();
        store.set_active_nav_item(None);
        assert!(!watcher.has_changed().expect("store alive"));

        store.set_active_nav_item(Some("projects"));
        assert!(watcher.has_changed().expect("store alive"));
        assert_eq!(store.snapshot().active_nav_item(), Some("projects"));
    }

    #[tokio::test(start_paused = true)]
    async fn scroll_updates_are_throttled() {
        let (source, rx) = watch::channel(ScrollMetrics::default());
        let store = UiStore::with_scroll_source(rx);
        let mut watcher = store.subscribe();

        source.send(at(100.0)).expect("listener alive");
        watcher.changed().await.expect("store alive");
        assert_eq!(watcher.borrow_and_update().scroll_progress(), 10.0);

        source.send(at(200.0)).expect("listener alive");
        source.send(at(300.0)).expect("listener alive");
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(store.snapshot().scroll_progress(), 10.0);

        watcher.changed().await.expect("store alive");
        let state = watcher.borrow_and_update().clone();
        assert_eq!(state.scroll_progress(), 30.0);
        assert!(state.is_scrolled());
    }

    #[tokio::test(start_paused = true)]
    async fn position_held_at_construction_is_applied() {
        let (_source, rx) = watch::channel(at(500.0));
        let store = UiStore::with_scroll_source(rx);
        let mut watcher = store.subscribe();

        watcher.changed().await.expect("store alive");
        let state = watcher.borrow_and_update().clone();
        assert_eq!(state.scroll_progress(), 50.0);
        assert!(state.is_scrolled());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_store_detaches_the_listener() {
        let (source, rx) = watch::channel(ScrollMetrics::default());
        let store = UiStore::with_scroll_source(rx);
        assert!(store.is_listening());

        drop(store);

        tokio::time::timeout(Duration::from_secs(1), source.closed())
            .await
            .expect("listener released its receiver");
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_detaches_the_listener() {
        let (source, rx) = watch::channel(ScrollMetrics::default());
        let mut store = UiStore::with_scroll_source(rx);

        store.dispose();
        assert!(!store.is_listening());
        tokio::time::timeout(Duration::from_secs(1), source.closed())
            .await
            .expect("listener released its receiver");

        store.toggle_mobile_menu();
        assert!(store.snapshot().mobile_menu_open());
    }
}
