//! Mounted widget instances and their store.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::chat::{ChatPersona, ChatWidget};

/// Idle time after which a widget is considered unmounted (30 minutes).
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Shared handle to one mounted chat widget.
///
/// Cloning the handle shares the widget. A handle keeps working after its
/// widget is unmounted, so a request that was in flight at that point still
/// resolves into the (now unreachable) widget.
#[derive(Debug, Clone)]
pub struct WidgetHandle {
    inner: Arc<WidgetInner>,
}

#[derive(Debug)]
struct WidgetInner {
    id: String,
    widget: RwLock<ChatWidget>,
    last_activity: RwLock<DateTime<Utc>>,
}

impl WidgetHandle {
    fn new(id: String, widget: ChatWidget) -> Self {
        let now = Utc::now();
        Self {
            inner: Arc::new(WidgetInner {
                id,
                widget: RwLock::new(widget),
                last_activity: RwLock::new(now),
            }),
        }
    }

    /// Widget id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Run `f` with shared access to the widget.
    pub fn read<R>(&self, f: impl FnOnce(&ChatWidget) -> R) -> R {
        let guard = self
            .inner
            .widget
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive access to the widget and record activity.
    ///
    /// The lock is released when `f` returns; never await inside it.
    pub fn update<R>(&self, f: impl FnOnce(&mut ChatWidget) -> R) -> R {
        let result = {
            let mut guard = self
                .inner
                .widget
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            f(&mut guard)
        };
        self.touch();
        result
    }

    /// Whether the widget has been inactive longer than `timeout`.
    #[must_use]
    pub fn is_idle(&self, timeout: Duration) -> bool {
        let last = *self
            .inner
            .last_activity
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        // negative elapsed time (clock skew) counts as active
        (Utc::now() - last)
            .to_std()
            .is_ok_and(|elapsed| elapsed > timeout)
    }

    fn touch(&self) {
        let mut guard = self
            .inner
            .last_activity
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Utc::now();
    }
}

/// Thread-safe store of mounted widgets, keyed by widget id.
#[derive(Debug, Clone)]
pub struct WidgetStore {
    inner: Arc<WidgetStoreInner>,
}

#[derive(Debug)]
struct WidgetStoreInner {
    widgets: RwLock<HashMap<String, WidgetHandle>>,
    persona: ChatPersona,
}

impl WidgetStore {
    /// Create an empty store whose widgets use `persona`.
    #[must_use]
    pub fn new(persona: ChatPersona) -> Self {
        Self {
            inner: Arc::new(WidgetStoreInner {
                widgets: RwLock::new(HashMap::new()),
                persona,
            }),
        }
    }

    /// Mount a fresh widget with an empty transcript.
    #[must_use]
    pub fn mount(&self) -> WidgetHandle {
        let id = Uuid::new_v4().to_string();
        let handle = WidgetHandle::new(id.clone(), ChatWidget::new(self.inner.persona.clone()));
        self.widgets_mut().insert(id, handle.clone());

        tracing::debug!(name: "widget.mounted", widget_id = %handle.id(), "Chat widget mounted");
        handle
    }

    /// Look up a widget, mounting a fresh one under `id` if it is gone.
    ///
    /// Lets a page whose widget was unmounted behind its back (idle sweep,
    /// restored from the back/forward cache) keep talking to the same id.
    /// Only ids shaped like the ones [`mount`](Self::mount) hands out are
    /// re-mounted; anything else yields `None`.
    pub fn get_or_remount(&self, id: &str) -> Option<WidgetHandle> {
        if let Some(handle) = self.get(id) {
            return Some(handle);
        }
        let id = Uuid::parse_str(id).ok()?.to_string();

        let mut widgets = self.widgets_mut();
        let handle = widgets
            .entry(id.clone())
            .or_insert_with(|| {
                WidgetHandle::new(id, ChatWidget::new(self.inner.persona.clone()))
            })
            .clone();

        tracing::info!(name: "widget.remounted", widget_id = %handle.id(), "Chat widget re-mounted");
        Some(handle)
    }

    /// Look up a mounted widget.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<WidgetHandle> {
        self.inner
            .widgets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Unmount a widget. Returns `false` if it was not mounted.
    pub fn unmount(&self, id: &str) -> bool {
        let removed = self.widgets_mut().remove(id).is_some();
        if removed {
            tracing::debug!(name: "widget.unmounted", widget_id = %id, "Chat widget unmounted");
        }
        removed
    }

    /// Number of mounted widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .widgets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no widget is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of all mounted widgets.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.inner
            .widgets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Unmount widgets idle longer than `timeout`.
    ///
    /// Returns the number of widgets removed.
    pub fn sweep_idle(&self, timeout: Duration) -> usize {
        let mut guard = self.widgets_mut();
        let before = guard.len();
        guard.retain(|_, handle| !handle.is_idle(timeout));
        before - guard.len()
    }

    fn widgets_mut(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, WidgetHandle>> {
        self.inner
            .widgets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ChatReply, Message};

    fn store() -> WidgetStore {
        WidgetStore::new(ChatPersona::new("sys", "fallback"))
    }

    #[test]
    fn test_widget_lifecycle() {
        let store = store();
        assert!(store.is_empty());

        let handle = store.mount();
        assert_eq!(store.len(), 1);
        assert_eq!(store.ids(), vec![handle.id().to_string()]);

        let retrieved = store.get(handle.id()).unwrap();
        assert_eq!(retrieved.id(), handle.id());

        assert!(store.unmount(handle.id()));
        assert!(!store.unmount(handle.id()));
        assert!(store.get(handle.id()).is_none());
    }

    #[test]
    fn test_remount_starts_empty() {
        let store = store();
        let first = store.mount();
        first.update(|w| {
            w.set_input("hello");
            w.begin_submit()
        });
        store.unmount(first.id());

        let second = store.mount();
        assert_ne!(first.id(), second.id());
        assert!(second.read(|w| w.messages().is_empty()));
    }

    #[test]
    fn test_handle_outlives_unmount() {
        let store = store();
        let handle = store.mount();
        handle.update(|w| {
            w.set_input("hi");
            w.begin_submit()
        });
        store.unmount(handle.id());

        handle.update(|w| {
            w.complete(Ok(ChatReply {
                message: "late".into(),
            }))
            .clone()
        });
        assert_eq!(
            handle.read(|w| w.messages().last().cloned()),
            Some(Message::assistant("late"))
        );
    }

    #[test]
    fn test_get_or_remount_revives_unmounted_id() {
        let store = WidgetStore::new(ChatPersona::new("sys", "fallback").with_welcome("hi"));
        let handle = store.mount();
        let id = handle.id().to_string();
        handle.update(|w| w.set_input("draft"));
        store.unmount(&id);

        let revived = store.get_or_remount(&id).unwrap();

        assert_eq!(revived.id(), id);
        assert_eq!(store.len(), 1);
        assert_eq!(revived.read(|w| w.messages().to_vec()), vec![Message::assistant("hi")]);
        assert_eq!(revived.read(|w| w.history().input().to_string()), "");
    }

    #[test]
    fn test_get_or_remount_keeps_live_widget() {
        let store = store();
        let handle = store.mount();
        handle.update(|w| w.set_input("draft"));

        let same = store.get_or_remount(handle.id()).unwrap();
        assert_eq!(same.read(|w| w.history().input().to_string()), "draft");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_or_remount_rejects_foreign_ids() {
        let store = store();
        assert!(store.get_or_remount("nope").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_sweep_idle() {
        let store = store();
        store.mount();
        store.mount();

        assert_eq!(store.sweep_idle(Duration::from_secs(60)), 0);
        assert_eq!(store.len(), 2);

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(store.sweep_idle(Duration::ZERO), 2);
        assert!(store.is_empty());
    }
}
