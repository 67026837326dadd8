//! The notification center service.
//!
//! Holds the full notification log plus the derived, capped "active" popup
//! view, and exposes the state transitions of the engine. Every transition
//! re-ranks the log under the current focus context and recomputes the
//! active view before releasing the state lock, so external observers never
//! see a half-updated derived set.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::events::NotificationEvent;
use super::ranking::rank;
use super::types::{DismissReason, Notification, NotificationStats};
use crate::error::NotificationError;
use crate::shared_types::ApplicationId;
use skydeck_core::config::NotificationsConfig;

// --- NotificationService Trait ---

/// Interface of the notification center.
///
/// All transitions are atomic with respect to readers; the scoring and
/// ranking functions themselves are pure and freely callable outside this
/// service.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Admits a fully populated notification into the log.
    ///
    /// The record is validated against the field contract and rejected with
    /// `InvalidData`/`DuplicateId` before any state changes.
    async fn submit(&self, notification: Notification) -> Result<Uuid, NotificationError>;

    /// Marks the notification as read, removing it from the active view.
    async fn mark_as_read(&self, notification_id: Uuid) -> Result<(), NotificationError>;

    /// Dismisses the notification. Terminal and non-destructive: the record
    /// stays in the log with `is_visible = false`.
    async fn dismiss(
        &self,
        notification_id: Uuid,
        reason: DismissReason,
    ) -> Result<(), NotificationError>;

    /// Resets the log and the active view entirely.
    async fn clear_all(&self) -> Result<(), NotificationError>;

    /// Replaces the log with a prepared data set, ranked under the current
    /// focus context. Each record is validated and the batch is rejected
    /// whole on the first invalid or duplicated entry.
    async fn load_sample(&self, data: Vec<Notification>) -> Result<usize, NotificationError>;

    /// Sets (or clears) the passenger's focused app and re-scores the log.
    async fn set_focused_app(
        &self,
        focused_app: Option<ApplicationId>,
    ) -> Result<(), NotificationError>;

    /// Returns the full log in rank order, dismissed records included.
    async fn get_log(&self) -> Vec<Notification>;

    /// Returns the capped active view: unread, visible, rank order.
    async fn get_active(&self) -> Vec<Notification>;

    /// Returns the currently focused app, if any.
    async fn get_focused_app(&self) -> Option<ApplicationId>;

    /// Returns aggregate counts over the log.
    async fn get_stats(&self) -> NotificationStats;

    /// Subscribes to the engine's transition events.
    fn subscribe(&self) -> broadcast::Receiver<NotificationEvent>;
}

// --- DefaultNotificationService Implementation ---

struct EngineState {
    /// All notifications ever submitted, in rank order (not insertion order).
    log: Vec<Notification>,
    /// Derived view: unread, visible, capped. Never mutated directly.
    active: Vec<Notification>,
    focused_app: Option<ApplicationId>,
}

/// In-memory implementation of [`NotificationService`].
///
/// State lives behind a single `RwLock`, the serialization boundary for
/// concurrent hosts. Independent instances are fully isolated, so tests can
/// run their own stores side by side.
pub struct DefaultNotificationService {
    state: Arc<RwLock<EngineState>>,
    event_publisher: broadcast::Sender<NotificationEvent>,
    max_active: usize,
}

impl DefaultNotificationService {
    pub fn new(config: &NotificationsConfig) -> Self {
        let (event_publisher, _) = broadcast::channel(config.event_buffer.max(1));
        Self {
            state: Arc::new(RwLock::new(EngineState {
                log: Vec::new(),
                active: Vec::new(),
                focused_app: None,
            })),
            event_publisher,
            max_active: config.max_active,
        }
    }

    /// Re-ranks the log under the current focus context and rebuilds the
    /// active view. Must run before the state lock is released by every
    /// mutating transition.
    fn recompute(&self, state: &mut EngineState) {
        rank(&mut state.log, state.focused_app.as_ref());
        state.active = state
            .log
            .iter()
            .filter(|n| !n.is_read && n.is_visible)
            .take(self.max_active)
            .cloned()
            .collect();
    }

    fn publish_event(&self, event: NotificationEvent) {
        // No subscribers is not an error condition.
        let _ = self.event_publisher.send(event);
    }
}

impl Default for DefaultNotificationService {
    fn default() -> Self {
        Self::new(&NotificationsConfig::default())
    }
}

#[async_trait]
impl NotificationService for DefaultNotificationService {
    async fn submit(&self, notification: Notification) -> Result<Uuid, NotificationError> {
        if let Err(e) = notification.validate() {
            warn!("Rejected notification {}: {}", notification.id, e);
            return Err(e);
        }

        let mut state = self.state.write().await;
        if state.log.iter().any(|n| n.id == notification.id) {
            return Err(NotificationError::DuplicateId(notification.id));
        }

        let id = notification.id;
        state.log.insert(0, notification.clone());
        self.recompute(&mut state);
        drop(state);

        info!(
            "Notification {} posted ({} from {})",
            id, notification.category, notification.origin_app
        );
        self.publish_event(NotificationEvent::Posted { notification });
        Ok(id)
    }

    async fn mark_as_read(&self, notification_id: Uuid) -> Result<(), NotificationError> {
        let mut state = self.state.write().await;
        let notification = state
            .log
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or(NotificationError::NotFound(notification_id))?;
        notification.mark_as_read();
        self.recompute(&mut state);
        drop(state);

        debug!("Notification {} marked as read", notification_id);
        self.publish_event(NotificationEvent::Read { notification_id });
        Ok(())
    }

    async fn dismiss(
        &self,
        notification_id: Uuid,
        reason: DismissReason,
    ) -> Result<(), NotificationError> {
        let mut state = self.state.write().await;
        let notification = state
            .log
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or(NotificationError::NotFound(notification_id))?;
        // Dismissal is terminal; repeating it changes nothing.
        let newly_dismissed = notification.is_visible;
        notification.dismiss();
        self.recompute(&mut state);
        drop(state);

        if newly_dismissed {
            debug!("Notification {} dismissed ({:?})", notification_id, reason);
            self.publish_event(NotificationEvent::Dismissed {
                notification_id,
                reason,
            });
        }
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), NotificationError> {
        let mut state = self.state.write().await;
        state.log.clear();
        state.active.clear();
        drop(state);

        info!("Notification log cleared");
        self.publish_event(NotificationEvent::AllCleared);
        Ok(())
    }

    async fn load_sample(&self, data: Vec<Notification>) -> Result<usize, NotificationError> {
        let mut seen = std::collections::HashSet::new();
        for notification in &data {
            notification.validate()?;
            if !seen.insert(notification.id) {
                return Err(NotificationError::DuplicateId(notification.id));
            }
        }

        let count = data.len();
        let mut state = self.state.write().await;
        state.log = data;
        self.recompute(&mut state);
        drop(state);

        info!("Loaded {} sample notifications", count);
        self.publish_event(NotificationEvent::SampleLoaded { count });
        Ok(count)
    }

    async fn set_focused_app(
        &self,
        focused_app: Option<ApplicationId>,
    ) -> Result<(), NotificationError> {
        let mut state = self.state.write().await;
        state.focused_app = focused_app.clone();
        // Focus changes the within/cross classification, so every score is
        // stale.
        self.recompute(&mut state);
        drop(state);

        debug!("Focused app changed to {:?}", focused_app);
        self.publish_event(NotificationEvent::FocusChanged { focused_app });
        Ok(())
    }

    async fn get_log(&self) -> Vec<Notification> {
        self.state.read().await.log.clone()
    }

    async fn get_active(&self) -> Vec<Notification> {
        self.state.read().await.active.clone()
    }

    async fn get_focused_app(&self) -> Option<ApplicationId> {
        self.state.read().await.focused_app.clone()
    }

    async fn get_stats(&self) -> NotificationStats {
        let state = self.state.read().await;
        NotificationStats {
            total: state.log.len(),
            active: state.active.len(),
            unread: state
                .log
                .iter()
                .filter(|n| !n.is_read && n.is_visible)
                .count(),
            dismissed: state.log.iter().filter(|n| !n.is_visible).count(),
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.event_publisher.subscribe()
    }
}
