use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with hooks and actions)
// =============================================================================

/// Trait that any domain value must implement to be held by a [`ResourceActor`].
///
/// Entities are immutable values identified by a caller-chosen key. Patching
/// produces a replacement value; the store swaps it in.
pub trait Entity: Clone + Send + Sync + 'static {
    type Key: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type Patch: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Key under which the entity is stored
    fn key(&self) -> &Self::Key;

    // --- Lifecycle Hooks ---

    fn on_create(&self) -> Result<(), String> { Ok(()) }

    /// Build the replacement value for this entity with `patch` applied
    fn apply_patch(&self, patch: Self::Patch) -> Result<Self, String>;

    fn on_delete(&self) -> Result<(), String> { Ok(()) }

    // --- Action Handler ---

    /// Handle a domain-specific, read-only action
    fn handle_action(&self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// Failures reported by the generic actor layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Rejected by entity: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        item: T,
        respond_to: Response<T::Key>,
    },
    Get {
        key: T::Key,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        keys: Vec<T::Key>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        key: T::Key,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        key: T::Key,
        respond_to: Response<()>,
    },
    Action {
        key: T::Key,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Key, T>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { item, respond_to } => {
                    let _ = respond_to.send(self.handle_create(item));
                }
                ResourceRequest::Get { key, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&key).cloned()));
                }
                ResourceRequest::GetMany { keys, respond_to } => {
                    let items = keys
                        .iter()
                        .filter_map(|key| self.store.get(key).cloned())
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { key, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(key, patch));
                }
                ResourceRequest::Delete { key, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(key));
                }
                ResourceRequest::Action { key, action, respond_to } => {
                    let result = match self.store.get(&key) {
                        Some(item) => item.handle_action(action).map_err(FrameworkError::Rejected),
                        None => Err(FrameworkError::NotFound(key.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
        info!("ResourceActor stopped");
    }

    #[instrument(skip(self, item), fields(key = %item.key()))]
    fn handle_create(&mut self, item: T) -> Result<T::Key, FrameworkError> {
        let key = item.key().clone();
        if self.store.contains_key(&key) {
            warn!("Key already taken");
            return Err(FrameworkError::AlreadyExists(key.to_string()));
        }
        item.on_create().map_err(FrameworkError::Rejected)?;
        self.store.insert(key.clone(), item);
        debug!(stored = self.store.len(), "Item created");
        Ok(key)
    }

    #[instrument(skip(self, patch))]
    fn handle_update(&mut self, key: T::Key, patch: T::Patch) -> Result<T, FrameworkError> {
        let current = self
            .store
            .get(&key)
            .ok_or_else(|| FrameworkError::NotFound(key.to_string()))?;
        let updated = current.apply_patch(patch).map_err(FrameworkError::Rejected)?;
        self.store.insert(key, updated.clone());
        debug!("Item updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    fn handle_delete(&mut self, key: T::Key) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(&key)
            .ok_or_else(|| FrameworkError::NotFound(key.to_string()))?;
        item.on_delete().map_err(FrameworkError::Rejected)?;
        self.store.remove(&key);
        debug!("Item deleted");
        Ok(())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, item: T) -> Result<T::Key, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { item, respond_to }).await
    }

    pub async fn get(&self, key: T::Key) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { key, respond_to }).await
    }

    pub async fn get_many(&self, keys: Vec<T::Key>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::GetMany { keys, respond_to }).await
    }

    pub async fn update(&self, key: T::Key, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { key, patch, respond_to }).await
    }

    pub async fn delete(&self, key: T::Key) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { key, respond_to }).await
    }

    pub async fn perform_action(&self, key: T::Key, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { key, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        label: String,
        color: String,
        locked: bool,
    }

    #[derive(Debug)]
    struct TagPatch {
        color: Option<String>,
    }

    #[derive(Debug)]
    enum TagAction {
        IsLocked,
    }

    impl Entity for Tag {
        type Key = String;
        type Patch = TagPatch;
        type Action = TagAction;
        type ActionResult = bool;

        fn key(&self) -> &String { &self.label }

        fn apply_patch(&self, patch: TagPatch) -> Result<Self, String> {
            if self.locked {
                return Err(format!("{} is locked", self.label));
            }
            Ok(Self {
                color: patch.color.unwrap_or_else(|| self.color.clone()),
                ..self.clone()
            })
        }

        fn on_delete(&self) -> Result<(), String> {
            if self.locked {
                Err(format!("{} is locked", self.label))
            } else {
                Ok(())
            }
        }

        fn handle_action(&self, action: TagAction) -> Result<bool, String> {
            match action {
                TagAction::IsLocked => Ok(self.locked),
            }
        }
    }

    fn tag(label: &str, locked: bool) -> Tag {
        Tag { label: label.into(), color: "red".into(), locked }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_resource_actor_lifecycle() {
        let (actor, client) = ResourceActor::new(10);
        tokio::spawn(actor.run());

        let key = client.create(tag("rust", false)).await.unwrap();
        assert_eq!(key, "rust");

        let duplicate = client.create(tag("rust", true)).await;
        assert_eq!(duplicate, Err(FrameworkError::AlreadyExists("rust".into())));

        let updated = client
            .update("rust".into(), TagPatch { color: Some("blue".into()) })
            .await
            .unwrap();
        assert_eq!(updated.color, "blue");
        assert_eq!(client.get("rust".into()).await.unwrap(), Some(updated));

        client.delete("rust".into()).await.unwrap();
        assert_eq!(client.get("rust".into()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_resource_actor_rejections() {
        let (actor, client) = ResourceActor::new(10);
        tokio::spawn(actor.run());

        client.create(tag("frozen", true)).await.unwrap();

        let locked = client.perform_action("frozen".into(), TagAction::IsLocked).await;
        assert_eq!(locked, Ok(true));

        let update = client.update("frozen".into(), TagPatch { color: None }).await;
        assert_eq!(update, Err(FrameworkError::Rejected("frozen is locked".into())));

        let delete = client.delete("frozen".into()).await;
        assert!(matches!(delete, Err(FrameworkError::Rejected(_))));

        let missing = client.update("ghost".into(), TagPatch { color: None }).await;
        assert_eq!(missing, Err(FrameworkError::NotFound("ghost".into())));

        let action = client.perform_action("ghost".into(), TagAction::IsLocked).await;
        assert_eq!(action, Err(FrameworkError::NotFound("ghost".into())));
    }

    #[tokio::test]
    async fn test_get_many_keeps_request_order_and_skips_missing() {
        let (actor, client) = ResourceActor::new(10);
        tokio::spawn(actor.run());

        client.create(tag("a", false)).await.unwrap();
        client.create(tag("b", false)).await.unwrap();

        let items = client
            .get_many(vec!["b".into(), "missing".into(), "a".into()])
            .await
            .unwrap();
        let labels: Vec<_> = items.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Tag>::new(1);
        drop(actor);
        assert_eq!(client.get("x".into()).await, Err(FrameworkError::ActorClosed));
    }
}
