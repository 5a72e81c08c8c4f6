//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns an ordered in-memory store of
//! records and applies every repository operation to it, one message at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns an ordered collection of records.
///
/// # Concurrency Model
/// The actor is the only owner of `store`. Clients never touch it; they send a
/// [`ResourceRequest`] and wait for the answer. Requests are applied strictly one after
/// another, so two concurrent HTTP requests can never interleave inside an operation and
/// no `Mutex` is needed around the `Vec`.
///
/// # Usage Pattern
///
/// 1. **Create**: call `ResourceActor::new()` to get the actor (server) and client.
/// 2. **Run**: spawn `actor.run()` in a background task.
/// 3. **Use**: clone the client wherever the store is needed.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] enum NoteAction { Append(String) }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = Note;
///     type Replace = String;
///     type Filter = ();
///     type Action = NoteAction;
///     type Error = NoteError;
///
///     fn has_id(&self, id: &u32) -> bool { self.id == *id }
///     fn from_create_params(note: Note) -> Result<Self, NoteError> { Ok(note) }
///     fn from_replace_params(id: u32, text: String) -> Result<Self, NoteError> { Ok(Self { id, text }) }
///     fn matches(&self, _: &()) -> bool { true }
///     fn handle_action(&mut self, action: NoteAction) -> Result<(), NoteError> {
///         match action { NoteAction::Append(more) => self.text.push_str(&more) }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     client.create(Note { id: 1, text: "a".into() }).await.unwrap();
///     let note = client.perform_action(1, NoteAction::Append("b".into())).await.unwrap();
///     assert_eq!(note.text, "ab");
/// }
/// ```
///
/// # Operations
///
/// * **Create**: builds the record with `T::from_create_params` and appends it.
/// * **List**: clones every record for which `T::matches` holds, in insertion order.
/// * **Get**: clones the first record for which `T::has_id` holds.
/// * **Replace**: overwrites the first addressed record in place, keeping its position.
/// * **Delete**: retains only the records that are *not* addressed; never fails.
/// * **Action**: runs `T::handle_action` on the first addressed record and returns it.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client calls
    /// wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.has_id(id))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "product_catalog::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    match T::from_create_params(params) {
                        Ok(item) => {
                            self.store.push(item.clone());
                            info!(entity_type, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::rejected("create", e)));
                        }
                    }
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .iter()
                        .filter(|item| item.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, matched = items.len(), size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|pos| self.store[pos].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Replace {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Replace");
                    let Some(pos) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    match T::from_replace_params(id.clone(), params) {
                        Ok(item) => {
                            self.store[pos] = item.clone();
                            info!(entity_type, %id, "Replaced");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Replace failed");
                            let _ = respond_to.send(Err(FrameworkError::rejected("replace", e)));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let before = self.store.len();
                    self.store.retain(|item| !item.has_id(&id));
                    let removed = before - self.store.len();
                    info!(entity_type, %id, removed, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(pos) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let item = &mut self.store[pos];
                    let result = item
                        .handle_action(action)
                        .map(|()| item.clone())
                        .map_err(|e| FrameworkError::rejected("action", e));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
