use crate::clients::ProductClient;
use crate::http;
use axum::Router;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Default capacity of the product store's request channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// The running product store and the client wired to it.
///
/// `ProductSystem` is responsible for:
/// - **Lifecycle Management**: spawning the product actor and waiting for it on shutdown
/// - **Dependency Wiring**: handing the [`ProductClient`] to the HTTP router
///
/// # Example
///
/// ```ignore
/// let system = ProductSystem::new(32);
/// let app = system.router();
///
/// axum::serve(listener, app).await?;
///
/// // Every router clone must be gone before the actor can stop
/// system.shutdown().await?;
/// ```
pub struct ProductSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl ProductSystem {
    /// Spawns the product actor with a request channel of `channel_capacity`.
    pub fn new(channel_capacity: usize) -> Self {
        let (actor, client) = crate::product_actor::new(channel_capacity);
        let handle = tokio::spawn(actor.run());

        Self {
            product_client: ProductClient::new(client),
            handle,
        }
    }

    /// Builds the HTTP router over this system's client.
    pub fn router(&self) -> Router {
        http::router(self.product_client.clone())
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the channel once every other clone (for example inside a
    /// router) is gone as well. The actor then finishes its queue and exits.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(JoinError)` if the actor task panicked or was cancelled
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e);
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for ProductSystem {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}
