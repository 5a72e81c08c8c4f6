//! # Product Client
//!
//! Provides a high-level API for the product store. It wraps a `ResourceClient<Product>` and
//! exposes domain-specific methods; `get` and `delete` come from [`ActorClient`].
use crate::model::{Product, ProductFilter, ProductId, ProductReplace};
use crate::product_actor::{ProductAction, ProductError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    /// Appends a product to the store and returns it as stored.
    #[instrument(skip(self, product), fields(id = ?product.id))]
    pub async fn create_product(&self, product: Product) -> Result<Product, ProductError> {
        debug!(?product, "Sending request");
        self.inner.create(product).await.map_err(Self::map_error)
    }

    /// Lists products passing `filter`, in insertion order.
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner.list(filter).await.map_err(Self::map_error)
    }

    /// Replaces the first product carrying `id`, keeping its position.
    #[instrument(skip(self))]
    pub async fn replace_product(
        &self,
        id: ProductId,
        params: ProductReplace,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.replace(id, params).await.map_err(Self::map_error)
    }

    /// Sets the price of the first product carrying `id`.
    #[instrument(skip(self))]
    pub async fn set_price(&self, id: ProductId, price: f64) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, ProductAction::SetPrice(price))
            .await
            .map_err(Self::map_error)
    }

    /// Moves the stock of the first product carrying `id` by `delta`.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: ProductId, delta: i64) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, ProductAction::AdjustStock(delta))
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{
        create_mock_client, expect_action, expect_create, expect_list, expect_replace,
    };

    fn mouse(quantity: i64) -> Product {
        Product {
            id: Some(1),
            name: Some("Mouse".into()),
            price: Some(50.0),
            quantity: Some(quantity),
            ..Product::default()
        }
    }

    #[tokio::test]
    async fn test_create_product_sends_body_unchanged() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move { product_client.create_product(mouse(5)).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params, mouse(5));
        responder.send(Ok(params)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), mouse(5));
    }

    #[tokio::test]
    async fn test_list_products_forwards_filter() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let filter = ProductFilter {
            max_price: Some(60.0),
            ..ProductFilter::default()
        };
        let task = tokio::spawn(async move { product_client.list_products(filter).await });

        let (filter, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert_eq!(filter.max_price, Some(60.0));
        responder.send(Ok(vec![mouse(5)])).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), vec![mouse(5)]);
    }

    #[tokio::test]
    async fn test_adjust_stock_sends_delta_action() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task =
            tokio::spawn(async move { product_client.adjust_stock(ProductId::new(1), -2).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId::new(1));
        assert_eq!(action, ProductAction::AdjustStock(-2));
        responder.send(Ok(mouse(3))).unwrap();

        assert_eq!(task.await.unwrap().unwrap().quantity, Some(3));
    }

    #[tokio::test]
    async fn test_set_price_not_found_maps_to_product_error() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task =
            tokio::spawn(async move { product_client.set_price(ProductId::new(9), 10.0).await });

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, ProductAction::SetPrice(10.0));
        responder
            .send(Err(FrameworkError::NotFound("9".into())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(ProductError::NotFound("9".into()))
        );
    }

    #[tokio::test]
    async fn test_replace_product_forwards_params() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let params = ProductReplace {
            name: Some("Mouse Pro".into()),
            ..ProductReplace::default()
        };
        let task = tokio::spawn(async move {
            product_client
                .replace_product(ProductId::new(1), params)
                .await
        });

        let (id, params, responder) = expect_replace(&mut receiver)
            .await
            .expect("Expected Replace request");
        assert_eq!(id, ProductId::new(1));
        let replaced = params.into_product(id);
        responder.send(Ok(replaced.clone())).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), replaced);
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<Product>(10);
        drop(receiver);
        let product_client = ProductClient::new(client);

        let result = product_client.get(ProductId::new(1)).await;
        assert!(matches!(
            result,
            Err(ProductError::ActorCommunicationError(_))
        ));
    }
}
