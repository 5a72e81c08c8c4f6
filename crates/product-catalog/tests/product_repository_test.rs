use product_catalog::lifecycle::ProductSystem;
use product_catalog::model::{Product, ProductFilter, ProductId, ProductReplace};
use product_catalog::product_actor::ProductError;
use resource_actor::ActorClient;

fn product(id: i64, name: &str, price: f64, rating: f64) -> Product {
    Product {
        id: Some(id),
        name: Some(name.to_string()),
        price: Some(price),
        rating: Some(rating),
        ..Product::default()
    }
}

/// End-to-end test of the store through the client, with a real actor.
#[tokio::test]
async fn test_repository_operations() {
    let system = ProductSystem::default();
    let client = system.product_client.clone();

    client
        .create_product(product(1, "Mouse", 50.0, 4.5))
        .await
        .expect("Failed to create product");
    client
        .create_product(product(2, "Monitor", 900.0, 4.9))
        .await
        .expect("Failed to create product");

    let cheap = client
        .list_products(ProductFilter {
            max_price: Some(100.0),
            ..ProductFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(cheap, vec![product(1, "Mouse", 50.0, 4.5)]);

    let repriced = client.set_price(ProductId::new(2), 850.0).await.unwrap();
    assert_eq!(repriced.price, Some(850.0));

    let restocked = client.adjust_stock(ProductId::new(2), 3).await.unwrap();
    assert_eq!(restocked.quantity, Some(3));
    assert_eq!(restocked.price, Some(850.0));

    let replaced = client
        .replace_product(
            ProductId::new(1),
            ProductReplace {
                name: Some("Mouse Gamer".into()),
                ..ProductReplace::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(replaced.price, None);

    assert_eq!(client.delete(ProductId::new(1)).await.unwrap(), 1);
    assert_eq!(client.get(ProductId::new(1)).await.unwrap(), None);

    drop(client);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_not_found_is_reported_for_updates() {
    let system = ProductSystem::default();
    let client = &system.product_client;

    assert_eq!(
        client.set_price(ProductId::new(1), 10.0).await,
        Err(ProductError::NotFound("1".into()))
    );
    assert_eq!(
        client.adjust_stock(ProductId::parse("x"), 1).await,
        Err(ProductError::NotFound("NaN".into()))
    );
    assert_eq!(client.delete(ProductId::new(1)).await, Ok(0));
}

#[tokio::test]
async fn test_concurrent_stock_updates_are_not_lost() {
    let system = ProductSystem::default();
    system
        .product_client
        .create_product(product(1, "Mouse", 50.0, 4.5))
        .await
        .unwrap();

    let mut handles = vec![];
    for _ in 0..100 {
        let client = system.product_client.clone();
        handles.push(tokio::spawn(async move {
            client.adjust_stock(ProductId::new(1), 1).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let final_state = system
        .product_client
        .get(ProductId::new(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(final_state.quantity, Some(100));
}
