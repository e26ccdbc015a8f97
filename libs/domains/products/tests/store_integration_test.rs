//! Container-backed repository tests. Run with `cargo test -- --ignored`.

use domain_products::{
    MongoProductRepository, NewProduct, PgProductRepository, ProductError, ProductRepository,
};
use test_utils::{TestDataBuilder, TestDatabase, TestMongo};

fn new_product(builder: &TestDataBuilder, suffix: &str, index: u64) -> NewProduct {
    NewProduct {
        name: builder.name("product", suffix),
        price: builder.price(index),
    }
}

/// Same behaviour contract for every backend
async fn exercise_repository(repo: &impl ProductRepository, builder: &TestDataBuilder, missing_id: &str) {
    assert_eq!(repo.health_check().await.unwrap(), 0);

    let first = repo.insert(new_product(builder, "first", 0)).await.unwrap();
    let second = repo.insert(new_product(builder, "second", 1)).await.unwrap();
    assert_ne!(first.id, second.id);

    let listed = repo.list_all().await.unwrap();
    assert_eq!(listed, vec![first.clone(), second.clone()]);
    assert_eq!(repo.health_check().await.unwrap(), 2);

    assert_eq!(repo.get_by_id(&first.id).await.unwrap(), Some(first.clone()));

    let replacement = NewProduct {
        name: "Widget2".to_string(),
        price: 12.5,
    };
    let updated = repo.update(&first.id, replacement.clone()).await.unwrap().unwrap();
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.name, "Widget2");
    assert_eq!(updated.price, 12.5);

    assert!(repo.update(missing_id, replacement).await.unwrap().is_none());
    assert_eq!(repo.health_check().await.unwrap(), 2);

    assert!(repo.delete_by_id(&first.id).await.unwrap());
    assert!(!repo.delete_by_id(&first.id).await.unwrap());
    assert!(repo.get_by_id(&first.id).await.unwrap().is_none());

    assert!(matches!(
        repo.get_by_id("definitely not an id").await,
        Err(ProductError::InvalidId(_))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_postgres_repository() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    repo.ensure_schema().await.unwrap();
    // Idempotent
    repo.ensure_schema().await.unwrap();

    let builder = TestDataBuilder::from_test_name("test_postgres_repository");
    exercise_repository(&repo, &builder, "999999").await;
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_mongo_repository() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database("productsdb"));

    let builder = TestDataBuilder::from_test_name("test_mongo_repository");
    exercise_repository(&repo, &builder, "000000000000000000000000").await;
}
