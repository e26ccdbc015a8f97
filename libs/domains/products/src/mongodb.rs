//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::ReturnDocument,
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ProductError, ProductResult, StoreOperation};
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

/// Default collection name
pub const COLLECTION: &str = "products";

/// Stored shape of a product document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub price: f64,
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            price: doc.price,
        }
    }
}

/// Decode a 24-character lowercase hex object id, the form ids are rendered in
pub fn parse_object_id(id: &str) -> ProductResult<ObjectId> {
    ObjectId::parse_str(id)
        .ok()
        .filter(|oid| oid.to_hex() == id)
        .ok_or_else(|| ProductError::InvalidId(id.to_string()))
}

/// MongoDB implementation of the ProductRepository
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository over the `products` collection
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductDocument>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> ProductResult<u64> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| ProductError::StoreUnavailable(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| ProductError::store(StoreOperation::Query, e))?;
        let documents: Vec<ProductDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| ProductError::store(StoreOperation::Query, e))?;

        Ok(documents.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let oid = parse_object_id(id)?;

        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| ProductError::store(StoreOperation::Query, e))?;

        Ok(document.map(Product::from))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn insert(&self, input: NewProduct) -> ProductResult<Product> {
        let document = ProductDocument {
            id: ObjectId::new(),
            name: input.name,
            price: input.price,
        };

        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| ProductError::store(StoreOperation::Insert, e))?;

        tracing::info!(product_id = %document.id, "Product created successfully");
        Ok(document.into())
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &str, input: NewProduct) -> ProductResult<Option<Product>> {
        let oid = parse_object_id(id)?;

        let updated = self
            .collection
            .find_one_and_update(
                doc! { "_id": oid },
                doc! { "$set": { "name": input.name, "price": input.price } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| ProductError::store(StoreOperation::Update, e))?;

        if updated.is_some() {
            tracing::info!(product_id = %oid, "Product updated successfully");
        }
        Ok(updated.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> ProductResult<bool> {
        let oid = parse_object_id(id)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| ProductError::store(StoreOperation::Delete, e))?;

        if result.deleted_count > 0 {
            tracing::info!(product_id = %oid, "Product deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}
