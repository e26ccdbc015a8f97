use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations decode the opaque string id with their own codec and fail
/// with [`ProductError::InvalidId`] before touching the store when it is
/// malformed. Every other method is a single store round trip.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Short backend name reported by `/db/health`
    fn backend(&self) -> &'static str;

    /// Cheap liveness query; returns the number of stored products
    async fn health_check(&self) -> ProductResult<u64>;

    /// All products in the store's natural order
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Insert a product and return it with its generated id
    async fn insert(&self, input: NewProduct) -> ProductResult<Product>;

    /// Replace name and price; `None` when no product matched
    async fn update(&self, id: &str, input: NewProduct) -> ProductResult<Option<Product>>;

    /// Delete a product by ID; `false` when nothing was deleted
    async fn delete_by_id(&self, id: &str) -> ProductResult<bool>;
}

/// Decode a positive decimal integer id (relational and in-memory stores).
///
/// Only the canonical spelling is accepted: `+1` and `01` are rejected so that
/// each product has exactly one addressable id.
pub fn parse_numeric_id(id: &str) -> ProductResult<i64> {
    id.parse::<i64>()
        .ok()
        .filter(|value| *value > 0 && value.to_string() == id)
        .ok_or_else(|| ProductError::InvalidId(id.to_string()))
}

/// In-memory repository backed by an ordered map.
///
/// Ids are assigned from a counter starting at 1 and are never reused.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    next_id: i64,
    products: BTreeMap<i64, Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products
    pub async fn len(&self) -> usize {
        self.state.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> ProductResult<u64> {
        Ok(self.len().await as u64)
    }

    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.state.read().await.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let key = parse_numeric_id(id)?;
        Ok(self.state.read().await.products.get(&key).cloned())
    }

    async fn insert(&self, input: NewProduct) -> ProductResult<Product> {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let key = state.next_id;

        let product = Product {
            id: key.to_string(),
            name: input.name,
            price: input.price,
        };
        state.products.insert(key, product.clone());

        Ok(product)
    }

    async fn update(&self, id: &str, input: NewProduct) -> ProductResult<Option<Product>> {
        let key = parse_numeric_id(id)?;
        let mut state = self.state.write().await;

        Ok(state.products.get_mut(&key).map(|product| {
            product.name = input.name;
            product.price = input.price;
            product.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> ProductResult<bool> {
        let key = parse_numeric_id(id)?;
        Ok(self.state.write().await.products.remove(&key).is_some())
    }
}
