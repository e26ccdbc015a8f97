//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product, ProductInput, ProductsWithUsers};
use crate::repository::ProductRepository;
use crate::users::UsersDirectory;

/// Product service providing business logic operations
///
/// The service layer validates input before any store call, turns absent
/// records into [`ProductError::NotFound`] and combines the product listing
/// with the users-api count.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    users: Arc<dyn UsersDirectory>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            users: Arc::clone(&self.users),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository and users directory
    pub fn new(repository: R, users: impl UsersDirectory + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
            users: Arc::new(users),
        }
    }

    /// Backend name of the underlying repository
    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }

    /// Number of stored products, or `StoreUnavailable`
    #[instrument(skip(self))]
    pub async fn store_health(&self) -> ProductResult<u64> {
        self.repository.health_check().await
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list_all().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(ProductError::not_found)
    }

    /// Create a new product
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        let input = NewProduct::try_from(input)?;
        self.repository.insert(input).await
    }

    /// Replace name and price of an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: ProductInput) -> ProductResult<Product> {
        let input = NewProduct::try_from(input)?;

        self.repository
            .update(id, input)
            .await?
            .ok_or_else(ProductError::not_found)
    }

    /// Delete a product, returning its id
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<String> {
        if !self.repository.delete_by_id(id).await? {
            return Err(ProductError::not_found());
        }

        Ok(id.to_string())
    }

    /// All products plus the users-api count.
    ///
    /// users-api is asked first; if it fails the store is not queried.
    #[instrument(skip(self))]
    pub async fn list_with_users_count(&self) -> ProductResult<ProductsWithUsers> {
        let users_count = self.users.count_users().await?;
        let products = self.repository.list_all().await?;

        Ok(ProductsWithUsers {
            products,
            users_count,
        })
    }
}
