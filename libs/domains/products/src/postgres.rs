//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};
use tracing::instrument;

use crate::entity;
use crate::error::{ProductError, ProductResult, StoreOperation};
use crate::models::{NewProduct, Product};
use crate::repository::{parse_numeric_id, ProductRepository};

/// Table bootstrap, run once at startup
pub const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS products (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    price DOUBLE PRECISION NOT NULL
)";

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the `products` table if it does not exist yet
    pub async fn ensure_schema(&self) -> ProductResult<()> {
        self.db
            .execute_unprepared(CREATE_TABLE_SQL)
            .await
            .map_err(|e| ProductError::StoreUnavailable(format!("Database error: {}", e)))?;

        tracing::info!("Products table ready");
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> ProductResult<u64> {
        entity::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| ProductError::StoreUnavailable(format!("Database error: {}", e)))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ProductError::store(StoreOperation::Query, e))?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let key = parse_numeric_id(id)?;

        let model = entity::Entity::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(|e| ProductError::store(StoreOperation::Query, e))?;

        Ok(model.map(Product::from))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn insert(&self, input: NewProduct) -> ProductResult<Product> {
        let active_model = entity::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| ProductError::store(StoreOperation::Insert, e))?;

        tracing::info!(product_id = model.id, "Product created successfully");
        Ok(model.into())
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &str, input: NewProduct) -> ProductResult<Option<Product>> {
        let key = parse_numeric_id(id)?;

        let active_model = entity::ActiveModel {
            id: Set(key),
            name: Set(input.name),
            price: Set(input.price),
        };

        match active_model.update(&self.db).await {
            Ok(model) => {
                tracing::info!(product_id = model.id, "Product updated successfully");
                Ok(Some(model.into()))
            }
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(ProductError::store(StoreOperation::Update, e)),
        }
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> ProductResult<bool> {
        let key = parse_numeric_id(id)?;

        let result = entity::Entity::delete_by_id(key)
            .exec(&self.db)
            .await
            .map_err(|e| ProductError::store(StoreOperation::Delete, e))?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = key, "Product deleted successfully");
        }
        Ok(result.rows_affected > 0)
    }
}
