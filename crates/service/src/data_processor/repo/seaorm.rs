use sea_orm::DatabaseConnection;

use crate::data_processor::domain::DataProcessor;
use crate::data_processor::repository::DataProcessorRepository;
use crate::errors::ServiceError;

pub struct SeaOrmDataProcessorRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmDataProcessorRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl DataProcessorRepository for SeaOrmDataProcessorRepository {
    async fn upsert(&self, record: DataProcessor) -> Result<DataProcessor, ServiceError> {
        let saved = models::data_processor::upsert(&self.db, record.user_id, record.dp_value).await?;
        Ok(saved.into())
    }
}
