use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::DataProcessor;
use super::repository::DataProcessorRepository;
use crate::errors::ServiceError;

/// Application service for `DataProcessor` records, independent of the web framework.
///
/// Callers hand over a record whose required fields are already present
/// (see [`DataProcessor::from_candidate`]); the service forwards it to the
/// repository.
pub struct DataProcessorService<R: DataProcessorRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: DataProcessorRepository + ?Sized> DataProcessorService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Upsert a record by `user_id`.
    ///
    /// # Examples
    /// ```
    /// use service::data_processor::{DataProcessor, DataProcessorService};
    /// use service::data_processor::repository::mock::MockDataProcessorRepository;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockDataProcessorRepository::default());
    /// let svc = DataProcessorService::new(repo.clone());
    /// let saved = tokio_test::block_on(svc.create_data_processor(DataProcessor::new(1, 12345))).unwrap();
    /// assert_eq!(saved.dp_value, 12345);
    /// assert_eq!(repo.get(1), Some(12345));
    /// ```
    #[instrument(skip(self, record), fields(user_id = record.user_id))]
    pub async fn create_data_processor(&self, record: DataProcessor) -> Result<DataProcessor, ServiceError> {
        let saved = self.repo.upsert(record).await?;
        info!(user_id = saved.user_id, dp_value = saved.dp_value, "data_processor_saved");
        Ok(saved)
    }
}

impl<R: DataProcessorRepository + ?Sized> Clone for DataProcessorService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}
