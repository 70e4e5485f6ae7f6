use async_trait::async_trait;

use super::domain::DataProcessor;
use crate::errors::ServiceError;

/// Repository abstraction for `DataProcessor` persistence.
///
/// The only operation is an upsert keyed by `user_id`: insert when the key is
/// new, overwrite when it exists.
#[async_trait]
pub trait DataProcessorRepository: Send + Sync {
    async fn upsert(&self, record: DataProcessor) -> Result<DataProcessor, ServiceError>;
}

/// In-memory repositories for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockDataProcessorRepository {
        rows: Mutex<HashMap<i32, i64>>, // key: user_id
        calls: AtomicUsize,
    }

    impl MockDataProcessorRepository {
        pub fn get(&self, user_id: i32) -> Option<i64> {
            let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
            rows.get(&user_id).copied()
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap_or_else(|e| e.into_inner()).len()
        }

        pub fn is_empty(&self) -> bool { self.len() == 0 }

        /// Number of upsert calls received, successful or not.
        pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
    }

    #[async_trait]
    impl DataProcessorRepository for MockDataProcessorRepository {
        async fn upsert(&self, record: DataProcessor) -> Result<DataProcessor, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
            rows.insert(record.user_id, record.dp_value);
            Ok(record)
        }
    }

    /// Repository whose store is always unreachable.
    #[derive(Default)]
    pub struct FailingDataProcessorRepository {
        calls: AtomicUsize,
    }

    impl FailingDataProcessorRepository {
        pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
    }

    #[async_trait]
    impl DataProcessorRepository for FailingDataProcessorRepository {
        async fn upsert(&self, _record: DataProcessor) -> Result<DataProcessor, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ServiceError::Db("connection refused".into()))
        }
    }
}
