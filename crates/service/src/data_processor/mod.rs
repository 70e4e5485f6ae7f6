//! DataProcessor module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{DataProcessor, DataProcessorInput};
pub use repository::DataProcessorRepository;
pub use service::DataProcessorService;
