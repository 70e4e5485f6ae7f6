pub mod errors;
pub mod db;
pub mod data_processor;

#[cfg(test)]
mod tests;
