//! DynamoDB storage backend implementation.
//!
//! This module implements `KeyValueBackend` over a single DynamoDB table
//! using `aws-sdk-dynamodb`.

mod backend;
mod conversions;
mod error;

pub use backend::DynamoDbBackend;
