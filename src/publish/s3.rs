//! S3 publisher.
//!
//! Region and credentials are resolved by `aws-config`'s default provider
//! chain (environment, shared config/credentials files, instance metadata).
//! This module never builds credentials itself.

use super::Publisher;
use crate::{Error, Result};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::path::Path;
use tracing::debug;

/// Content type attached to uploaded result files.
const CSV_CONTENT_TYPE: &str = "text/csv";

/// Uploads files with `PutObject`, replacing any existing object at the key.
#[derive(Debug, Clone)]
pub struct S3Publisher {
    client: Client,
}

impl S3Publisher {
    /// Build a client from the ambient AWS environment.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        debug!(region = ?config.region(), "aws config loaded");
        Self::from_client(Client::new(&config))
    }

    /// Wrap an already configured client.
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Publisher for S3Publisher {
    async fn publish(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()> {
        let body = ByteStream::from_path(local_path)
            .await
            .map_err(|e| Error::io(local_path, std::io::Error::other(e)))?;

        debug!(bucket, key, path = %local_path.display(), "put_object");
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(CSV_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Upload {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }
}
