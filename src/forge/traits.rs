//! Traits related to the remote hosting API
use async_trait::async_trait;

use crate::{
    error::Result,
    forge::types::{ApiOutcome, CreateRelease, Release, Repository},
};

/// Operations the commands need from the hosting API. Transport failures
/// surface as `Err`; protocol-level replies are classified `ApiOutcome`s so
/// callers decide which statuses are fatal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forge {
    /// Fetch the release tagged `tag`, if one exists.
    async fn get_release_by_tag(&self, tag: &str) -> Result<ApiOutcome<Release>>;

    /// Create a new release.
    async fn create_release(&self, req: CreateRelease) -> Result<ApiOutcome<Release>>;

    /// Attach `data` to a release as an asset named `name`, via the
    /// release's upload URL.
    async fn upload_asset(
        &self,
        upload_url: &str,
        name: &str,
        data: Vec<u8>,
    ) -> Result<ApiOutcome<()>>;

    /// Fetch repository metadata for the configured repository.
    async fn get_repository(&self) -> Result<ApiOutcome<Repository>>;

    /// List the repository's releases, most recent first.
    async fn list_releases(&self) -> Result<ApiOutcome<Vec<Release>>>;
}
