//! Release publication command implementation.
use log::*;

use crate::{
    artifacts::{self, Artifact},
    cli::Args,
    config::{self, HostConfig},
    error::{LcgError, Result},
    forge::{
        github::Github,
        traits::Forge,
        types::{ApiOutcome, CreateRelease, Release},
    },
};

/// Tally of the upload loop. Every discovered artifact lands in exactly
/// one of the two buckets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UploadSummary {
    pub uploaded: usize,
    pub failed: usize,
}

/// Execute the release command: resolve tag and artifacts locally, find or
/// create the release, upload everything, report the tally.
pub async fn execute(_args: &Args) -> Result<()> {
    let config = HostConfig::from_env()?;

    let version = config::read_version(config::VERSION_FILE)?;
    let tag = config::tag_for_version(&version);
    info!("version: {version}");
    info!("tag: {tag}");

    let artifacts = artifacts::discover(config::ARTIFACTS_DIR)?;
    info!("found {} artifact(s)", artifacts.len());
    for artifact in &artifacts {
        info!("  - {} ({} bytes)", artifact.name, artifact.size);
    }

    let forge = Github::new(&config)?;
    let summary = publish(&forge, &tag, &artifacts).await?;

    info!("uploaded: {}", summary.uploaded);
    if summary.failed > 0 {
        warn!("failed uploads: {}", summary.failed);
    } else {
        info!("all artifacts uploaded");
    }

    info!(
        "release available at: https://github.com/{}/{}/releases/tag/{tag}",
        config.owner, config.repo
    );

    Ok(())
}

/// Core publish flow against the hosting API. A single failed upload is
/// recorded and the loop continues; only lookup/create failures are fatal.
pub async fn publish(
    forge: &dyn Forge,
    tag: &str,
    artifacts: &[Artifact],
) -> Result<UploadSummary> {
    let release = resolve_release(forge, tag).await?;

    let mut summary = UploadSummary::default();

    for artifact in artifacts {
        info!("uploading {}", artifact.name);
        let data = tokio::fs::read(&artifact.path).await?;

        match forge
            .upload_asset(&release.upload_url, &artifact.name, data)
            .await?
        {
            ApiOutcome::Success(()) => {
                info!("uploaded {}", artifact.name);
                summary.uploaded += 1;
            }
            ApiOutcome::NotFound => {
                error!("failed to upload {}: status 404", artifact.name);
                summary.failed += 1;
            }
            ApiOutcome::Error { status, body } => {
                error!("failed to upload {}: status {status}", artifact.name);
                debug!("response: {body}");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Look the release up by tag and create it when absent. Any unexpected
/// status from either request is fatal.
async fn resolve_release(forge: &dyn Forge, tag: &str) -> Result<Release> {
    info!("checking for existing release {tag}");

    match forge.get_release_by_tag(tag).await? {
        ApiOutcome::Success(release) => {
            info!("release {tag} already exists");
            info!("release page: {}", release.html_url);
            Ok(release)
        }
        ApiOutcome::NotFound => {
            info!("release {tag} not found: creating");

            match forge.create_release(CreateRelease::for_tag(tag)).await? {
                ApiOutcome::Success(release) => {
                    info!("release {tag} created");
                    info!("release page: {}", release.html_url);
                    Ok(release)
                }
                ApiOutcome::NotFound => {
                    Err(LcgError::api("release creation", 404, String::new()))
                }
                ApiOutcome::Error { status, body } => {
                    Err(LcgError::api("release creation", status, body))
                }
            }
        }
        ApiOutcome::Error { status, body } => {
            Err(LcgError::api("release lookup", status, body))
        }
    }
}
