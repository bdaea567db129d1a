//! Diagnostic probe command implementation.
//!
//! Three independent read-only checks against the hosting API. Failures
//! are reported and execution continues; the probe never fails the process
//! on an API error.
use log::*;

use crate::{
    cli::Args,
    config::HostConfig,
    error::Result,
    forge::{
        github::Github,
        traits::Forge,
        types::{ApiOutcome, Permissions, Release, Repository},
    },
};

const RECENT_RELEASE_LIMIT: usize = 5;

/// Verdict derived from the repository payload's permission flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionLevel {
    Admin,
    Write,
    Insufficient,
}

/// Outcome of the three probe checks. `permission` stays `None` when the
/// repository fetch failed, since the flags it is derived from are
/// unavailable.
#[derive(Debug, Default)]
pub struct ProbeReport {
    pub repository: Option<Repository>,
    pub permission: Option<PermissionLevel>,
    pub releases: Option<Vec<Release>>,
}

/// Execute the check command against the configured repository.
pub async fn execute(_args: &Args) -> Result<()> {
    let config = HostConfig::from_env()?;
    let forge = Github::new(&config)?;

    info!("running API diagnostics for {}/{}", config.owner, config.repo);
    probe(&forge).await?;
    info!("diagnostics complete");

    Ok(())
}

/// Run the three checks, logging human-readable results as they land.
pub async fn probe(forge: &dyn Forge) -> Result<ProbeReport> {
    let mut report = ProbeReport::default();

    info!("checking repository access");
    match forge.get_repository().await? {
        ApiOutcome::Success(repo) => {
            info!("repository reachable: {}", repo.full_name);
            info!(
                "description: {}",
                repo.description.as_deref().unwrap_or("none")
            );
            report.permission = Some(permission_level(repo.permissions.as_ref()));
            report.repository = Some(repo);
        }
        ApiOutcome::NotFound => {
            error!("repository not reachable: status 404");
        }
        ApiOutcome::Error { status, body } => {
            error!("repository not reachable: status {status}");
            debug!("response: {body}");
        }
    }

    // The verdict comes from the already-fetched repository payload, not a
    // separate request. Nothing to report when the fetch failed.
    match report.permission {
        Some(PermissionLevel::Admin) => info!("token has admin access"),
        Some(PermissionLevel::Write) => info!("token has write access"),
        Some(PermissionLevel::Insufficient) => {
            error!("token cannot create releases")
        }
        None => {}
    }

    info!("fetching recent releases");
    match forge.list_releases().await? {
        ApiOutcome::Success(releases) => {
            if releases.is_empty() {
                info!("no releases yet");
            }
            for release in releases.iter().take(RECENT_RELEASE_LIMIT) {
                info!(
                    "  - {} ({})",
                    release.tag_name,
                    release.name.as_deref().unwrap_or(&release.tag_name)
                );
            }
            report.releases = Some(releases);
        }
        ApiOutcome::NotFound => {
            error!("failed to list releases: status 404");
        }
        ApiOutcome::Error { status, body } => {
            error!("failed to list releases: status {status}");
            debug!("response: {body}");
        }
    }

    Ok(report)
}

fn permission_level(permissions: Option<&Permissions>) -> PermissionLevel {
    match permissions {
        Some(flags) if flags.admin => PermissionLevel::Admin,
        Some(flags) if flags.push => PermissionLevel::Write,
        _ => PermissionLevel::Insufficient,
    }
}

#[cfg(test)]
mod tests {
    use crate::forge::traits::MockForge;

    use super::*;

    fn sample_repository(admin: bool, push: bool) -> Repository {
        Repository {
            full_name: "direct-dev-ru/go-lcg".into(),
            description: Some("linux command gpt".into()),
            permissions: Some(Permissions {
                admin,
                push,
                pull: true,
            }),
        }
    }

    fn sample_release(tag: &str) -> Release {
        Release {
            tag_name: tag.into(),
            name: Some(tag.into()),
            upload_url: format!(
                "https://uploads.example.com/{tag}/assets{{?name,label}}"
            ),
            html_url: format!("https://example.com/releases/tag/{tag}"),
        }
    }

    #[test]
    fn permission_precedence_is_admin_then_write() {
        let admin = Permissions {
            admin: true,
            push: true,
            pull: true,
        };
        assert_eq!(permission_level(Some(&admin)), PermissionLevel::Admin);

        let write = Permissions {
            admin: false,
            push: true,
            pull: true,
        };
        assert_eq!(permission_level(Some(&write)), PermissionLevel::Write);

        let read_only = Permissions {
            admin: false,
            push: false,
            pull: true,
        };
        assert_eq!(
            permission_level(Some(&read_only)),
            PermissionLevel::Insufficient
        );
        assert_eq!(permission_level(None), PermissionLevel::Insufficient);
    }

    #[test_log::test(tokio::test)]
    async fn reports_all_three_checks_on_success() {
        let mut forge = MockForge::new();
        forge
            .expect_get_repository()
            .times(1)
            .returning(|| Ok(ApiOutcome::Success(sample_repository(false, true))));
        forge.expect_list_releases().times(1).returning(|| {
            Ok(ApiOutcome::Success(vec![
                sample_release("lcg.1.1.0"),
                sample_release("lcg.1.0.0"),
            ]))
        });

        let report = probe(&forge).await.unwrap();

        assert!(report.repository.is_some());
        assert_eq!(report.permission, Some(PermissionLevel::Write));
        assert_eq!(report.releases.unwrap().len(), 2);
    }

    #[test_log::test(tokio::test)]
    async fn repository_failure_skips_permission_but_not_releases() {
        let mut forge = MockForge::new();
        forge.expect_get_repository().times(1).returning(|| {
            Ok(ApiOutcome::Error {
                status: 403,
                body: "forbidden".into(),
            })
        });
        forge
            .expect_list_releases()
            .times(1)
            .returning(|| Ok(ApiOutcome::Success(vec![])));

        let report = probe(&forge).await.unwrap();

        assert!(report.repository.is_none());
        assert!(report.permission.is_none());
        assert_eq!(report.releases.unwrap().len(), 0);
    }

    #[test_log::test(tokio::test)]
    async fn releases_failure_is_informational() {
        let mut forge = MockForge::new();
        forge
            .expect_get_repository()
            .returning(|| Ok(ApiOutcome::Success(sample_repository(true, true))));
        forge.expect_list_releases().returning(|| {
            Ok(ApiOutcome::Error {
                status: 500,
                body: "server error".into(),
            })
        });

        let report = probe(&forge).await.unwrap();

        assert_eq!(report.permission, Some(PermissionLevel::Admin));
        assert!(report.releases.is_none());
    }
}
