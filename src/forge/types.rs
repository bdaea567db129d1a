//! Shared payload types for the hosting API.
use serde::{Deserialize, Serialize};

/// A release as returned by the hosting API. Only the fields this tool
/// consumes are deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    /// Display name; the API may return null here.
    pub name: Option<String>,
    /// Release-specific asset upload URL, including the templated
    /// `{?name,label}` query placeholder.
    pub upload_url: String,
    pub html_url: String,
}

/// Body of a release creation request.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRelease {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl CreateRelease {
    /// Standard creation payload: display name equals the tag, generated
    /// body text, neither draft nor prerelease.
    pub fn for_tag(tag: &str) -> Self {
        Self {
            tag_name: tag.to_string(),
            name: tag.to_string(),
            body: format!("Release {tag}"),
            draft: false,
            prerelease: false,
        }
    }
}

/// Permission flags reported on the repository payload for the
/// authenticated token.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub pull: bool,
}

/// Repository metadata consumed by the diagnostic probe.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub full_name: String,
    pub description: Option<String>,
    /// Absent when the API omits permission data for the token.
    #[serde(default)]
    pub permissions: Option<Permissions>,
}

/// Classified API reply: a decoded payload, a missing resource, or an
/// unexpected status with the response body kept for diagnostics.
#[derive(Debug, Clone)]
pub enum ApiOutcome<T> {
    Success(T),
    NotFound,
    Error { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_payload_is_consistent_with_tag() {
        let req = CreateRelease::for_tag("lcg.1.2.3");
        assert_eq!(req.tag_name, "lcg.1.2.3");
        assert_eq!(req.name, "lcg.1.2.3");
        assert_eq!(req.body, "Release lcg.1.2.3");
        assert!(!req.draft);
        assert!(!req.prerelease);
    }

    #[test]
    fn deserializes_repository_without_permissions() {
        let repo: Repository = serde_json::from_str(
            r#"{"full_name":"direct-dev-ru/go-lcg","description":null}"#,
        )
        .unwrap();

        assert_eq!(repo.full_name, "direct-dev-ru/go-lcg");
        assert!(repo.description.is_none());
        assert!(repo.permissions.is_none());
    }

    #[test]
    fn deserializes_release_with_null_name() {
        let release: Release = serde_json::from_str(
            r#"{
                "tag_name": "lcg.1.0.0",
                "name": null,
                "upload_url": "https://uploads.example.com/releases/1/assets{?name,label}",
                "html_url": "https://example.com/releases/tag/lcg.1.0.0"
            }"#,
        )
        .unwrap();

        assert_eq!(release.tag_name, "lcg.1.0.0");
        assert!(release.name.is_none());
    }
}
