use crate::error::{BiostrapError, Result};
use serde::{Deserialize, Serialize};

/// Response of the client-version endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClientVersion {
    #[serde(
        rename = "clientVersionUpload",
        alias = "ClientVersionUpload",
        alias = "clientversionupload"
    )]
    pub client_version_upload: String,
    #[serde(default, alias = "Version")]
    pub version: Option<String>,
    #[serde(
        default,
        rename = "bootstrapperVersion",
        alias = "BootstrapperVersion",
        alias = "bootstrapperversion"
    )]
    pub bootstrapper_version: Option<String>,
}

impl ClientVersion {
    pub fn parse(json: &str) -> Result<Self> {
        let info: ClientVersion = serde_json::from_str(json)?;
        validate_version(&info.client_version_upload)?;
        Ok(info)
    }
}

/// The upload version becomes a folder name and part of every URL, so it
/// must be a single non-empty path segment.
pub fn validate_version(version: &str) -> Result<()> {
    if version.trim().is_empty()
        || version.contains("..")
        || version.contains('/')
        || version.contains('\\')
    {
        return Err(BiostrapError::InvalidVersion {
            version: version.to_string(),
        });
    }

    Ok(())
}

/// Prefix shared by the manifest and every package URL: `<base>/<version>-`.
pub fn package_prefix(cdn_base_url: &str, version: &str) -> String {
    format!("{}/{version}-", cdn_base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_client_version() {
        let json = r#"{
            "version": "0.650.0.6500744",
            "clientVersionUpload": "version-0123456789abcdef",
            "bootstrapperVersion": "1, 6, 0, 6500744"
        }"#;

        let info = ClientVersion::parse(json).unwrap();
        assert_eq!(info.client_version_upload, "version-0123456789abcdef");
        assert_eq!(info.version.as_deref(), Some("0.650.0.6500744"));
        assert_eq!(info.bootstrapper_version.as_deref(), Some("1, 6, 0, 6500744"));
    }

    #[test]
    fn test_parse_accepts_pascal_case() {
        let json = r#"{ "ClientVersionUpload": "version-abc" }"#;
        let info = ClientVersion::parse(json).unwrap();
        assert_eq!(info.client_version_upload, "version-abc");
        assert_eq!(info.version, None);
    }

    #[test]
    fn test_parse_rejects_empty_version() {
        let json = r#"{ "clientVersionUpload": "" }"#;
        assert!(matches!(
            ClientVersion::parse(json),
            Err(BiostrapError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_validate_version_rejects_separators() {
        assert!(validate_version("version-abc").is_ok());
        assert!(validate_version("../etc").is_err());
        assert!(validate_version("a/b").is_err());
        assert!(validate_version("a\\b").is_err());
    }

    #[test]
    fn test_package_prefix() {
        assert_eq!(
            package_prefix("https://setup-aws.rbxcdn.com", "version-abc"),
            "https://setup-aws.rbxcdn.com/version-abc-"
        );
        assert_eq!(
            package_prefix("https://mirror.example.com/", "version-abc"),
            "https://mirror.example.com/version-abc-"
        );
    }
}
