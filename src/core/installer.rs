use crate::core::config::Config;
use crate::core::download::Fetcher;
use crate::core::extract;
use crate::core::manifest::{self, MANIFEST_FILE_NAME};
use crate::core::version::{self, ClientVersion};
use crate::error::{BiostrapError, Result};
use crate::utils::fs;
use std::path::{Path, PathBuf};

/// Outcome of one install run. Archive failures are collected, not raised.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallSummary {
    pub version: String,
    pub version_dir: PathBuf,
    pub installed: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl InstallSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct Installer<'a, F: Fetcher> {
    config: &'a Config,
    fetcher: &'a F,
}

impl<'a, F: Fetcher> Installer<'a, F> {
    pub fn new(config: &'a Config, fetcher: &'a F) -> Self {
        Self { config, fetcher }
    }

    pub fn fetch_client_version(&self) -> Result<ClientVersion> {
        let json = self
            .fetcher
            .get_text(&self.config.settings.client_version_url)?;
        ClientVersion::parse(&json)
    }

    /// Install the version currently published on the client-version endpoint.
    pub fn install_latest(&self) -> Result<InstallSummary> {
        let client_version = self.fetch_client_version()?;
        self.install_version(&client_version.client_version_upload)
    }

    /// Download, extract and clean up every archive listed in the version's manifest.
    ///
    /// Only a failed manifest fetch aborts the run; each archive failure is
    /// recorded in the summary and the next archive is attempted.
    pub fn install_version(&self, version: &str) -> Result<InstallSummary> {
        version::validate_version(version)?;

        let prefix = version::package_prefix(&self.config.settings.cdn_base_url, version);
        let version_dir = self.config.get_version_dir(version);
        fs::ensure_dir_exists(&version_dir)?;

        let manifest_url = format!("{prefix}{MANIFEST_FILE_NAME}");
        println!("Fetching manifest from: {manifest_url}");

        let manifest = self.fetcher.get_text(&manifest_url).map_err(|e| {
            BiostrapError::ManifestFetch {
                url: manifest_url.clone(),
                message: e.to_string(),
            }
        })?;

        let archives = manifest::archive_names(&manifest);
        log::info!("Manifest lists {} archives", archives.len());

        let mut summary = InstallSummary {
            version: version.to_string(),
            version_dir: version_dir.clone(),
            installed: Vec::new(),
            failed: Vec::new(),
        };

        for archive in archives {
            match self.install_archive(&prefix, &version_dir, &archive) {
                Ok(()) => summary.installed.push(archive),
                Err(e) => {
                    println!("✗ Error with {archive}: {e}");
                    summary.failed.push((archive, e.to_string()));
                }
            }
        }

        Ok(summary)
    }

    fn install_archive(&self, prefix: &str, version_dir: &Path, archive: &str) -> Result<()> {
        let url = format!("{prefix}{archive}");
        let extraction_dir = manifest::extraction_dir(version_dir, archive)?;
        fs::ensure_dir_exists(&extraction_dir)?;

        // Never inside the extraction folder; removed on drop.
        let download_dir = tempfile::Builder::new()
            .prefix(".download-")
            .tempdir_in(version_dir)?;
        let local_path = download_dir.path().join(archive);

        println!("Downloading {archive}...");
        self.fetcher.download_file(&url, &local_path)?;
        println!("✓ Downloaded {archive}");

        println!("Extracting {archive} to {}...", extraction_dir.display());
        extract::extract_zip(&local_path, &extraction_dir)?;
        println!("✓ Extracted {archive}");

        fs::remove_file_if_exists(&local_path)?;
        println!("Deleted {archive}");

        Ok(())
    }
}
