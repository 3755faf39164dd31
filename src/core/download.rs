use crate::error::{BiostrapError, Result};
use crate::utils::fs;
use reqwest::blocking::{Client, Response};
use std::fs::File;
use std::path::Path;

/// Read-only HTTP access used by the installer.
pub trait Fetcher {
    /// GET `url` and return the body as text.
    fn get_text(&self, url: &str) -> Result<String>;

    /// GET `url` and stream the body into `destination`, replacing any existing file.
    fn download_file(&self, url: &str, destination: &Path) -> Result<()>;
}

pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<Response> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(BiostrapError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

impl Fetcher for Downloader {
    fn get_text(&self, url: &str) -> Result<String> {
        Ok(self.get(url)?.text()?)
    }

    fn download_file(&self, url: &str, destination: &Path) -> Result<()> {
        if let Some(parent) = destination.parent() {
            fs::ensure_dir_exists(parent)?;
        }

        let mut response = self.get(url)?;
        let mut file = File::create(destination)?;
        let written = response.copy_to(&mut file)?;

        log::debug!("Wrote {written} bytes to {destination:?}");
        Ok(())
    }
}
