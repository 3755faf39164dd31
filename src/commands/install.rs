use crate::core::{
    config::Config,
    download::Downloader,
    installer::{InstallSummary, Installer},
};
use crate::error::Result;

pub fn install() -> Result<()> {
    let config = Config::load()?;
    log::info!("Using application folder {:?}", config.biostrap_dir);

    let downloader = Downloader::new(&config.settings.user_agent)?;
    let installer = Installer::new(&config, &downloader);

    println!("Fetching current client version...");
    let client_version = installer.fetch_client_version()?;
    println!("Client version: {}", client_version.client_version_upload);

    match installer.install_version(&client_version.client_version_upload) {
        Ok(summary) => {
            print_summary(&summary);
            Ok(())
        }
        Err(e) if e.is_fatal() => {
            println!("{e}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn print_summary(summary: &InstallSummary) {
    println!();
    if summary.installed.is_empty() && summary.failed.is_empty() {
        println!("⚠️  The manifest did not list any archives.");
    } else if summary.is_complete() {
        println!(
            "All files downloaded, extracted and cleaned up at: {}",
            summary.version_dir.display()
        );
    } else {
        println!(
            "Installed {} of {} archives at: {}",
            summary.installed.len(),
            summary.installed.len() + summary.failed.len(),
            summary.version_dir.display()
        );
        println!("Failed archives:");
        for (archive, error) in &summary.failed {
            println!("  • {archive}: {error}");
        }
    }
}
