use crate::driver::RunOptions;
use crate::selector::Preset;
use crate::{Credentials, API_PREFIX};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(author, version, about = "Replace Vimeo video thumbnails with local images")]
pub struct CliArgs {
    /// Vimeo app client identifier
    #[arg(long, env = "CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// Vimeo app client secret
    #[arg(long, env = "CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Personal access token with the "edit" scope
    #[arg(long, env = "ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Base url of the API
    #[arg(long, env = "VIMEO_API_URL", default_value = API_PREFIX)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Directory holding the thumbnail images
    #[arg(long, default_value = "thumbnails")]
    pub thumbnails_dir: PathBuf,

    /// Results requested per listing page
    #[arg(long, default_value_t = crate::enumerate::DEFAULT_PER_PAGE)]
    pub per_page: usize,

    /// Match videos to images without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Log every request and response
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload <thumbnails-dir>/<video id>.jpg for every video of the account
    All,
    /// Apply one image to every video of a folder
    Folder(FolderArgs),
}

#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder id, skips the folder prompt
    #[arg(long)]
    pub folder: Option<String>,

    /// Image filename inside the thumbnails directory, skips the filename prompt
    #[arg(long)]
    pub image: Option<String>,
}

/// Load `KEY=value` lines into the process environment so the `env`
/// fallbacks above see them. Without `path` the nearest `.env` upwards from
/// the working directory is used. Variables already set are left alone.
pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(path) => dotenvy::from_path(path).ok().map(|_| path.to_path_buf()),
        None => dotenvy::dotenv().ok(),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl CliArgs {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: non_empty(&self.client_id),
            client_secret: non_empty(&self.client_secret),
            access_token: non_empty(&self.access_token),
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            per_page: self.per_page.max(1),
            dry_run: self.dry_run,
        }
    }
}

impl FolderArgs {
    pub fn preset(&self) -> Preset {
        Preset {
            folder_id: self.folder.clone(),
            image: self.image.clone(),
        }
    }
}
