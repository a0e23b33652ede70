use crate::api::VimeoApi;
use crate::enumerate::{VideoPager, VideoSource};
use crate::error::VimeoError;
use crate::models::{FolderRef, Summary, VideoRef};
use crate::uploader::{PictureStrategy, Uploader};
use std::path::{Path, PathBuf};

const SEPARATOR: &'static str = "----------------------------------------------";

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub per_page: usize,
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            per_page: crate::enumerate::DEFAULT_PER_PAGE,
            dry_run: false,
        }
    }
}

/// `<dir>/<video id>.jpg`
pub fn thumbnail_path(dir: &Path, video: &VideoRef) -> PathBuf {
    dir.join(format!("{}.jpg", video.id()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Updated,
    Matched,
    Skipped,
    Failed,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Updated => self.updated += 1,
            Outcome::Matched => self.matched += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

async fn upload_one<A: VimeoApi + ?Sized>(
    uploader: &Uploader<'_, A>,
    video: &VideoRef,
    image_path: &Path,
    dry_run: bool,
) -> Outcome {
    if dry_run {
        info!(
            "Would update thumbnail for video {} from {}",
            video,
            image_path.display()
        );
        return Outcome::Matched;
    }
    info!("Updating thumbnail for video {}...", video);
    match uploader.upload(video, image_path).await {
        Ok(picture_uri) => {
            info!("Thumbnail updated for video {} ({}).", video, picture_uri);
            Outcome::Updated
        }
        Err(err) => {
            error!("Failed to update thumbnail for video {}: {}", video, err);
            Outcome::Failed
        }
    }
}

/// Walk every video of the user and upload `<dir>/<id>.jpg` where it
/// exists. Listing errors abort the run; upload errors only skip the video.
pub async fn update_all<A: VimeoApi + ?Sized>(
    api: &A,
    thumbnails_dir: &Path,
    options: RunOptions,
) -> Result<Summary, VimeoError> {
    let uploader = Uploader::new(api, PictureStrategy::Direct);
    let mut pager = VideoPager::new(api, VideoSource::All, options.per_page);
    let mut summary = Summary::default();
    while let Some(videos) = pager.next_page().await? {
        for video in &videos {
            let image_path = thumbnail_path(thumbnails_dir, video);
            let outcome = if image_path.is_file() {
                upload_one(&uploader, video, &image_path, options.dry_run).await
            } else {
                info!("No thumbnail found for video {}.", video);
                Outcome::Skipped
            };
            summary.record(outcome);
        }
    }
    info!("Finished all videos: {}", summary);
    Ok(summary)
}

/// Apply one image to every video in `folder`, in listing order.
pub async fn update_folder<A: VimeoApi + ?Sized>(
    api: &A,
    folder: &FolderRef,
    image_path: &Path,
    options: RunOptions,
) -> Result<Summary, VimeoError> {
    let uploader = Uploader::new(api, PictureStrategy::Connection);
    let mut pager = VideoPager::new(
        api,
        VideoSource::Folder(folder.id().to_owned()),
        options.per_page,
    );
    let mut summary = Summary::default();
    while let Some(videos) = pager.next_page().await? {
        for video in &videos {
            info!("{}", SEPARATOR);
            let outcome = upload_one(&uploader, video, image_path, options.dry_run).await;
            summary.record(outcome);
        }
    }
    info!("{}", SEPARATOR);
    info!(
        "All videos in folder {} have been processed: {}",
        folder.name, summary
    );
    Ok(summary)
}
