use crate::api::VimeoApi;
use crate::error::VimeoError;
use crate::models::{FolderRef, VideoRef};

pub const DEFAULT_PER_PAGE: usize = 50;

/// Which collection of videos a [`VideoPager`] walks.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoSource {
    /// `/me/videos`
    All,
    /// `/me/projects/{id}/videos`
    Folder(String),
}

/// Walks a video listing one page at a time, following the server's
/// `paging.next` marker. Pages are handed out only when asked for, so the
/// caller finishes a page before the next request is made.
pub struct VideoPager<'a, A: VimeoApi + ?Sized> {
    api: &'a A,
    source: VideoSource,
    page: usize,
    per_page: usize,
    done: bool,
}

impl<'a, A: VimeoApi + ?Sized> VideoPager<'a, A> {
    pub fn new(api: &'a A, source: VideoSource, per_page: usize) -> Self {
        Self {
            api,
            source,
            page: 1,
            per_page,
            done: false,
        }
    }

    /// Next page of videos, or `None` once the previous page reported no
    /// next link.
    pub async fn next_page(&mut self) -> Result<Option<Vec<VideoRef>>, VimeoError> {
        if self.done {
            return Ok(None);
        }
        let page = match &self.source {
            VideoSource::All => self.api.list_videos(self.page, self.per_page).await?,
            VideoSource::Folder(folder_id) => {
                self.api
                    .list_folder_videos(folder_id, self.page, self.per_page)
                    .await?
            }
        };
        debug!(
            "page {} of {:?}: {} videos, more: {}",
            self.page,
            self.source,
            page.data.len(),
            page.has_next()
        );
        if page.has_next() {
            self.page += 1;
        } else {
            self.done = true;
        }
        Ok(Some(page.data))
    }
}

/// Every folder of the user, across all pages.
pub async fn list_all_folders<A: VimeoApi + ?Sized>(
    api: &A,
    per_page: usize,
) -> Result<Vec<FolderRef>, VimeoError> {
    let mut folders = Vec::new();
    let mut page = 1;
    loop {
        let res = api.list_folders(page, per_page).await?;
        let more = res.has_next();
        folders.extend(res.data);
        if !more {
            return Ok(folders);
        }
        page += 1;
    }
}
