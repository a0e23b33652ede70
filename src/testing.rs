//! Recording stand-in for the remote API used by the unit tests.

use crate::api::VimeoApi;
use crate::error::VimeoError;
use crate::models::{FolderRef, Page, Paging, PictureResource, VideoRef};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListVideos(usize, usize),
    ListFolders(usize),
    ListFolderVideos(String, usize),
    GetPictureConnection(String),
    CreatePicture(String),
    UploadPicture(String, Vec<u8>, String),
    ActivatePicture(String),
}

impl Call {
    pub fn is_picture_call(&self) -> bool {
        matches!(
            self,
            Call::GetPictureConnection(_)
                | Call::CreatePicture(_)
                | Call::UploadPicture(..)
                | Call::ActivatePicture(_)
        )
    }
}

#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    video_pages: Vec<Vec<VideoRef>>,
    folder_pages: Vec<Vec<FolderRef>>,
    folder_video_pages: Vec<Vec<VideoRef>>,
    picture: Option<PictureResource>,
    rejected_links: Vec<String>,
    fail_listing: bool,
    fail_activation: bool,
}

fn videos(ids: Vec<&str>) -> Vec<VideoRef> {
    ids.into_iter()
        .map(|id| VideoRef {
            uri: format!("/videos/{}", id),
            name: format!("video {}", id),
        })
        .collect()
}

fn page_of<T: Clone>(pages: &[Vec<T>], page: usize) -> Page<T> {
    let data = pages.get(page - 1).cloned().unwrap_or_default();
    let next = if page < pages.len() {
        Some(format!("?page={}", page + 1))
    } else {
        None
    };
    Page {
        data,
        paging: Some(Paging { next }),
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_video_pages(mut self, pages: Vec<Vec<&str>>) -> Self {
        self.video_pages = pages.into_iter().map(videos).collect();
        self
    }

    pub fn with_folder_video_pages(mut self, pages: Vec<Vec<&str>>) -> Self {
        self.folder_video_pages = pages.into_iter().map(videos).collect();
        self
    }

    /// Folders get sequential ids starting at 1 across all pages.
    pub fn with_folder_pages(mut self, pages: Vec<Vec<&str>>) -> Self {
        let mut id = 0;
        self.folder_pages = pages
            .into_iter()
            .map(|names| {
                names
                    .into_iter()
                    .map(|name| {
                        id += 1;
                        FolderRef {
                            uri: format!("/users/1/projects/{}", id),
                            name: name.to_owned(),
                        }
                    })
                    .collect()
            })
            .collect();
        self
    }

    pub fn with_picture(mut self, picture: PictureResource) -> Self {
        self.picture = Some(picture);
        self
    }

    pub fn rejecting_upload(mut self, link: &str) -> Self {
        self.rejected_links.push(link.to_owned());
        self
    }

    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub fn failing_activation(mut self) -> Self {
        self.fail_activation = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn picture_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(Call::is_picture_call)
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn listing_error(&self) -> Result<(), VimeoError> {
        if self.fail_listing {
            Err(VimeoError::Unauthorized(
                401,
                json!({"error": "You must provide a valid authenticated access token."}),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl VimeoApi for FakeApi {
    async fn list_videos(
        &self,
        page: usize,
        per_page: usize,
    ) -> Result<Page<VideoRef>, VimeoError> {
        self.record(Call::ListVideos(page, per_page));
        self.listing_error()?;
        Ok(page_of(&self.video_pages, page))
    }

    async fn list_folders(
        &self,
        page: usize,
        _per_page: usize,
    ) -> Result<Page<FolderRef>, VimeoError> {
        self.record(Call::ListFolders(page));
        self.listing_error()?;
        Ok(page_of(&self.folder_pages, page))
    }

    async fn list_folder_videos(
        &self,
        folder_id: &str,
        page: usize,
        _per_page: usize,
    ) -> Result<Page<VideoRef>, VimeoError> {
        self.record(Call::ListFolderVideos(folder_id.to_owned(), page));
        self.listing_error()?;
        Ok(page_of(&self.folder_video_pages, page))
    }

    async fn get_picture_connection(&self, video_id: &str) -> Result<String, VimeoError> {
        self.record(Call::GetPictureConnection(video_id.to_owned()));
        Ok(format!("/videos/{}/pictures", video_id))
    }

    async fn create_picture(&self, pictures_uri: &str) -> Result<PictureResource, VimeoError> {
        self.record(Call::CreatePicture(pictures_uri.to_owned()));
        if let Some(picture) = &self.picture {
            return Ok(picture.clone());
        }
        let video_id = pictures_uri.trim_end_matches("/pictures");
        let video_id = crate::models::last_segment(video_id);
        let uri = format!("{}/99", pictures_uri);
        let link = format!("https://x/up/{}", video_id);
        Ok(PictureResource {
            body: json!({ "uri": uri, "link": link }),
            uri,
            link: Some(link),
        })
    }

    async fn upload_picture(
        &self,
        link: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), VimeoError> {
        self.record(Call::UploadPicture(
            link.to_owned(),
            bytes,
            content_type.to_owned(),
        ));
        if self.rejected_links.iter().any(|l| l == link) {
            Err(VimeoError::UploadRejected(500))
        } else {
            Ok(())
        }
    }

    async fn activate_picture(&self, picture_uri: &str) -> Result<(), VimeoError> {
        self.record(Call::ActivatePicture(picture_uri.to_owned()));
        if self.fail_activation {
            Err(VimeoError::Vimeo(400, json!({"error": "Invalid picture"})))
        } else {
            Ok(())
        }
    }
}
