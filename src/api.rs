use crate::error::VimeoError;
use crate::models::{FolderRef, Page, PictureResource, VideoRef};
use crate::Vimeo;
use async_trait::async_trait;

/// The remote calls the thumbnail flows depend on.
#[async_trait]
pub trait VimeoApi: Send + Sync {
    async fn list_videos(&self, page: usize, per_page: usize)
        -> Result<Page<VideoRef>, VimeoError>;

    async fn list_folders(&self, page: usize, per_page: usize)
        -> Result<Page<FolderRef>, VimeoError>;

    async fn list_folder_videos(
        &self,
        folder_id: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Page<VideoRef>, VimeoError>;

    async fn get_picture_connection(&self, video_id: &str) -> Result<String, VimeoError>;

    async fn create_picture(&self, pictures_uri: &str) -> Result<PictureResource, VimeoError>;

    async fn upload_picture(
        &self,
        link: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), VimeoError>;

    async fn activate_picture(&self, picture_uri: &str) -> Result<(), VimeoError>;
}

#[async_trait]
impl VimeoApi for Vimeo {
    async fn list_videos(
        &self,
        page: usize,
        per_page: usize,
    ) -> Result<Page<VideoRef>, VimeoError> {
        Vimeo::list_videos(self, page, per_page).await
    }

    async fn list_folders(
        &self,
        page: usize,
        per_page: usize,
    ) -> Result<Page<FolderRef>, VimeoError> {
        Vimeo::list_folders(self, page, per_page).await
    }

    async fn list_folder_videos(
        &self,
        folder_id: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Page<VideoRef>, VimeoError> {
        Vimeo::list_folder_videos(self, folder_id, page, per_page).await
    }

    async fn get_picture_connection(&self, video_id: &str) -> Result<String, VimeoError> {
        Vimeo::get_picture_connection(self, video_id).await
    }

    async fn create_picture(&self, pictures_uri: &str) -> Result<PictureResource, VimeoError> {
        Vimeo::create_picture(self, pictures_uri).await
    }

    async fn upload_picture(
        &self,
        link: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), VimeoError> {
        Vimeo::upload_picture(self, link, bytes, content_type).await
    }

    async fn activate_picture(&self, picture_uri: &str) -> Result<(), VimeoError> {
        Vimeo::activate_picture(self, picture_uri).await.map(|_| ())
    }
}
