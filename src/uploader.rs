use crate::api::VimeoApi;
use crate::error::VimeoError;
use crate::models::{PictureResource, PictureState, VideoRef};
use std::path::Path;

/// How the pictures collection of a video is located before a picture is
/// created in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureStrategy {
    /// POST straight to `{video uri}/pictures`.
    Direct,
    /// Ask the video for its `metadata.connections.pictures.uri` first.
    Connection,
}

/// Content type sent with the image bytes, picked from the file extension.
pub fn content_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        _ => "image/jpeg",
    }
}

pub struct Uploader<'a, A: VimeoApi + ?Sized> {
    api: &'a A,
    strategy: PictureStrategy,
}

impl<'a, A: VimeoApi + ?Sized> Uploader<'a, A> {
    pub fn new(api: &'a A, strategy: PictureStrategy) -> Self {
        Self { api, strategy }
    }

    async fn pictures_uri(&self, video: &VideoRef) -> Result<String, VimeoError> {
        match self.strategy {
            PictureStrategy::Direct => {
                Ok(format!("{}/pictures", video.uri.trim_end_matches('/')))
            }
            PictureStrategy::Connection => self.api.get_picture_connection(video.id()).await,
        }
    }

    /// Replace the thumbnail of `video` with the image at `image_path`.
    ///
    /// A picture created on the server stays there inactive if a later
    /// step fails. Returns the uri of the activated picture.
    pub async fn upload(&self, video: &VideoRef, image_path: &Path) -> Result<String, VimeoError> {
        let pictures_uri = self.pictures_uri(video).await?;
        let picture = self.api.create_picture(&pictures_uri).await?;
        let link = match &picture.link {
            Some(link) => link.clone(),
            None => return Err(missing_link(&picture)),
        };
        self.log_state(video, &picture, PictureState::Created);

        let bytes = tokio::fs::read(image_path).await?;
        self.api
            .upload_picture(&link, bytes, content_type(image_path))
            .await?;
        self.log_state(video, &picture, PictureState::Uploaded);

        self.api.activate_picture(&picture.uri).await?;
        self.log_state(video, &picture, PictureState::Active);
        Ok(picture.uri)
    }

    fn log_state(&self, video: &VideoRef, picture: &PictureResource, state: PictureState) {
        debug!("video {} picture {} {}", video.id(), picture.uri, state);
        if let Some(message) = state.progress_message() {
            info!("{}", message);
        }
    }
}

/// Carries the create response as the server sent it.
fn missing_link(picture: &PictureResource) -> VimeoError {
    let body = if picture.body.is_null() {
        json!({ "uri": picture.uri })
    } else {
        picture.body.clone()
    };
    VimeoError::MissingUploadLink(body)
}
