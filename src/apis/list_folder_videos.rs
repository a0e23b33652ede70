use crate::models::{Page, VideoRef};
use crate::*;

impl Vimeo {
    fn folder_videos_path(&self, folder_id: &str) -> String {
        self.make_path(&format!("/me/projects/{}/videos", folder_id))
    }

    pub async fn list_folder_videos(
        &self,
        folder_id: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Page<VideoRef>, VimeoError> {
        let path = self.folder_videos_path(folder_id);
        let log_params = LogParams::new(
            "GET",
            &path,
            &[("page", page.to_string().as_str()), ("per_page", per_page.to_string().as_str())],
        );
        let json = execute(self.list_videos_request(&path, page, per_page), log_params).await?;
        Ok(serde_json::from_value(json)?)
    }
}
