use crate::models::{FolderRef, Page};
use crate::*;

impl Vimeo {
    fn list_folders_request(&self, path: &str, page: usize, per_page: usize) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::GET, path).query(&[
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ])
    }

    pub async fn list_folders(
        &self,
        page: usize,
        per_page: usize,
    ) -> Result<Page<FolderRef>, VimeoError> {
        let path = self.make_path("/me/projects");
        let log_params = LogParams::new(
            "GET",
            &path,
            &[("page", page.to_string().as_str()), ("per_page", per_page.to_string().as_str())],
        );
        let json = execute(self.list_folders_request(&path, page, per_page), log_params).await?;
        Ok(serde_json::from_value(json)?)
    }
}
