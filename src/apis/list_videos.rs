use crate::models::{Page, VideoRef};
use crate::*;

impl Vimeo {
    pub(crate) fn list_videos_request(&self, path: &str, page: usize, per_page: usize) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::GET, path).query(&[
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
            ("fields", apis::VIDEO_FIELDS.to_owned()),
        ])
    }

    pub async fn list_videos(
        &self,
        page: usize,
        per_page: usize,
    ) -> Result<Page<VideoRef>, VimeoError> {
        let path = self.make_path("/me/videos");
        let log_params = LogParams::new(
            "GET",
            &path,
            &[("page", page.to_string().as_str()), ("per_page", per_page.to_string().as_str())],
        );
        let json = execute(self.list_videos_request(&path, page, per_page), log_params).await?;
        Ok(serde_json::from_value(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::tests::{api, pairs, query};

    #[test]
    fn test_list_videos_request() -> Result<(), VimeoError> {
        let api = api();
        let request = api
            .list_videos_request(&api.make_path("/me/videos"), 2, 50)
            .build()?;
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().path(), "/me/videos");
        assert_eq!(
            query(&request),
            pairs(&[("page", "2"), ("per_page", "50"), ("fields", "uri,name")])
        );
        Ok(())
    }
}
