use crate::*;

impl Vimeo {
    fn activate_request(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::PATCH, path)
            .query(&[("active", "true")])
    }

    /// Make an uploaded picture the video's thumbnail. The previously
    /// active picture is deactivated by the server.
    pub async fn activate_picture(&self, picture_uri: &str) -> Result<serde_json::Value, VimeoError> {
        let path = self.make_path(picture_uri);
        let log_params = LogParams::new("PATCH", &path, &[("active", "true")]);
        execute(self.activate_request(&path), log_params).await
    }
}
