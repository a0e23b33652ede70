use crate::*;

impl Vimeo {
    /// The link is already signed, so no API credentials are attached.
    fn upload_request(&self, link: &str, bytes: Vec<u8>, content_type: &str) -> reqwest::RequestBuilder {
        self.client
            .put(link)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
    }

    /// PUT the raw image to a one-time upload link.
    pub async fn upload_picture(
        &self,
        link: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), VimeoError> {
        let size = bytes.len().to_string();
        let log_params = LogParams::new(
            "PUT",
            link,
            &[("content_type", content_type), ("bytes", size.as_str())],
        );
        debug!("{}", log_params);
        let response = self.upload_request(link, bytes, content_type).send().await?;
        let status = response.status();
        let mut log_params = log_params;
        log_params.status = Some(status.as_u16());
        debug!("{}", log_params);
        if status.is_success() {
            Ok(())
        } else {
            Err(VimeoError::UploadRejected(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::tests::api;

    #[test]
    fn test_upload_request() -> Result<(), VimeoError> {
        let request = api()
            .upload_request("https://x/up?sig=abc", b"jpeg".to_vec(), "image/jpeg")
            .build()?;
        assert_eq!(request.method(), reqwest::Method::PUT);
        assert_eq!(request.url().as_str(), "https://x/up?sig=abc");
        assert_eq!(
            request.headers()[reqwest::header::CONTENT_TYPE],
            "image/jpeg"
        );
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
        assert!(request.headers().get(reqwest::header::ACCEPT).is_none());
        assert_eq!(
            request.body().and_then(|body| body.as_bytes()),
            Some(&b"jpeg"[..])
        );
        Ok(())
    }
}
