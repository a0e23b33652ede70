use crate::*;

const PICTURE_CONNECTION_FIELDS: &'static str = "metadata.connections.pictures.uri";

impl Vimeo {
    fn picture_connection_request(&self, video_id: &str) -> reqwest::RequestBuilder {
        let path = self.make_path(&format!("/videos/{}", video_id));
        self.request(reqwest::Method::GET, &path)
            .query(&[("fields", PICTURE_CONNECTION_FIELDS)])
    }

    /// Uri of the video's pictures collection, as advertised by the video
    /// itself.
    pub async fn get_picture_connection(&self, video_id: &str) -> Result<String, VimeoError> {
        let path = self.make_path(&format!("/videos/{}", video_id));
        let log_params = LogParams::new("GET", &path, &[("fields", PICTURE_CONNECTION_FIELDS)]);
        let res = execute(self.picture_connection_request(video_id), log_params).await?;
        picture_connection_uri(res)
    }
}

fn picture_connection_uri(res: serde_json::Value) -> Result<String, VimeoError> {
    match res["metadata"]["connections"]["pictures"]["uri"].as_str() {
        Some(uri) => Ok(uri.to_owned()),
        None => Err(VimeoError::UnExpected(res)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::tests::{api, pairs, query};

    #[test]
    fn test_picture_connection_request() -> Result<(), VimeoError> {
        let request = api().picture_connection_request("42").build()?;
        assert_eq!(request.url().path(), "/videos/42");
        assert_eq!(
            query(&request),
            pairs(&[("fields", "metadata.connections.pictures.uri")])
        );
        Ok(())
    }

    #[test]
    fn test_picture_connection_uri() -> Result<(), VimeoError> {
        let res = json!({
            "metadata": {
                "connections": {
                    "pictures": {"uri": "/videos/42/pictures", "options": ["GET", "POST"], "total": 1}
                }
            }
        });
        assert_eq!(picture_connection_uri(res)?, "/videos/42/pictures");

        let missing = json!({"metadata": {"connections": {}}});
        match picture_connection_uri(missing.clone()) {
            Err(VimeoError::UnExpected(value)) => assert_eq!(value, missing),
            other => panic!("expected unexpected response, got {:?}", other),
        }
        Ok(())
    }
}
