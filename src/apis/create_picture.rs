use crate::models::PictureResource;
use crate::*;

impl Vimeo {
    pub async fn create_picture(&self, pictures_uri: &str) -> Result<PictureResource, VimeoError> {
        let path = self.make_path(pictures_uri);
        let log_params = LogParams::new("POST", &path, &[]);
        let res = execute(self.request(reqwest::Method::POST, &path), log_params).await?;
        picture_from_response(res)
    }
}

fn picture_from_response(res: serde_json::Value) -> Result<PictureResource, VimeoError> {
    if !res["uri"].is_string() {
        return Err(VimeoError::UnExpected(res));
    }
    let mut picture: PictureResource = serde_json::from_value(res.clone())?;
    picture.body = res;
    Ok(picture)
}
