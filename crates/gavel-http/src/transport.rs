use crate::Result;

/// Carries a GET request and hands back the raw response body.
///
/// The status code is not looked at: the Bot API answers failed calls with a
/// non-2xx status and an `"ok": false` envelope, and the envelope is what gets
/// checked.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}

#[async_trait::async_trait]
impl Transport for reqwest::Client {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        Ok(reqwest::Client::get(self, url)
            .send()
            .await?
            .bytes()
            .await?
            .to_vec())
    }
}
