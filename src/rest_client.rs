use std::future::Future;
use std::time::Instant;

use tracing::log;

use crate::error::StatsError;

/// Supplies the raw career page for a profile path such as `/pc/Kraken-1234`.
pub trait Fetcher {
    fn fetch(&self, profile_path: &str) -> impl Future<Output = Result<Vec<u8>, StatsError>> + Send;
}

#[derive(Clone)]
pub struct RestFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl RestFetcher {
    pub fn new(base_url: &str) -> Result<RestFetcher, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ovrstat-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(RestFetcher { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn get_url(&self, profile_path: &str) -> String {
        format!("{}{profile_path}", self.base_url)
    }
}

impl Fetcher for RestFetcher {
    fn fetch(
        &self,
        profile_path: &str,
    ) -> impl Future<Output = Result<Vec<u8>, StatsError>> + Send {
        let url = self.get_url(profile_path);
        let client = &self.client;
        async move {
            let before = Instant::now();
            let rsp = client.get(&url).send().await?;
            let status = rsp.status();
            if !status.is_success() {
                log::error!("[REST] Call {url} returned {status}");
                return Err(StatsError::FetchStatus(status));
            }
            let body = rsp.bytes().await?;
            log::info!("[REST] Call {url} {:.2?}", before.elapsed());
            Ok(body.to_vec())
        }
    }
}
