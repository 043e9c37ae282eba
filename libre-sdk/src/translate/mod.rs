//! LibreTranslate 文本翻译、语言检测

use bon::bon;

pub use libre_sdk_common::Error;

#[cfg(feature = "blocking")]
pub mod blocking;

mod trans;
mod types_rs;
pub use types_rs::*;

/// 官方实例的地址
pub const DEFAULT_BASE_URL: &str = "https://libretranslate.com";

/// 异步client，可以在多个task之间共享(`&Client`或者`Arc<Client>`)
///
/// ```no_run
/// # async fn run() -> Result<(), libre_sdk::translate::Error> {
/// use libre_sdk::translate::Client;
///
/// let client = Client::builder()
///     .base_url("http://localhost:5000")
///     .api_key("xxx")
///     .build();
/// let text = client.translate("Hello", "en", "fr").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    base_url: String,
    api_key: Option<String>,
    http_client: reqwest::Client,
}

#[bon]
impl Client {
    /// `http_client`可以传入共享的`reqwest::Client`，不传时新建一个
    #[builder(on(String, into))]
    pub fn new(
        #[builder(default = DEFAULT_BASE_URL.to_owned())] base_url: String,
        api_key: Option<String>,
        #[builder(default)] http_client: reqwest::Client,
    ) -> Self {
        Self {
            base_url,
            api_key,
            http_client,
        }
    }

    /// 使用[`DEFAULT_BASE_URL`]和`api_key`
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::builder().base_url(base_url).api_key(api_key).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish_non_exhaustive()
    }
}

/// 使用[`DEFAULT_BASE_URL`]，不带`api_key`
impl Default for Client {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// 有`api_key`时追加到参数最后
pub(crate) fn append_api_key<'a>(
    mut params: Vec<(&'a str, &'a str)>,
    api_key: Option<&'a str>,
) -> Vec<(&'a str, &'a str)> {
    if let Some(key) = api_key {
        params.push(("api_key", key));
    }
    params
}

/// `/translate`的参数，`format`为`None`时不发送
pub(crate) fn translate_params<'a>(
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: Option<TextFormat>,
    api_key: Option<&'a str>,
) -> Vec<(&'a str, &'a str)> {
    let mut params = vec![("q", q), ("source", source), ("target", target)];
    if let Some(format) = format {
        params.push(("format", format.as_str()));
    }
    append_api_key(params, api_key)
}
