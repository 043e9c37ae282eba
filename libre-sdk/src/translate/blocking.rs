//! 同步client，接口和[`super::Client`]一致

use super::types_rs::*;
use super::{DEFAULT_BASE_URL, Error, append_api_key, translate_params};
use bon::bon;
use libre_sdk_common::blocking::{build_request, dispatch, parse_json_response};
use reqwest::Method;
use serde::de::DeserializeOwned;

/// 注意：`reqwest::blocking::Client`不能在异步运行时中创建或drop
#[derive(Clone)]
pub struct Client {
    base_url: String,
    api_key: Option<String>,
    http_client: reqwest::blocking::Client,
}

#[bon]
impl Client {
    #[builder(on(String, into))]
    pub fn new(
        #[builder(default = DEFAULT_BASE_URL.to_owned())] base_url: String,
        api_key: Option<String>,
        #[builder(default)] http_client: reqwest::blocking::Client,
    ) -> Self {
        Self {
            base_url,
            api_key,
            http_client,
        }
    }

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

impl Client {
    pub fn detect(&self, q: &str) -> Result<Vec<Detection>, Error> {
        let params = append_api_key(vec![("q", q)], self.api_key.as_deref());
        self.request(Method::POST, "/detect", &params)
    }

    pub fn languages(&self) -> Result<Vec<Language>, Error> {
        let params = append_api_key(Vec::new(), self.api_key.as_deref());
        self.request(Method::GET, "/languages", &params)
    }

    #[tracing::instrument(level = "debug", skip(self, q))]
    pub fn translate(&self, q: &str, source: &str, target: &str) -> Result<String, Error> {
        let params = translate_params(q, source, target, None, self.api_key.as_deref());
        let res: TranslateResult = self.request(Method::POST, "/translate", &params)?;
        Ok(res.translated_text)
    }

    #[tracing::instrument(level = "debug", skip(self, q))]
    pub fn translate_detailed(
        &self,
        q: &str,
        source: &str,
        target: &str,
        format: Option<TextFormat>,
    ) -> Result<TranslateResult, Error> {
        let params = translate_params(q, source, target, format, self.api_key.as_deref());
        self.request(Method::POST, "/translate", &params)
    }

    fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, Error> {
        let req = build_request(&self.http_client, &self.base_url, method, endpoint, params)?;
        let resp = dispatch(&self.http_client, req)?;
        parse_json_response(resp)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::builder().build()
    }
}
