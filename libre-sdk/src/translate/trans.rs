use super::types_rs::*;
use super::{Client, Error, append_api_key, translate_params};
use libre_sdk_common::helper::{build_request, dispatch, parse_json_response};
use reqwest::Method;
use serde::de::DeserializeOwned;

impl Client {
    /// 检测文本的语言，按服务端返回的顺序(置信度从高到低)
    pub async fn detect(&self, q: &str) -> Result<Vec<Detection>, Error> {
        let params = append_api_key(vec![("q", q)], self.api_key.as_deref());
        self.request(Method::POST, "/detect", &params).await
    }

    /// 获取支持的语言列表
    pub async fn languages(&self) -> Result<Vec<Language>, Error> {
        let params = append_api_key(Vec::new(), self.api_key.as_deref());
        self.request(Method::GET, "/languages", &params).await
    }

    /// 翻译文本，只返回翻译后的文本
    ///
    /// `source`为[`AUTO_DETECT`]时由服务端检测源语言
    #[tracing::instrument(level = "debug", skip(self, q))]
    pub async fn translate(&self, q: &str, source: &str, target: &str) -> Result<String, Error> {
        let params = translate_params(q, source, target, None, self.api_key.as_deref());
        let res: TranslateResult = self.request(Method::POST, "/translate", &params).await?;
        Ok(res.translated_text)
    }

    /// 同[`Client::translate`]，但是返回完整的结果，包括检测到的语言
    #[tracing::instrument(level = "debug", skip(self, q))]
    pub async fn translate_detailed(
        &self,
        q: &str,
        source: &str,
        target: &str,
        format: Option<TextFormat>,
    ) -> Result<TranslateResult, Error> {
        let params = translate_params(q, source, target, format, self.api_key.as_deref());
        self.request(Method::POST, "/translate", &params).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, Error> {
        let req = build_request(&self.http_client, &self.base_url, method, endpoint, params)?;
        let resp = dispatch(&self.http_client, req).await?;
        parse_json_response(resp).await
    }
}
