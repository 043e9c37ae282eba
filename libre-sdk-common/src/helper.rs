use crate::Error;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use url::Url;

/// 非200响应时服务端返回的错误格式: `{"error": "..."}`
#[derive(Deserialize)]
struct ApiErrorPayload {
    error: String,
}

/// 把`endpoint`拼接到`base_url`的path上，语义同POSIX的path join
///
/// eg: `https://host/api/` + `/detect` => `https://host/api/detect`
pub fn join_endpoint(base_url: &str, endpoint: &str) -> Result<Url, Error> {
    let mut url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
    }

    let mut segments: Vec<&str> = Vec::new();
    for seg in url.path().split('/').chain(endpoint.split('/')) {
        match seg {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    let path = format!("/{}", segments.join("/"));
    url.set_path(&path);

    Ok(url)
}

/// GET/HEAD把参数放到query中，其它方法把参数form编码后放到body中
pub(crate) fn params_in_query(method: &Method) -> bool {
    *method == Method::GET || *method == Method::HEAD
}

/// 构建请求，不会设置任何认证相关的header，`api_key`作为普通参数传递
pub fn build_request(
    http_client: &reqwest::Client,
    base_url: &str,
    method: Method,
    endpoint: &str,
    params: &[(&str, &str)],
) -> Result<reqwest::Request, Error> {
    let url = join_endpoint(base_url, endpoint)?;

    let mut req = http_client.request(method.clone(), url);
    if params_in_query(&method) {
        if !params.is_empty() {
            req = req.query(params);
        }
    } else {
        // form会自动设置 Content-Type: application/x-www-form-urlencoded
        req = req.form(params);
    }

    req.build().map_err(Error::BuildRequest)
}

/// 发送请求，只有状态码为200时才返回未读取的响应
pub async fn dispatch(
    http_client: &reqwest::Client,
    req: reqwest::Request,
) -> Result<reqwest::Response, Error> {
    tracing::debug!(method = %req.method(), path = req.url().path(), "dispatching request");
    let resp = http_client.execute(req).await?;
    check_response(resp).await
}

pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = resp.status();
    if status == StatusCode::OK {
        return Ok(resp);
    }

    // 读取失败就当作空body处理
    let body = resp.bytes().await.unwrap_or_default();
    Err(into_api_error(status, &body))
}

pub fn into_api_error(status: StatusCode, body: &[u8]) -> Error {
    match serde_json::from_slice::<ApiErrorPayload>(body) {
        Ok(payload) => {
            tracing::warn!(%status, message = %payload.error, "api returned an error");
            Error::RequestAPIFailed {
                status,
                message: payload.error,
            }
        }
        Err(_) => {
            tracing::warn!(%status, "api returned an error with undecodable body");
            Error::UndecodableAPIError {
                status,
                body: String::from_utf8_lossy(body).into_owned(),
            }
        }
    }
}

pub async fn parse_json_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, Error> {
    let bytes = resp.bytes().await?;
    let data = serde_json::from_slice(&bytes)?;
    Ok(data)
}
