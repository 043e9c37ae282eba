//! 同步版本的请求helper，行为和[`crate::helper`]一致

use crate::Error;
use crate::helper::{into_api_error, join_endpoint, params_in_query};
use reqwest::{Method, StatusCode};

pub fn build_request(
    http_client: &reqwest::blocking::Client,
    base_url: &str,
    method: Method,
    endpoint: &str,
    params: &[(&str, &str)],
) -> Result<reqwest::blocking::Request, Error> {
    let url = join_endpoint(base_url, endpoint)?;

    let mut req = http_client.request(method.clone(), url);
    if params_in_query(&method) {
        if !params.is_empty() {
            req = req.query(params);
        }
    } else {
        req = req.form(params);
    }

    req.build().map_err(Error::BuildRequest)
}

pub fn dispatch(
    http_client: &reqwest::blocking::Client,
    req: reqwest::blocking::Request,
) -> Result<reqwest::blocking::Response, Error> {
    tracing::debug!(method = %req.method(), path = req.url().path(), "dispatching request");
    let resp = http_client.execute(req)?;
    check_response(resp)
}

pub fn check_response(
    resp: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, Error> {
    let status = resp.status();
    if status == StatusCode::OK {
        return Ok(resp);
    }

    let body = resp.bytes().unwrap_or_default();
    Err(into_api_error(status, &body))
}

pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::blocking::Response,
) -> Result<T, Error> {
    let bytes = resp.bytes()?;
    let data = serde_json::from_slice(&bytes)?;
    Ok(data)
}
