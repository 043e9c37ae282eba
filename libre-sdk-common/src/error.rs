use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("build request error: {0}")]
    BuildRequest(#[source] reqwest::Error),
    #[error("request api failed: {status}, message: {message}")]
    RequestAPIFailed { status: StatusCode, message: String },
    /// 非200响应，且响应体不是`{"error": "..."}`格式，`body`为原始响应体
    #[error("request api failed: {status}, could not decode error message")]
    UndecodableAPIError { status: StatusCode, body: String },
    #[error("decode response error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl Error {
    /// 服务端返回的状态码，只有api错误才有
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::RequestAPIFailed { status, .. } | Error::UndecodableAPIError { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        self.status().is_some()
    }
}
