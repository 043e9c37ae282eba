#![cfg(feature = "blocking")]

use libre_sdk::translate::blocking::Client;
use libre_sdk::translate::{Error, TextFormat};
use reqwest::StatusCode;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn json(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_owned(), "application/json")
}

// blocking client不能在异步上下文中使用，放到spawn_blocking里
async fn run_blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn detect_test() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/detect"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("q=Hello&api_key=secret"))
        .respond_with(json(200, r#"[{"confidence":0.9,"language":"en"}]"#))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let res = run_blocking(move || Client::with_base_url(uri, "secret").detect("Hello"))
        .await
        .unwrap();
    assert_eq!(res.len(), 1);
    assert_eq!(res[0].confidence, 0.9);
    assert_eq!(res[0].language, "en");
}

#[tokio::test(flavor = "multi_thread")]
async fn languages_and_translate_test() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/languages"))
        .respond_with(json(
            200,
            r#"[{"code":"en","name":"English"},{"code":"fr","name":"French"}]"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_string("q=Hello&source=en&target=fr&format=text"))
        .respond_with(json(200, r#"{"translatedText":"Bonjour","alternatives":["Salut"]}"#))
        .mount(&server)
        .await;

    let uri = server.uri();
    let (languages, translated) = run_blocking(move || {
        let client = Client::builder().base_url(uri).build();
        let languages = client.languages().unwrap();
        let translated = client
            .translate_detailed("Hello", "en", "fr", Some(TextFormat::Text))
            .unwrap();
        (languages, translated)
    })
    .await;

    let codes: Vec<_> = languages.iter().map(|l| (l.code.as_str(), l.name.as_str())).collect();
    assert_eq!(codes, [("en", "English"), ("fr", "French")]);
    assert_eq!(translated.translated_text, "Bonjour");
    assert_eq!(translated.alternatives, ["Salut"]);
    assert!(translated.detected_language.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn api_error_test() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(json(403, r#"{"error":"invalid api key"}"#))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/detect"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let uri = server.uri();
    let (translate_err, detect_err) = run_blocking(move || {
        let client = Client::with_base_url(uri, "wrong");
        (
            client.translate("Hello", "en", "fr").unwrap_err(),
            client.detect("Hello").unwrap_err(),
        )
    })
    .await;

    match translate_err {
        Error::RequestAPIFailed { status, message } => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(message, "invalid api key");
        }
        e => panic!("unexpected error: {e:?}"),
    }
    assert!(matches!(
        detect_err,
        Error::UndecodableAPIError { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
}
