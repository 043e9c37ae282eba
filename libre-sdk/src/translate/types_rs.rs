use serde::Deserialize;

/// 自动检测源语言时使用的语言代码
pub const AUTO_DETECT: &str = "auto";

// region    --- detect
/// 语言检测结果
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Detection {
    /// 置信度，服务端给的原值
    pub confidence: f64,
    /// 语言代码, eg: `en`
    pub language: String,
}
// endregion --- detect

// region    --- languages
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Language {
    pub code: String,
    /// 英文的语言名称
    pub name: String,
    /// 可以翻译成的目标语言代码，部分服务端不返回
    #[serde(default)]
    pub targets: Vec<String>,
}
// endregion --- languages

// region    --- translate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Text,
    Html,
}

impl TextFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextFormat::Text => "text",
            TextFormat::Html => "html",
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    pub translated_text: String,
    /// 只有source为`auto`时才有
    pub detected_language: Option<Detection>,
    #[serde(default)]
    pub alternatives: Vec<String>,
}
// endregion --- translate
