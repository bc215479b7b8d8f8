use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use lib::service::common_structs::EmotionResult;
use lib::service::CommonService;

pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

const INDEX_PAGE: &str = include_str!("../templates/index.html");


#[derive(Debug, Deserialize)]
pub struct DetectorParams {
    #[serde(rename = "textToAnalyze")]
    pub text_to_analyze: Option<String>,
}


pub async fn emotion_detector(
    State(service): State<CommonService>,
    Query(params): Query<DetectorParams>
) -> String {
    // a missing parameter behaves like a blank document
    let text = params.text_to_analyze.unwrap_or_default();

    let result = match service.watson.detect_emotion(&text).await {
        Ok(result) => result,
        Err(error) => {
            println!("Error detecting emotion: {:?}", error);
            return INVALID_TEXT_MESSAGE.to_owned();
        },
    };

    if result.dominant_emotion.is_none() {
        return INVALID_TEXT_MESSAGE.to_owned();
    }

    format_result(&result)
}

pub async fn render_index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}


fn format_result(result: &EmotionResult) -> String {
    format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, 'fear': {}, 'joy': {} and 'sadness': {}. The dominant emotion is {}.",
        result.anger.unwrap_or(0.0),
        result.disgust.unwrap_or(0.0),
        result.fear.unwrap_or(0.0),
        result.joy.unwrap_or(0.0),
        result.sadness.unwrap_or(0.0),
        result.dominant_emotion.as_deref().unwrap_or("None"),
    )
}
