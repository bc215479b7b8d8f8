use anyhow::{bail, Context, Result};
use reqwest::{header::{HeaderMap, HeaderValue, CONTENT_TYPE}, Client, StatusCode};
use serde_json::{json, Value};

use crate::env_keys::EMOTION_ENDPOINT;
use super::common_structs::EmotionResult;

const EMOTION_PREDICT_ENDPOINT: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";
const MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";

pub const NO_DOMINANT_EMOTION: &str = "no dominant emotion";

// ordered: first-listed wins ties in the arg-max
pub const EMOTION_KEYS: [&str; 5] = ["anger", "disgust", "fear", "joy", "sadness"];


#[derive(Debug, Clone)]
pub struct WatsonService {
    client: Client,
    headers: HeaderMap,
    endpoint: String,
}

impl WatsonService {
    pub fn new() -> Self {
        let endpoint = std::env::var(EMOTION_ENDPOINT).unwrap_or(EMOTION_PREDICT_ENDPOINT.to_owned());
        Self::with_endpoint(&endpoint)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(MODEL_ID_HEADER, HeaderValue::from_static(MODEL_ID));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            client: Client::new(),
            headers,
            endpoint: endpoint.to_owned(),
        }
    }

    pub async fn detect_emotion(&self, text: &str) -> Result<EmotionResult> {
        let body = json!({ "raw_document": { "text": text } });

        let response = self.client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .body(serde_json::to_string(&body)?)
            .send()
            .await?;

        // the classifier answers 400 for blank documents
        if response.status() == StatusCode::BAD_REQUEST {
            return Ok(EmotionResult::blank());
        }
        if !response.status().is_success() {
            bail!("emotion endpoint returned status {}", response.status());
        }

        let body_string = response.text().await?;
        println!("response_body: {}", body_string);
        let body = serde_json::from_str::<Value>(&body_string)?;

        normalize_predictions(&body)
    }
}

pub fn normalize_predictions(body: &Value) -> Result<EmotionResult> {
    let predictions = body
        .get("emotionPredictions")
        .and_then(Value::as_array)
        .context("unable to get emotionPredictions")?;

    if predictions.is_empty() {
        bail!("empty emotionPredictions");
    }

    // aggregated models put a per-emotion map on the first span prediction;
    // other workflows return one {emotion, confidence} entry per prediction
    let first = &predictions[0];
    let emotion_map = first
        .get("emotions")
        .or_else(|| first.get("emotion"))
        .filter(|value| value.is_object());

    let scores: Vec<f64> = match emotion_map {
        Some(map) => EMOTION_KEYS
            .iter()
            .map(|key| map.get(key).and_then(Value::as_f64).unwrap_or(0.0))
            .collect(),
        None => {
            let mut scores = vec![0.0; EMOTION_KEYS.len()];
            for prediction in predictions {
                let Some(name) = prediction.get("emotion").and_then(Value::as_str) else {
                    continue;
                };
                let confidence = prediction.get("confidence").and_then(Value::as_f64).unwrap_or(0.0);
                if let Some(index) = EMOTION_KEYS.iter().position(|key| *key == name) {
                    scores[index] = confidence;
                }
            }
            scores
        },
    };

    let mut dominant_emotion = NO_DOMINANT_EMOTION;
    let mut max_score = 0.0;
    for (key, score) in EMOTION_KEYS.iter().zip(scores.iter()) {
        if *score > max_score {
            max_score = *score;
            dominant_emotion = key;
        }
    }

    Ok(EmotionResult {
        anger: Some(scores[0]),
        disgust: Some(scores[1]),
        fear: Some(scores[2]),
        joy: Some(scores[3]),
        sadness: Some(scores[4]),
        dominant_emotion: Some(dominant_emotion.to_owned()),
    })
}
