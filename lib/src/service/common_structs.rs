use serde::{Deserialize, Serialize};


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmotionResult {
    pub anger: Option<f64>,
    pub disgust: Option<f64>,
    pub fear: Option<f64>,
    pub joy: Option<f64>,
    pub sadness: Option<f64>,
    pub dominant_emotion: Option<String>,
}

impl EmotionResult {
    // blank-input signal: the upstream classifier rejected the document
    pub fn blank() -> Self {
        Self {
            anger: None,
            disgust: None,
            fear: None,
            joy: None,
            sadness: None,
            dominant_emotion: None,
        }
    }
}
