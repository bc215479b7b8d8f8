pub mod watson_service;
pub mod common_structs;


#[derive(Debug, Clone)]
pub struct CommonService {
    pub watson: watson_service::WatsonService,
}

impl CommonService {
    pub fn new() -> Self {
        Self {
            watson: watson_service::WatsonService::new(),
        }
    }

    pub fn with_emotion_endpoint(endpoint: &str) -> Self {
        Self {
            watson: watson_service::WatsonService::with_endpoint(endpoint),
        }
    }
}

impl Default for CommonService {
    fn default() -> Self {
        Self::new()
    }
}
