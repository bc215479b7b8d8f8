pub mod handlers;

use axum::Router;
use axum::routing::get;
use handlers::{emotion_detector, render_index_page};
use lib::service::CommonService;


pub fn build_app(service: CommonService) -> Router {
    Router::new()
        .route("/", get(render_index_page))
        .route("/emotionDetector", get(emotion_detector))
        .with_state(service)
}
