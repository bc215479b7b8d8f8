pub static SERVER_ADDR: &str = "SERVER_ADDR";
pub static EMOTION_ENDPOINT: &str = "EMOTION_ENDPOINT";
