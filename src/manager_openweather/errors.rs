use thiserror::Error;

#[derive(Error, Debug)]
#[error("error in communication with OpenWeatherMap: {0}")]
pub struct OwmError(pub String);
impl From<serde_json::Error> for OwmError {
    fn from(e: serde_json::Error) -> OwmError {
        OwmError(format!("json document error: {}", e.to_string()))
    }
}
impl From<ureq::Error> for OwmError {
    fn from(e: ureq::Error) -> OwmError {
        OwmError(format!("http request error: {}", e.to_string()))
    }
}
