use gotham::helpers::http::response::create_response;
use gotham::state::State;
use hyper::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid settings: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Error rendering page")]
    Render(#[source] std::io::Error),
    #[error("Error reading request body")]
    Body(#[source] hyper::Error),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    pub fn as_response(&self, state: &State) -> http::Response<hyper::Body> {
        create_response(
            state,
            self.status_code(),
            mime::TEXT_PLAIN_UTF_8,
            format!("Error: {}", self),
        )
    }

    fn status_code(&self) -> StatusCode {
        use Error::*;
        match self {
            NotFound(..) => StatusCode::NOT_FOUND,
            Config(..) | Render(..) | Body(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
