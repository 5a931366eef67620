use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not read `{path}': {error}")]
    IO {
        error: std::io::Error,
        path: PathBuf,
    },

    #[error("Could not parse `{path}': {error}")]
    Deserialize { error: String, path: PathBuf },

    #[error("Could not find {what}: {error}")]
    NotFound { what: String, error: String },
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::IO { error, .. } => error.kind() == std::io::ErrorKind::NotFound,
            Error::Deserialize { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = if self.is_not_found() {
            log::info!("{}", self);
            axum::http::StatusCode::NOT_FOUND
        } else {
            log::error!("{}", self);
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, self.to_string()).into_response()
    }
}
