use blog_core::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `blog-client`.
pub enum BlogClientError {
    /// Ошибка HTTP-транспорта (`reqwest`): соединение, таймаут, обрыв.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Сервер ответил статусом, отличным от 2xx.
    #[error("unexpected http status: {0}")]
    Status(reqwest::StatusCode),

    /// Тело ответа не является массивом статей.
    #[error("decode error: {0}")]
    Decode(String),

    /// Не удалось собрать HTTP-клиент.
    #[error("client setup error: {0}")]
    Setup(String),
}

/// Результат операций `blog-client`.
pub type BlogClientResult<T> = Result<T, BlogClientError>;

impl BlogClientError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Status(status);
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Http(err)
    }
}

impl From<BlogClientError> for SourceError {
    fn from(err: BlogClientError) -> Self {
        match err {
            BlogClientError::Status(status) => SourceError::Status(status.as_u16()),
            BlogClientError::Decode(message) => SourceError::Decode(message),
            BlogClientError::Http(err) => SourceError::Transport(err.to_string()),
            BlogClientError::Setup(message) => SourceError::Transport(message),
        }
    }
}
