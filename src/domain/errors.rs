use derive_more::{Display, From};

/// Root error of one refresh cycle
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum DashboardError {
    #[display(fmt = "Fetch error: {}", _0)]
    Fetch(FetchError),
    #[display(fmt = "Decode error: {}", _0)]
    Decode(DecodeError),
    #[display(fmt = "Render error: {}", _0)]
    Render(RenderError),
}

/// Transport-level failure while retrieving the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FetchError {
    #[display(fmt = "request failed: {}", _0)]
    Transport(String),
    #[display(fmt = "HTTP {} {}", code, text)]
    Status { code: u16, text: String },
    #[display(fmt = "failed to read body: {}", _0)]
    Body(String),
}

/// Payload is not a well-formed snapshot
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{} (line {}, column {})", message, line, column)]
pub struct DecodeError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        Self { message: error.to_string(), line: error.line(), column: error.column() }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(error: serde_json::Error) -> Self {
        DashboardError::Decode(error.into())
    }
}

/// Renderer rejected a chart or a series never reached it
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RenderError {
    #[display(fmt = "container '{}' not found", _0)]
    ContainerNotFound(String),
    #[display(fmt = "failed to bind renderer: {}", _0)]
    Bind(String),
    #[display(fmt = "renderer rejected option: {}", _0)]
    Rejected(String),
    #[display(
        fmt = "series length mismatch: {} labels, {} primary, {} reference",
        labels,
        primary,
        reference
    )]
    LengthMismatch { labels: usize, primary: usize, reference: usize },
    #[display(fmt = "{} chart cannot render this series shape", kind)]
    SeriesMismatch { kind: &'static str },
}

impl std::error::Error for DashboardError {}
impl std::error::Error for FetchError {}
impl std::error::Error for DecodeError {}
impl std::error::Error for RenderError {}

pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_failure_maps_to_decode_with_position() {
        let err = serde_json::from_str::<Vec<u32>>("[1, \"x\"]").unwrap_err();
        let err: DashboardError = err.into();
        match err {
            DashboardError::Decode(decode) => {
                assert_eq!(decode.line, 1);
                assert!(decode.column > 0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn status_error_display() {
        let err = DashboardError::from(FetchError::Status { code: 404, text: "Not Found".into() });
        assert_eq!(err.to_string(), "Fetch error: HTTP 404 Not Found");
    }
}
