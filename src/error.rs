use std::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "user store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Error type for request handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A required field is missing. Carries the message sent to the caller.
    Validation(&'static str),
    /// No user with the requested id.
    NotFound,
    /// No route matched the request.
    RouteNotFound,
    /// The request body is not valid JSON.
    MalformedBody(String),
    /// Anything else. Detail is logged, never sent.
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "validation failed: {}", msg),
            ApiError::NotFound => write!(f, "user not found"),
            ApiError::RouteNotFound => write!(f, "route not found"),
            ApiError::MalformedBody(detail) => write!(f, "malformed JSON body: {}", detail),
            ApiError::Internal(detail) => write!(f, "internal error: {}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl ApiError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::NotFound => 404,
            ApiError::RouteNotFound => 404,
            ApiError::MalformedBody(_) => 400,
            ApiError::Internal(_) => 500,
        }
    }

    /// The `error` string returned to the caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::Validation(msg) => *msg,
            ApiError::NotFound => "user not found",
            ApiError::RouteNotFound => "Route not found",
            ApiError::MalformedBody(_) => "Invalid JSON body",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

/// Fatal errors from binding the listening socket or running the server.
#[derive(Debug)]
pub enum StartupError {
    /// Every attempted port was in use.
    AddressInUse { port: u16, retries: u32 },
    /// The next port to try would exceed `u16::MAX`.
    PortOverflow { port: u16 },
    /// Any bind error other than address-in-use.
    Bind { port: u16, source: io::Error },
    /// The server stopped with an I/O error after binding.
    Serve(io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::AddressInUse { port, retries } => write!(
                f,
                "port {} in use and no retries left ({} retries used)",
                port, retries
            ),
            StartupError::PortOverflow { port } => {
                write!(f, "port {} in use and no higher port to try", port)
            }
            StartupError::Bind { port, source } => {
                write!(f, "failed to bind port {}: {}", port, source)
            }
            StartupError::Serve(source) => write!(f, "server error: {}", source),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Bind { source, .. } => Some(source),
            StartupError::Serve(source) => Some(source),
            _ => None,
        }
    }
}
