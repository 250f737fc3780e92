//! Authorization error types.

/// Specific error conditions for access gating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthorizationErrorKind {
    /// The caller's tier does not include the requested mode.
    ///
    /// This is the upgrade-required signal: the front door maps it to
    /// HTTP 402 so clients can render an upsell instead of a failure.
    UpgradeRequired {
        /// Subscription tier of the caller
        tier: String,
        /// Mode the caller attempted to invoke
        mode: String,
    },
}

impl std::fmt::Display for AuthorizationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthorizationErrorKind::UpgradeRequired { tier, mode } => write!(
                f,
                "Tier '{}' does not include mode '{}'; upgrade required",
                tier, mode
            ),
        }
    }
}

/// Error type for access gate failures.
///
/// # Examples
///
/// ```
/// use muse_error::{AuthorizationError, AuthorizationErrorKind};
///
/// let err = AuthorizationError::new(AuthorizationErrorKind::UpgradeRequired {
///     tier: "novice".to_string(),
///     mode: "video".to_string(),
/// });
/// assert!(format!("{}", err).contains("upgrade required"));
/// ```
#[derive(Debug, Clone)]
pub struct AuthorizationError {
    /// The specific error condition
    pub kind: AuthorizationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl AuthorizationError {
    /// Create a new AuthorizationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AuthorizationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for AuthorizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Authorization Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for AuthorizationError {}
