//! Tier-based access gating.

use muse_core::{Tier, TierPermissions};
use muse_error::{AuthorizationError, AuthorizationErrorKind, MuseResult};
use tracing::{debug, instrument, warn};

/// Checks a caller's tier against the permission table for a mode.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    permissions: TierPermissions,
}

impl AccessGate {
    /// Create a gate over the current permission table.
    pub fn new(permissions: TierPermissions) -> Self {
        Self { permissions }
    }

    /// Check whether the tier may invoke the mode.
    ///
    /// An unrecognized tier label is treated as the least-restrictive
    /// configured tier rather than rejected. This is the documented product
    /// policy; the fallback is logged so it remains observable.
    ///
    /// # Errors
    ///
    /// Returns the upgrade-required authorization error when the tier's
    /// allowed-mode set does not contain the mode, so the front door can map
    /// it to 402 rather than a generic failure.
    #[instrument(skip(self))]
    pub fn check(&self, tier_label: &str, mode: &str) -> MuseResult<Tier> {
        let tier = match Tier::from_label(tier_label) {
            Some(tier) => tier,
            None => {
                let fallback = self.permissions.least_restrictive();
                warn!(tier_label, %fallback, "Unrecognized tier, applying permissive fallback");
                fallback
            }
        };

        if self.permissions.allows(tier, mode) {
            debug!(%tier, mode, "Access granted");
            Ok(tier)
        } else {
            debug!(%tier, mode, "Access denied");
            Err(AuthorizationError::new(AuthorizationErrorKind::UpgradeRequired {
                tier: tier.to_string(),
                mode: mode.to_string(),
            })
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muse_error::MuseErrorKind;

    #[test]
    fn test_granted_mode_passes() {
        let gate = AccessGate::default();
        assert_eq!(gate.check("novice", "chat").unwrap(), Tier::Novice);
    }

    #[test]
    fn test_denied_mode_is_authorization_error() {
        // The gate's failure must be the distinguishable upgrade signal,
        // regardless of anything else about the request.
        let gate = AccessGate::default();
        let err = gate.check("novice", "video").unwrap_err();
        assert!(matches!(err.kind(), MuseErrorKind::Authorization(_)));
    }

    #[test]
    fn test_unknown_tier_falls_back_to_least_restrictive() {
        // Current policy: an unrecognized tier is given sovereign access.
        let gate = AccessGate::default();
        assert_eq!(gate.check("archmage", "video").unwrap(), Tier::Sovereign);
    }
}
