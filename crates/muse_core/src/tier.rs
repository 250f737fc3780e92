//! Subscription tiers and the tier permission table.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Subscription level controlling which modes a caller may invoke.
///
/// Variants are ordered from least to most privileged; `Ord` follows
/// declaration order, so the maximum is the least-restrictive tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    /// Entry tier, the default for requests that carry no tier.
    Novice,
    /// Mid tier.
    Adept,
    /// Top tier, no mode restrictions.
    Sovereign,
}

impl Tier {
    /// Parse a tier label, returning `None` for unrecognized labels.
    ///
    /// The permissive fallback for unknown labels is a gate policy, not a
    /// parsing concern; see the access gate.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "novice" => Some(Tier::Novice),
            "adept" => Some(Tier::Adept),
            "sovereign" => Some(Tier::Sovereign),
            _ => None,
        }
    }
}

/// Tier → allowed-mode table, built once at startup and read-only thereafter.
#[derive(Debug, Clone)]
pub struct TierPermissions {
    allowed: BTreeMap<Tier, BTreeSet<&'static str>>,
}

impl TierPermissions {
    /// Build the current permission table.
    ///
    /// Novice deliberately includes "music"; tightening that grant must show
    /// up as a change here and in the test that pins it.
    pub fn current() -> Self {
        let novice: BTreeSet<&'static str> =
            ["chat", "code-generation", "analysis", "music", "tts"]
                .into_iter()
                .collect();

        let mut adept = novice.clone();
        adept.extend(["narration", "image", "img2img"]);

        let mut sovereign = adept.clone();
        sovereign.extend(["video", "upscale"]);

        let mut allowed = BTreeMap::new();
        allowed.insert(Tier::Novice, novice);
        allowed.insert(Tier::Adept, adept);
        allowed.insert(Tier::Sovereign, sovereign);
        Self { allowed }
    }

    /// Whether the given tier may invoke the given mode.
    pub fn allows(&self, tier: Tier, mode: &str) -> bool {
        self.allowed
            .get(&tier)
            .map(|modes| modes.contains(mode))
            .unwrap_or(false)
    }

    /// The least-restrictive configured tier.
    pub fn least_restrictive(&self) -> Tier {
        self.allowed
            .keys()
            .max()
            .copied()
            .unwrap_or(Tier::Sovereign)
    }

    /// The allowed-mode set for a tier.
    pub fn modes_for(&self, tier: Tier) -> Option<&BTreeSet<&'static str>> {
        self.allowed.get(&tier)
    }
}

impl Default for TierPermissions {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_tier_has_nonempty_set() {
        let table = TierPermissions::current();
        for tier in Tier::iter() {
            let modes = table.modes_for(tier).expect("tier missing from table");
            assert!(!modes.is_empty(), "{} has an empty mode set", tier);
        }
    }

    #[test]
    fn test_privilege_is_monotone() {
        // Each tier's grant set contains its predecessor's.
        let table = TierPermissions::current();
        let novice = table.modes_for(Tier::Novice).unwrap();
        let adept = table.modes_for(Tier::Adept).unwrap();
        let sovereign = table.modes_for(Tier::Sovereign).unwrap();
        assert!(novice.is_subset(adept));
        assert!(adept.is_subset(sovereign));
    }

    #[test]
    fn test_novice_includes_music() {
        // Current policy: music is granted at the entry tier. Tightening this
        // must be a reviewed change, not a silent regression.
        let table = TierPermissions::current();
        assert!(table.allows(Tier::Novice, "music"));
    }

    #[test]
    fn test_novice_excludes_video() {
        let table = TierPermissions::current();
        assert!(!table.allows(Tier::Novice, "video"));
        assert!(!table.allows(Tier::Novice, "upscale"));
    }

    #[test]
    fn test_least_restrictive_is_sovereign() {
        assert_eq!(
            TierPermissions::current().least_restrictive(),
            Tier::Sovereign
        );
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!(Tier::from_label("novice"), Some(Tier::Novice));
        assert_eq!(Tier::from_label("sovereign"), Some(Tier::Sovereign));
        assert_eq!(Tier::from_label("wizard"), None);
    }
}
