//! Legacy taxonomy keys and the deserialization boundary that retires them.
//!
//! Older records used a larger subtype vocabulary. Each retired key maps either
//! to its current replacement or to `None`, meaning the field is removed.
//! Keys that are neither current nor retired are dropped with a warning.

use serde::{Deserialize, Deserializer};

use super::{
    AwarenessSubtype, AxisSubtype, FinitudeSubtype, InfinitySubtype, NecessitySubtype,
    PossibilitySubtype, StageSubtype, UnawarenessSubtype,
};

/// Retired subtype keys and their replacement (`None` = remove the field).
pub const LEGACY_SUBTYPE_KEYS: &[(&str, Option<&str>)] = &[
    // Stages
    ("demonic", None),
    ("bourgeois", Some("civic")),
    ("ironic", None),
    ("religiousness_a", Some("immanent")),
    ("religiousness_b", Some("paradoxical")),
    ("demonic_religious", None),
    // Axes
    ("narrow_prudence", Some("prudent")),
    ("lost_self", Some("conformist")),
    ("fatalism", Some("fatalist")),
    ("philistine", Some("fatalist")),
    ("determinism", Some("determinist")),
    ("fantasist", Some("combinatorial")),
    ("paralysis", Some("paralyzed")),
    ("underground", Some("paralyzed")),
];

/// Look up a retired key.
///
/// Returns `None` if the key is not retired, `Some(None)` if the field should
/// be removed, and `Some(Some(new_key))` if it was renamed.
pub fn legacy_replacement(key: &str) -> Option<Option<&'static str>> {
    LEGACY_SUBTYPE_KEYS
        .iter()
        .find(|(legacy, _)| *legacy == key)
        .map(|(_, replacement)| *replacement)
}

/// Resolve a raw key through the migration table and parse it.
pub fn resolve_key<T>(kind: &str, key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let current = match legacy_replacement(key) {
        Some(Some(replacement)) => {
            tracing::debug!(kind, from = key, to = replacement, "migrated legacy subtype key");
            replacement
        }
        Some(None) => {
            tracing::debug!(kind, key, "dropped retired subtype key");
            return None;
        }
        None => key,
    };

    let parsed = parse(current);
    if parsed.is_none() {
        tracing::warn!(kind, key, "unknown subtype key treated as absent");
    }
    parsed
}

fn optional_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

/// `deserialize_with` adapter for a point's stage subtype.
pub fn stage_subtype<'de, D>(deserializer: D) -> Result<Option<StageSubtype>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_key(deserializer)?
        .and_then(|key| resolve_key("stage", &key, StageSubtype::from_key)))
}

fn axis_key<'de, D>(deserializer: D, family: &'static str) -> Result<Option<AxisSubtype>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_key(deserializer)?.and_then(|key| {
        resolve_key(family, &key, |current| {
            AxisSubtype::from_family_key(family, current)
        })
    }))
}

pub fn infinity_subtype<'de, D>(deserializer: D) -> Result<Option<InfinitySubtype>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match axis_key(deserializer, "infinity")? {
        Some(AxisSubtype::Infinity(subtype)) => Some(subtype),
        _ => None,
    })
}

pub fn finitude_subtype<'de, D>(deserializer: D) -> Result<Option<FinitudeSubtype>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match axis_key(deserializer, "finitude")? {
        Some(AxisSubtype::Finitude(subtype)) => Some(subtype),
        _ => None,
    })
}

pub fn possibility_subtype<'de, D>(deserializer: D) -> Result<Option<PossibilitySubtype>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match axis_key(deserializer, "possibility")? {
        Some(AxisSubtype::Possibility(subtype)) => Some(subtype),
        _ => None,
    })
}

pub fn necessity_subtype<'de, D>(deserializer: D) -> Result<Option<NecessitySubtype>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match axis_key(deserializer, "necessity")? {
        Some(AxisSubtype::Necessity(subtype)) => Some(subtype),
        _ => None,
    })
}

pub fn unawareness_subtype<'de, D>(deserializer: D) -> Result<Option<UnawarenessSubtype>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match axis_key(deserializer, "unawareness")? {
        Some(AxisSubtype::Unawareness(subtype)) => Some(subtype),
        _ => None,
    })
}

pub fn awareness_subtype<'de, D>(deserializer: D) -> Result<Option<AwarenessSubtype>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match axis_key(deserializer, "awareness")? {
        Some(AxisSubtype::Awareness(subtype)) => Some(subtype),
        _ => None,
    })
}
