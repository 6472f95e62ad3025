//! The Profile entity and its opaque sub-structures
//!
//! A Profile is the unit of storage. The query engine only ever inspects
//! `display_name`, `aliases`, `actor_key`, `threat_level`, `categories`
//! and `created_at`; everything else is stored and returned verbatim.

use crate::types::ProfileId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Geographic origin of an actor. Opaque to the query engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    /// Country name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Region within the country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Period of activity. Opaque to the query engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivePeriod {
    /// Start of activity (free-form date string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// End of activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Current status label (e.g. ACTIVE, CAPTURED)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// One perpetrator entry in the narrative profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Perpetrator {
    /// Perpetrator name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Year of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub born: Option<i32>,
    /// Year of death
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub died: Option<i32>,
    /// Recorded IQ, where documented
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iq: Option<i32>,
    /// Role within a group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Psychological assessment notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psychology: Option<String>,
    /// Sentence received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
}

/// Method-of-operation details. Opaque to the query engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModusOperandi {
    /// Vehicle used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    /// Typical location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Method description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Tools employed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    /// Evidence characteristics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// Capture details. Opaque to the query engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    /// Capture date (free-form date string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// How the capture happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Evidence that led to the capture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_evidence: Option<String>,
}

/// Structured narrative profile: perpetrators, victim data, method, capture.
///
/// Never filtered or searched, only stored and returned verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    /// Known perpetrators
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub perpetrators: Vec<Perpetrator>,
    /// Documented victim count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub victim_count: Option<u32>,
    /// Victim demographic summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub victim_demographics: Option<String>,
    /// Method-of-operation details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modus_operandi: Option<ModusOperandi>,
    /// Capture details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture: Option<Capture>,
}

/// One cataloged threat-actor record
///
/// `id` and `created_at` are assigned by the store at insert and are
/// immutable, as is the caller-assigned `actor_key`. Multi-valued fields
/// (`aliases`, `categories`) default to empty sequences, never absent.
/// `threat_level` keeps its original casing; comparisons normalize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Storage-assigned unique identifier
    pub id: ProfileId,
    /// Caller-assigned unique slug, immutable after creation
    pub actor_key: String,
    /// Required non-empty display name
    pub display_name: String,
    /// Known aliases, ordered, duplicates permitted, casing preserved
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Severity label, original casing preserved
    pub threat_level: String,
    /// Free-text category labels; a profile may belong to several at once
    #[serde(default)]
    pub categories: Vec<String>,
    /// Geographic origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    /// Period of activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_period: Option<ActivePeriod>,
    /// Narrative profile sub-record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<Narrative>,
    /// Criminological significance notes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub significance: Vec<String>,
    /// Threat-intelligence lessons
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lessons: Vec<String>,
    /// Stated research purpose
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_purpose: Option<String>,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Author of the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Insert timestamp; tie-break and default-recency sort key
    pub created_at: DateTime<Utc>,
}

/// Insert input: everything the caller provides, before the store assigns
/// `id` and `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    /// Caller-assigned unique slug
    pub actor_key: String,
    /// Required non-empty display name
    pub display_name: String,
    /// Known aliases
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Severity label
    pub threat_level: String,
    /// Category labels
    #[serde(default)]
    pub categories: Vec<String>,
    /// Geographic origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    /// Period of activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_period: Option<ActivePeriod>,
    /// Narrative profile sub-record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<Narrative>,
    /// Criminological significance notes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub significance: Vec<String>,
    /// Threat-intelligence lessons
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lessons: Vec<String>,
    /// Stated research purpose
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_purpose: Option<String>,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Author of the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl ProfileDraft {
    /// Create a draft with the three required fields; everything else
    /// starts empty and can be filled via the builder methods.
    pub fn new(
        actor_key: impl Into<String>,
        display_name: impl Into<String>,
        threat_level: impl Into<String>,
    ) -> Self {
        Self {
            actor_key: actor_key.into(),
            display_name: display_name.into(),
            threat_level: threat_level.into(),
            ..Default::default()
        }
    }

    /// Set the aliases
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the categories
    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the narrative sub-record
    pub fn narrative(mut self, narrative: Narrative) -> Self {
        self.narrative = Some(narrative);
        self
    }

    /// Finish the draft into a stored record with store-assigned fields
    pub fn into_profile(self, id: ProfileId, created_at: DateTime<Utc>) -> Profile {
        Profile {
            id,
            actor_key: self.actor_key,
            display_name: self.display_name,
            aliases: self.aliases,
            threat_level: self.threat_level,
            categories: self.categories,
            origin: self.origin,
            active_period: self.active_period,
            narrative: self.narrative,
            significance: self.significance,
            lessons: self.lessons,
            research_purpose: self.research_purpose,
            tags: self.tags,
            created_by: self.created_by,
            created_at,
        }
    }
}

/// Canonical recency ordering: `created_at` descending, ties broken by
/// `id` ascending. Every scan in the system sorts with this comparator so
/// pagination stays deterministic across repeated queries and across the
/// store-backed and batch-backed query paths.
pub fn recency_order(a: &Profile, b: &Profile) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| a.id.cmp(&b.id))
}
