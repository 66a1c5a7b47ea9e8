//! Selectable catalog items and cache-key derivation.
//!
//! An [`Entity`] is either an Earth sighting event or a celestial origin.
//! On the wire both are plain JSON objects; the two variants carry disjoint
//! required fields (`locationName`/`title` vs `name`/`designation`), so
//! deserialization fixes the variant once at construction. Code downstream
//! matches on the enum and never probes for field presence.

use serde::{Deserialize, Serialize};

/// Category of an Earth sighting event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventKind {
    Crash,
    Abduction,
    Sighting,
    Mutilation,
    Contact,
}

/// Category of a celestial origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OriginKind {
    Homeworld,
    Signal,
    Anomaly,
}

/// A documented UAP event on Earth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthEvent {
    /// Stable slug identifier, unique across the whole catalog.
    pub id: String,
    pub title: String,
    /// Free-form year, may be a range like "1967-Present".
    pub year: String,
    pub location_name: String,
    pub short_desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Whether the archive image is AI-generated rather than period material.
    #[serde(rename = "isAI", default, skip_serializing_if = "Option::is_none")]
    pub is_ai: Option<bool>,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

/// A star system, signal source, or anomaly of purported interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialOrigin {
    /// Stable slug identifier, unique across the whole catalog.
    pub id: String,
    pub name: String,
    /// Astronomical designation, e.g. "KIC 8462852".
    pub designation: String,
    /// Free-form distance, e.g. "39.3 光年".
    pub distance: String,
    pub short_desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_beings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "isAI", default, skip_serializing_if = "Option::is_none")]
    pub is_ai: Option<bool>,
    #[serde(rename = "type")]
    pub kind: OriginKind,
}

/// A selectable catalog item.
///
/// Untagged on the wire: the required field sets of the two variants are
/// disjoint, so a JSON object deserializes into exactly one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entity {
    Event(EarthEvent),
    Origin(CelestialOrigin),
}

impl Entity {
    /// The catalog identifier, empty only for malformed input.
    pub fn id(&self) -> &str {
        match self {
            Self::Event(e) => &e.id,
            Self::Origin(o) => &o.id,
        }
    }

    /// Human-readable subject name (event title or origin name).
    pub fn subject(&self) -> &str {
        match self {
            Self::Event(e) => &e.title,
            Self::Origin(o) => &o.name,
        }
    }

    /// Derive the cache key for this entity.
    ///
    /// The `id` is the key. Every catalog entry has a unique non-empty `id`,
    /// so the `{subject}-{year|designation}` fallback is only ever taken for
    /// malformed input and exists to avoid failing outright on it.
    pub fn cache_key(&self) -> String {
        if !self.id().is_empty() {
            return self.id().to_string();
        }
        match self {
            Self::Event(e) => format!("{}-{}", e.title, e.year),
            Self::Origin(o) => format!("{}-{}", o.name, o.designation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_json_deserializes_to_event_variant() {
        let json = r#"{
            "id": "roswell",
            "title": "罗斯威尔事件",
            "year": "1947",
            "locationName": "美国, 新墨西哥州, 罗斯威尔",
            "shortDesc": "涉及奇异材料和生物实体的坠毁回收事件。",
            "type": "CRASH"
        }"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        match entity {
            Entity::Event(e) => {
                assert_eq!(e.id, "roswell");
                assert_eq!(e.kind, EventKind::Crash);
                assert_eq!(e.location_name, "美国, 新墨西哥州, 罗斯威尔");
            }
            other => panic!("expected Event, got {other:?}"),
        }
    }

    #[test]
    fn origin_json_deserializes_to_origin_variant() {
        let json = r#"{
            "id": "zeta-reticuli",
            "name": "网罟座泽塔星系 (Zeta Reticuli)",
            "designation": "双星系统",
            "distance": "39.3 光年",
            "shortDesc": "通常被认为是小灰人外星人的家乡星系。",
            "associatedBeings": "小灰人 (Ebens)",
            "type": "HOMEWORLD"
        }"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        match entity {
            Entity::Origin(o) => {
                assert_eq!(o.id, "zeta-reticuli");
                assert_eq!(o.kind, OriginKind::Homeworld);
                assert_eq!(o.associated_beings.as_deref(), Some("小灰人 (Ebens)"));
            }
            other => panic!("expected Origin, got {other:?}"),
        }
    }

    #[test]
    fn serialization_uses_camel_case_wire_names() {
        let event = EarthEvent {
            id: "tic-tac".to_string(),
            title: "尼米兹号 \"Tic Tac\" 事件".to_string(),
            year: "2004".to_string(),
            location_name: "美国, 圣地亚哥海岸".to_string(),
            short_desc: "F-18飞行员的雷达目视遭遇。".to_string(),
            image: None,
            is_ai: Some(false),
            kind: EventKind::Sighting,
        };
        let json = serde_json::to_value(Entity::Event(event)).unwrap();
        assert!(json.get("locationName").is_some());
        assert!(json.get("shortDesc").is_some());
        assert_eq!(json.get("isAI").unwrap(), false);
        assert_eq!(json.get("type").unwrap(), "SIGHTING");
        // Absent optionals are omitted entirely, not serialized as null.
        assert!(json.get("image").is_none());
    }

    #[test]
    fn cache_key_is_the_id_when_present() {
        let json = r#"{
            "id": "phoenix-lights",
            "title": "凤凰城光点",
            "year": "1997",
            "locationName": "美国, 亚利桑那州, 凤凰城",
            "shortDesc": "大规模目击。",
            "type": "SIGHTING"
        }"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.cache_key(), "phoenix-lights");
    }

    #[test]
    fn cache_key_falls_back_for_missing_id() {
        let json = r#"{
            "id": "",
            "title": "凤凰城光点",
            "year": "1997",
            "locationName": "美国, 亚利桑那州, 凤凰城",
            "shortDesc": "大规模目击。",
            "type": "SIGHTING"
        }"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.cache_key(), "凤凰城光点-1997");
    }

    #[test]
    fn origin_cache_key_falls_back_to_name_and_designation() {
        let json = r#"{
            "id": "",
            "name": "塔比星 (Tabby's Star)",
            "designation": "KIC 8462852",
            "distance": "1,470 光年",
            "shortDesc": "亮度异常下降。",
            "type": "ANOMALY"
        }"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.cache_key(), "塔比星 (Tabby's Star)-KIC 8462852");
    }

    #[test]
    fn kind_rejects_unknown_values() {
        let json = r#"{
            "id": "x",
            "title": "t",
            "year": "1990",
            "locationName": "somewhere",
            "shortDesc": "d",
            "type": "LANDING"
        }"#;
        assert!(serde_json::from_str::<Entity>(json).is_err());
    }
}
