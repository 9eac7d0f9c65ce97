//! Directory Models
//!
//! Person/position records as served by the directory API.
//!
//! The sheet behind the API is loosely typed: any field may be missing,
//! phone numbers sometimes arrive as numbers, and flags arrive either as
//! booleans or as `"true"`/`"TRUE"` strings. All of that is normalized here,
//! once, so the rest of the app only sees `Option<String>` and `bool`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Display name used for open-position cards
pub const HIRING_LABEL: &str = "채용 예정";

/// Display name used when a record has no name
pub const UNNAMED_LABEL: &str = "이름 없음";

/// A person (or open position) from the directory
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cellphone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub org_unit_path: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub manager_email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub suspended: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_hiring: bool,
}

impl Person {
    /// Hiring placeholders are always shown; everyone else only when active.
    pub fn is_visible(&self) -> bool {
        self.is_hiring || !self.suspended
    }

    /// Name as it should appear on a card
    pub fn display_name(&self) -> &str {
        if self.is_hiring {
            HIRING_LABEL
        } else {
            self.name.as_deref().unwrap_or(UNNAMED_LABEL)
        }
    }

    /// Name used for ordering; missing names sort as empty
    pub fn sort_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Case-insensitive check against the title
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title_text().to_uppercase().contains(&needle.to_uppercase())
    }

    /// Team label: last segment of the org unit path, else the department field
    pub fn team_name(&self) -> Option<&str> {
        let from_path = self
            .org_unit_path
            .as_deref()
            .and_then(|path| path.rsplit('/').next())
            .map(str::trim)
            .filter(|segment| !segment.is_empty());
        from_path.or(self.department.as_deref())
    }
}

/// Response body of a directory read: either `{ "users": [...] }` or a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DirectoryPayload {
    Bare(Vec<Person>),
    Wrapped {
        #[serde(default)]
        users: Option<Vec<Person>>,
    },
}

impl DirectoryPayload {
    pub fn into_people(self) -> Vec<Person> {
        match self {
            DirectoryPayload::Bare(people) => people,
            DirectoryPayload::Wrapped { users } => users.unwrap_or_default(),
        }
    }
}

// ========================
// Lenient field parsing
// ========================

/// Accept strings, numbers, and booleans as text; blank values become `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let text = match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => return Ok(None),
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// Boolean-like flag: `true`, `"true"` and `"TRUE"` are truthy, anything else is not.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s == "true" || s == "TRUE",
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Person {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_flag_encodings() {
        assert!(parse(r#"{"suspended": true}"#).suspended);
        assert!(parse(r#"{"suspended": "true"}"#).suspended);
        assert!(parse(r#"{"suspended": "TRUE"}"#).suspended);
        assert!(!parse(r#"{"suspended": "True"}"#).suspended);
        assert!(!parse(r#"{"suspended": false}"#).suspended);
        assert!(!parse(r#"{"suspended": 1}"#).suspended);
        assert!(!parse(r#"{"suspended": null}"#).suspended);
        assert!(!parse(r#"{}"#).suspended);
    }

    #[test]
    fn test_visibility() {
        let suspended = parse(r#"{"name": "A", "suspended": "TRUE"}"#);
        assert!(!suspended.is_visible());

        let hiring = parse(r#"{"title": "Engineer", "suspended": true, "isHiring": "true"}"#);
        assert!(hiring.is_visible());

        let active = parse(r#"{"name": "B"}"#);
        assert!(active.is_visible());
    }

    #[test]
    fn test_lenient_text_fields() {
        let person = parse(
            r#"{"name": "  Kim  ", "cellphone": 1012345678, "email": "", "photoUrl": null, "orgUnitPath": "/CEO/R&D"}"#,
        );
        assert_eq!(person.name.as_deref(), Some("Kim"));
        assert_eq!(person.cellphone.as_deref(), Some("1012345678"));
        assert_eq!(person.email, None);
        assert_eq!(person.photo_url, None);
        assert_eq!(person.org_unit_path.as_deref(), Some("/CEO/R&D"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let person = parse(r#"{"name": "Lee", "thumbnail": {"w": 10}, "extra": [1, 2]}"#);
        assert_eq!(person.name.as_deref(), Some("Lee"));
    }

    #[test]
    fn test_display_name() {
        let hiring = parse(r#"{"name": "ignored", "isHiring": true}"#);
        assert_eq!(hiring.display_name(), HIRING_LABEL);

        let unnamed = parse(r#"{"title": "PRO"}"#);
        assert_eq!(unnamed.display_name(), UNNAMED_LABEL);
    }

    #[test]
    fn test_team_name() {
        let nested = parse(r#"{"orgUnitPath": "/CEO/R&D/Backend"}"#);
        assert_eq!(nested.team_name(), Some("Backend"));

        let slash_only = parse(r#"{"orgUnitPath": "/"}"#);
        assert_eq!(slash_only.team_name(), None);

        let fallback = parse(r#"{"orgUnitPath": "/", "department": "Sales"}"#);
        assert_eq!(fallback.team_name(), Some("Sales"));

        let trailing = parse(r#"{"orgUnitPath": "/CEO/"}"#);
        assert_eq!(trailing.team_name(), None);
    }

    #[test]
    fn test_payload_shapes() {
        let wrapped: DirectoryPayload =
            serde_json::from_str(r#"{"users": [{"name": "A"}, {"name": "B"}]}"#).unwrap();
        assert_eq!(wrapped.into_people().len(), 2);

        let bare: DirectoryPayload = serde_json::from_str(r#"[{"name": "A"}]"#).unwrap();
        assert_eq!(bare.into_people().len(), 1);

        let empty: DirectoryPayload = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(empty.into_people().is_empty());

        let null_users: DirectoryPayload = serde_json::from_str(r#"{"users": null}"#).unwrap();
        assert!(null_users.into_people().is_empty());
    }
}
