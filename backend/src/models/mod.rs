//! Persistent models, API payloads, and the text enums stored alongside them.

/// Implements the textual representation shared by every status/kind enum.
///
/// Parsing trims the input and ignores ASCII case, so `"pending"` and
/// `" Volunteer "` both parse. Serialization always emits the canonical text.
macro_rules! text_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::models::UnknownVariant;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let trimmed = raw.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($text) {
                        return Ok($name::$variant);
                    }
                )+
                Err(crate::models::UnknownVariant {
                    kind: stringify!($name),
                    value: trimmed.to_string(),
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod disaster;
pub mod feedback;
pub mod notification;
pub mod password_reset;
pub mod resource;
pub mod resource_request;
pub mod task;
pub mod task_request;
pub mod user;
pub mod volunteer_application;

/// Raised when a path segment, query value, or payload field does not name a
/// known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Raised when a lifecycle change is not allowed from the record's current status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot move {entity} from {from} to {to}")]
pub struct InvalidTransition {
    pub entity: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

#[cfg(test)]
mod tests {
    use super::task::TaskStatus;
    use super::user::UserRole;

    #[test]
    fn text_enums_parse_loosely_and_print_canonically() {
        assert_eq!(" volunteer ".parse::<UserRole>(), Ok(UserRole::Volunteer));
        assert_eq!("in_progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!(TaskStatus::InProgress.to_string(), "IN_PROGRESS");

        let err = "stalled".parse::<TaskStatus>().unwrap_err();
        assert_eq!(err.kind, "TaskStatus");
        assert_eq!(err.to_string(), "Unknown TaskStatus value: stalled");
    }

    #[test]
    fn text_enums_round_trip_through_json() {
        let json = serde_json::to_value(TaskStatus::Completed).unwrap();
        assert_eq!(json, serde_json::json!("COMPLETED"));
        let parsed: TaskStatus = serde_json::from_value(serde_json::json!("completed")).unwrap();
        assert_eq!(parsed, TaskStatus::Completed);
        assert!(serde_json::from_value::<TaskStatus>(serde_json::json!("done")).is_err());
    }
}
