use serde::{de::Error as _, Deserialize, Deserializer};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::AccessToken;
use crate::services::solver_service::{SolvePlan, TopicCap};

pub const MISSING_FIELDS: &str = "Missing accessToken or unitId in request data.";

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    #[validate(required(message = "accessToken is required"), length(min = 1))]
    pub access_token: Option<String>,

    /// Space separated unit ids.
    #[validate(required(message = "unitId is required"), length(min = 1))]
    pub unit_id: Option<String>,

    #[serde(default, deserialize_with = "deserialize_topic_cap")]
    pub num_units: Option<u32>,
}

impl SolveRequest {
    /// Validates the body and splits it into the credential and the work plan.
    pub fn into_plan(self) -> AppResult<(AccessToken, SolvePlan)> {
        self.validate()
            .map_err(|_| AppError::ValidationError(MISSING_FIELDS.to_string()))?;

        let (Some(access_token), Some(unit_id)) = (self.access_token, self.unit_id) else {
            return Err(AppError::ValidationError(MISSING_FIELDS.to_string()));
        };

        let plan = SolvePlan::new(&unit_id, TopicCap::new(self.num_units.unwrap_or(0)));
        if access_token.trim().is_empty() || plan.unit_ids.is_empty() {
            return Err(AppError::ValidationError(MISSING_FIELDS.to_string()));
        }

        Ok((AccessToken::new(access_token), plan))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTopicCap {
    Number(u32),
    Text(String),
}

/// Accepts `numUnits` as a number or a numeric string, as the form posts it.
fn deserialize_topic_cap<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawTopicCap>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawTopicCap::Number(n)) => Ok(Some(n)),
        Some(RawTopicCap::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawTopicCap::Text(s)) => s.trim().parse().map(Some).map_err(|_| {
            D::Error::custom(format!("numUnits must be a non-negative integer, got {:?}", s))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> SolveRequest {
        serde_json::from_value(value).expect("request should deserialize")
    }

    #[test]
    fn test_into_plan_splits_unit_ids_on_whitespace() {
        let request = parse(json!({
            "accessToken": "token",
            "unitId": " 101  102\t103 ",
            "numUnits": 2
        }));

        let (token, plan) = request.into_plan().unwrap();
        assert_eq!(token.expose(), "token");
        assert_eq!(plan.unit_ids, vec!["101", "102", "103"]);
        assert_eq!(plan.cap, TopicCap::new(2));
    }

    #[test]
    fn test_access_token_is_forwarded_verbatim() {
        let request = parse(json!({ "accessToken": " Bearer abc.def ", "unitId": "101" }));

        let (token, _) = request.into_plan().unwrap();
        assert_eq!(token.expose(), " Bearer abc.def ");
    }

    #[test]
    fn test_blank_access_token_is_validation_error() {
        let request = parse(json!({ "accessToken": "   ", "unitId": "101" }));

        assert!(request.into_plan().is_err());
    }

    #[test]
    fn test_num_units_defaults_to_unlimited() {
        let request = parse(json!({ "accessToken": "token", "unitId": "101" }));

        let (_, plan) = request.into_plan().unwrap();
        assert!(plan.cap.is_unlimited());
    }

    #[test]
    fn test_num_units_accepts_numeric_string() {
        let request = parse(json!({
            "accessToken": "token",
            "unitId": "101",
            "numUnits": "4"
        }));

        assert_eq!(request.num_units, Some(4));
    }

    #[test]
    fn test_num_units_rejects_garbage() {
        let result = serde_json::from_value::<SolveRequest>(json!({
            "accessToken": "token",
            "unitId": "101",
            "numUnits": "lots"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_access_token_is_validation_error() {
        let request = parse(json!({ "unitId": "101" }));

        let err = request.into_plan().unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_blank_unit_id_is_validation_error() {
        let request = parse(json!({ "accessToken": "token", "unitId": "   " }));

        let err = request.into_plan().unwrap_err();
        assert!(err.to_string().contains(MISSING_FIELDS));
    }
}
