//! API request and response types
//!
//! These are the transfer shapes exposed over HTTP, distinct from the
//! persisted records owned by the backend repositories. Field names follow
//! the camelCase convention of the public API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Patient transfer object.
///
/// `weight` is transient: it mirrors the most recent row of the patient's
/// weight history and is never stored on the patient itself. `diet_id` is
/// internal plumbing for the diet association flow and does not travel
/// over JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatientDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1))]
    pub fiscal_code: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub surname: String,
    #[validate(email)]
    pub email: String,
    pub age: i32,
    #[validate(length(min = 1))]
    pub gender: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(skip)]
    pub diet_id: Option<i32>,
}

/// Diet transfer object.
///
/// `patient` is the zero-or-one owner of the diet; `meals` is populated only
/// by the reads that load the association graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DietDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<PatientDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meals: Vec<MealDto>,
}

/// Meal transfer object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MealDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<ProductDto>,
}

/// Product transfer object. Every product belongs to exactly one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<ProductCategoryDto>,
}

/// Product category transfer object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 5))]
    pub description: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    #[validate(email, length(max = 50))]
    pub email: String,
    #[validate(length(min = 1, max = 50))]
    pub password: String,
    #[validate(length(min = 1, max = 50))]
    pub confirm_password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[validate(email, length(max = 50))]
    pub email: String,
    #[validate(length(min = 1, max = 50))]
    pub password: String,
}

impl LoginDto {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Token/error envelope returned by the auth endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<DateTime<Utc>>,
}

impl AuthResponse {
    /// Failure envelope with a message and no token.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            is_success: false,
            ..Self::default()
        }
    }

    /// Success envelope carrying a signed token and its expiry.
    pub fn success(token: String, expire_date: DateTime<Utc>) -> Self {
        Self {
            is_success: true,
            token: Some(token),
            expire_date: Some(expire_date),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn sample_patient() -> PatientDto {
        PatientDto {
            id: 0,
            fiscal_code: "FC1".to_string(),
            name: "Mario".to_string(),
            surname: "Rossi".to_string(),
            email: "mario.rossi@example.com".to_string(),
            age: 42,
            gender: "M".to_string(),
            phone: "3331234567".to_string(),
            weight: 70.0,
            diet_id: None,
        }
    }

    #[test]
    fn patient_dto_round_trips_without_diet_id() {
        let mut patient = sample_patient();
        patient.diet_id = Some(7);

        let json = serde_json::to_string(&patient).unwrap();
        assert!(!json.contains("dietId"));
        assert!(json.contains("fiscalCode"));

        let back: PatientDto = serde_json::from_str(&json).unwrap();
        assert_eq!(back.diet_id, None);
        assert_eq!(back.email, patient.email);
    }

    #[test]
    fn patient_dto_rejects_bad_email() {
        let mut patient = sample_patient();
        patient.email = "not-an-email".to_string();
        assert!(patient.validate().is_err());
    }

    #[test]
    fn product_category_requires_min_description_length() {
        let short = ProductCategoryDto {
            id: 0,
            description: "abcd".to_string(),
        };
        assert!(short.validate().is_err());

        let ok = ProductCategoryDto {
            id: 0,
            description: "Dairy products".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn register_dto_enforces_field_lengths() {
        let dto = RegisterDto {
            email: format!("{}@example.com", "a".repeat(50)),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn auth_response_serializes_camel_case() {
        let response = AuthResponse::failure("Invalid Password");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["isSuccess"], false);
        assert_eq!(json["message"], "Invalid Password");
        assert!(json.get("token").is_none());
    }

    #[test]
    fn diet_dto_omits_empty_meals() {
        let diet = DietDto {
            id: 1,
            name: "D1".to_string(),
            description: "Low carb".to_string(),
            patient: None,
            meals: vec![],
        };
        let json = serde_json::to_string(&diet).unwrap();
        assert!(!json.contains("meals"));
        assert!(!json.contains("patient"));
    }
}
