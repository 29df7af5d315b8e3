//! # 고객 DTO
//!
//! ```json
//! { "name": "Pan Oleg", "email": "oleg@example.com" }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use crate::core::errors::{AppError, AppResult, FieldViolation};
use crate::domain::dto::{to_utc, to_uuid, validate_not_blank};
use crate::domain::entities::Customer;
use crate::utils::string_utils::{deserialize_optional_string, non_blank};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[serde(default)]
    pub version: Option<i32>,

    #[serde(default)]
    #[validate(
        required(message = "must not be null"),
        length(max = 255, message = "size must be between 0 and 255"),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,

    /// 공백 문자열은 값이 없는 것으로 취급됩니다.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "must be a well-formed email address"))]
    pub email: Option<String>,

    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub update_date: Option<DateTime<Utc>>,
}

impl CustomerDto {
    /// 전체 수정(PUT): 이름과 이메일을 교체합니다.
    pub fn apply_update(&self, customer: &mut Customer) -> AppResult<()> {
        customer.name = self.required_name()?;
        customer.email = self.email.clone();
        Ok(())
    }

    /// 부분 수정(PATCH): 이름은 공백이 아닐 때, 이메일은 값이 있을 때만 반영합니다.
    pub fn apply_patch(&self, customer: &mut Customer) -> bool {
        let mut changed = false;

        if let Some(name) = non_blank(&self.name) {
            customer.name = name.to_string();
            changed = true;
        }
        if let Some(email) = &self.email {
            customer.email = Some(email.clone());
            changed = true;
        }

        changed
    }

    fn required_name(&self) -> AppResult<String> {
        non_blank(&self.name)
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::FieldValidation(vec![FieldViolation {
                    field: "name".to_string(),
                    message: "must not be null".to_string(),
                }])
            })
    }
}

impl TryFrom<CustomerDto> for Customer {
    type Error = AppError;

    fn try_from(dto: CustomerDto) -> Result<Self, Self::Error> {
        let name = dto.required_name()?;
        Ok(Customer::new(name, dto.email))
    }
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: to_uuid(&customer.id),
            version: Some(customer.version),
            name: Some(customer.name),
            email: customer.email,
            created_date: Some(to_utc(customer.created_date)),
            update_date: Some(to_utc(customer.update_date)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_customer() -> Customer {
        Customer::new("Pan Oleg".to_string(), Some("oleg@example.com".to_string()))
    }

    #[test]
    fn test_name_is_required() {
        let result = CustomerDto::default().validate();
        match AppError::from(result.unwrap_err()) {
            AppError::FieldValidation(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "name");
            }
            other => panic!("Expected FieldValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let dto = CustomerDto {
            name: Some("Pan Pavlo".to_string()),
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = CustomerDto {
            email: Some("pavlo@example.com".to_string()),
            ..dto
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_blank_email_deserializes_to_none() {
        let dto: CustomerDto = serde_json::from_str(r#"{"name":"Pan Pavlo","email":"  "}"#).unwrap();
        assert_eq!(dto.email, None);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_apply_update_replaces_name_and_email() {
        let mut customer = stored_customer();
        let dto = CustomerDto {
            name: Some("Old Zlishchev".to_string()),
            ..Default::default()
        };

        dto.apply_update(&mut customer).unwrap();

        assert_eq!(customer.name, "Old Zlishchev");
        assert_eq!(customer.email, None);
    }

    #[test]
    fn test_apply_patch_ignores_blank_name() {
        let mut customer = stored_customer();
        let dto = CustomerDto {
            name: Some("   ".to_string()),
            ..Default::default()
        };

        assert!(!dto.apply_patch(&mut customer));
        assert_eq!(customer.name, "Pan Oleg");
        assert_eq!(customer.email.as_deref(), Some("oleg@example.com"));
    }

    #[test]
    fn test_apply_patch_sets_email() {
        let mut customer = stored_customer();
        let dto = CustomerDto {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        };

        assert!(dto.apply_patch(&mut customer));
        assert_eq!(customer.name, "Pan Oleg");
        assert_eq!(customer.email.as_deref(), Some("new@example.com"));
    }

    #[test]
    fn test_entity_to_dto() {
        let customer = stored_customer();
        let id = customer.id.clone();
        let json = serde_json::to_value(CustomerDto::from(customer)).unwrap();

        assert_eq!(json["id"], id);
        assert_eq!(json["name"], "Pan Oleg");
        assert!(json["updateDate"].is_string());
    }
}
