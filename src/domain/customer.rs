use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerId, DisplayName, Email, TypeConstraintError};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Private,
    Business,
    Public,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Lead,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub phone: String,
    pub city: String,
    #[serde(rename = "type")]
    pub customer_type: CustomerType,
    pub status: CustomerStatus,
    pub revenue: f64,
    pub projects_count: u32,
    pub created_at: DateTime<Utc>,
    pub last_contact: Option<DateTime<Utc>>,
}

/// Validated payload for creating a customer.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCustomer {
    pub name: DisplayName,
    pub company: Option<String>,
    pub email: Option<Email>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub customer_type: CustomerType,
    pub status: CustomerStatus,
}

impl NewCustomer {
    /// Materializes the payload into a fresh customer record.
    ///
    /// Counters start at zero and both timestamps are stamped with `now`.
    #[must_use]
    pub fn into_customer(self, id: CustomerId, now: DateTime<Utc>) -> Customer {
        Customer {
            id,
            name: self.name.into_inner(),
            company: self.company,
            email: self.email.map(Email::into_inner).unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            customer_type: self.customer_type,
            status: self.status,
            revenue: 0.0,
            projects_count: 0,
            created_at: now,
            last_contact: Some(now),
        }
    }
}

impl Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            CustomerType::Private => "private",
            CustomerType::Business => "business",
            CustomerType::Public => "public",
        };
        write!(f, "{value}")
    }
}

impl FromStr for CustomerType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "private" => Ok(CustomerType::Private),
            "business" => Ok(CustomerType::Business),
            "public" => Ok(CustomerType::Public),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

impl Display for CustomerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
            CustomerStatus::Lead => "lead",
        };
        write!(f, "{value}")
    }
}

impl FromStr for CustomerStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(CustomerStatus::Active),
            "inactive" => Ok(CustomerStatus::Inactive),
            "lead" => Ok(CustomerStatus::Lead),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}
