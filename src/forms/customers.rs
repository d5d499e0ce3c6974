use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::customer::{CustomerStatus, CustomerType, NewCustomer};
use crate::domain::types::{DisplayName, Email};
use crate::forms::FormError;

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Customer fields submitted by the create and edit dialogs.
pub struct CustomerForm {
    /// Display name of the customer.
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Contact email address.
    #[validate(email)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// One of `private`, `business`, `public`; defaults to `business`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<String>,
    /// One of `active`, `inactive`, `lead`; defaults to `lead`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl TryFrom<CustomerForm> for NewCustomer {
    type Error = FormError;

    fn try_from(form: CustomerForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = DisplayName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let email = non_blank(form.email)
            .map(Email::new)
            .transpose()
            .map_err(|_| FormError::InvalidEmail)?;
        let customer_type = match non_blank(form.customer_type) {
            Some(value) => value
                .parse::<CustomerType>()
                .map_err(|_| FormError::InvalidCustomerType)?,
            None => CustomerType::Business,
        };
        let status = match non_blank(form.status) {
            Some(value) => value
                .parse::<CustomerStatus>()
                .map_err(|_| FormError::InvalidCustomerStatus)?,
            None => CustomerStatus::Lead,
        };

        Ok(NewCustomer {
            name,
            company: non_blank(form.company),
            email,
            phone: non_blank(form.phone),
            city: non_blank(form.city),
            customer_type,
            status,
        })
    }
}
