//! The customer entity.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// One row of the `customer` table. `id == 0` marks a record that has not
/// been persisted yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, deserialize_with = "id_or_new")]
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl Customer {
    pub const NEW_ID: i32 = 0;

    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Customer {
            id: Self::NEW_ID,
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            email: Some(email.to_string()),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == Self::NEW_ID
    }
}

/// An explicit `"id": null` means the same as an absent id.
fn id_or_new<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(Customer::NEW_ID))
}
