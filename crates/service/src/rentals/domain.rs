use serde::{Deserialize, Serialize};

/// One rental confirmation. Every field is optional on the wire.
///
/// The booking form posts `veaddress` and `file`; both are accepted as
/// aliases of `vehicleAddress` and `fileName`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalDetail {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, alias = "veaddress")]
    pub vehicle_address: Option<String>,
    #[serde(default, alias = "file")]
    pub file_name: Option<String>,
}

impl RentalDetail {
    pub fn into_new(self) -> Self {
        Self { id: None, ..self }
    }
}

impl From<models::rental_detail::Model> for RentalDetail {
    fn from(m: models::rental_detail::Model) -> Self {
        Self {
            id: Some(m.id),
            name: m.name,
            phone_number: m.phone_number,
            address: m.address,
            vehicle_address: m.vehicle_address,
            file_name: m.file_name,
        }
    }
}
