//! Publisher entity.

use serde::{Deserialize, Serialize};

use super::id::{EntityId, Identified};
use crate::domain::errors::FormError;
use crate::domain::form::{FieldKind, FieldSpec, FormState};
use crate::domain::resource::{ListEntry, Resource, ResourceKind};
use crate::domain::serde_utils::null_as_default;

/// Catalog publisher.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "crate::domain::serde_utils::lenient_i32::deserialize"
    )]
    pub establishment_year: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
}

impl Identified for Publisher {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Publisher write body.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherPayload {
    pub name: String,
    pub establishment_year: i32,
    pub address: String,
}

static PUBLISHER_FIELDS: [FieldSpec; 3] = [
    FieldSpec::new("name", "Publisher Name", FieldKind::Text),
    FieldSpec::new("establishmentYear", "Establishment Year", FieldKind::Number),
    FieldSpec::new("address", "Address", FieldKind::Text),
];

/// Publishers collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Publishers;

impl Resource for Publishers {
    type Entity = Publisher;
    type Payload = PublisherPayload;

    const KIND: ResourceKind = ResourceKind::Publisher;

    fn fields() -> &'static [FieldSpec] {
        &PUBLISHER_FIELDS
    }

    fn to_payload(form: &FormState) -> Result<PublisherPayload, FormError> {
        Ok(PublisherPayload {
            name: form.text("name")?,
            establishment_year: form.number("establishmentYear")?,
            address: form.text("address")?,
        })
    }

    fn to_form(publisher: &Publisher) -> FormState {
        FormState::with_values(
            &PUBLISHER_FIELDS,
            [
                ("name", publisher.name.clone()),
                (
                    "establishmentYear",
                    publisher
                        .establishment_year
                        .map(|y| y.to_string())
                        .unwrap_or_default(),
                ),
                ("address", publisher.address.clone()),
            ],
        )
    }

    fn render(publisher: &Publisher) -> ListEntry {
        ListEntry::new(publisher.name.clone())
            .detail(
                "Establishment Year",
                publisher
                    .establishment_year
                    .map(|y| y.to_string())
                    .unwrap_or_default(),
            )
            .detail("Address", publisher.address.clone())
    }
}
