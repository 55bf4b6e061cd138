//! Author entity.

use serde::{Deserialize, Serialize};

use super::id::{EntityId, Identified};
use crate::domain::errors::FormError;
use crate::domain::form::{FieldKind, FieldSpec, FormState};
use crate::domain::resource::{ListEntry, Resource, ResourceKind};
use crate::domain::serde_utils::null_as_default;

/// Catalog author.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub birth_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
}

impl Identified for Author {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Author write body.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub name: String,
    pub birth_date: String,
    pub country: String,
}

static AUTHOR_FIELDS: [FieldSpec; 3] = [
    FieldSpec::new("name", "Author Name", FieldKind::Text),
    FieldSpec::new("birthDate", "Birth Date", FieldKind::Date),
    FieldSpec::new("country", "Country", FieldKind::Text),
];

/// Authors collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Authors;

impl Resource for Authors {
    type Entity = Author;
    type Payload = AuthorPayload;

    const KIND: ResourceKind = ResourceKind::Author;

    fn fields() -> &'static [FieldSpec] {
        &AUTHOR_FIELDS
    }

    fn to_payload(form: &FormState) -> Result<AuthorPayload, FormError> {
        Ok(AuthorPayload {
            name: form.text("name")?,
            birth_date: form.text("birthDate")?,
            country: form.text("country")?,
        })
    }

    fn to_form(author: &Author) -> FormState {
        FormState::with_values(
            &AUTHOR_FIELDS,
            [
                ("name", author.name.as_str()),
                ("birthDate", author.birth_date.as_str()),
                ("country", author.country.as_str()),
            ],
        )
    }

    fn render(author: &Author) -> ListEntry {
        ListEntry::new(format!(
            "{} - {} - {}",
            author.name, author.birth_date, author.country
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_matches_form() {
        let form = FormState::with_values(
            Authors::fields(),
            [("name", "Jane Doe"), ("birthDate", "1975-03-02"), ("country", "UK")],
        );

        let payload = Authors::to_payload(&form).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane Doe",
                "birthDate": "1975-03-02",
                "country": "UK"
            })
        );
    }

    #[test]
    fn test_edit_roundtrip_through_form() {
        let author: Author = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Jane Doe",
            "birthDate": "1975-03-02",
            "country": "UK"
        }))
        .unwrap();

        let form = Authors::to_form(&author);
        assert_eq!(form.get("name"), "Jane Doe");
        assert_eq!(form.get("birthDate"), "1975-03-02");
        assert_eq!(form.get("country"), "UK");
    }

    #[test]
    fn test_render_joins_fields() {
        let author = Author {
            id: EntityId(1),
            name: "Orhan Pamuk".to_string(),
            birth_date: "1952-06-07".to_string(),
            country: "Turkey".to_string(),
        };

        assert_eq!(
            Authors::render(&author).title,
            "Orhan Pamuk - 1952-06-07 - Turkey"
        );
    }
}
