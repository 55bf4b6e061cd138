//! Category entity.

use serde::{Deserialize, Serialize};

use super::id::{EntityId, Identified};
use crate::domain::errors::FormError;
use crate::domain::form::{FieldKind, FieldSpec, FormState};
use crate::domain::resource::{ListEntry, Resource, ResourceKind};
use crate::domain::serde_utils::null_as_default;

/// Catalog category.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl Identified for Category {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Category write body.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
}

static CATEGORY_FIELDS: [FieldSpec; 2] = [
    FieldSpec::new("name", "Category Name", FieldKind::Text),
    FieldSpec::new("description", "Description", FieldKind::Text),
];

/// Categories collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Categories;

impl Resource for Categories {
    type Entity = Category;
    type Payload = CategoryPayload;

    const KIND: ResourceKind = ResourceKind::Category;

    fn fields() -> &'static [FieldSpec] {
        &CATEGORY_FIELDS
    }

    fn to_payload(form: &FormState) -> Result<CategoryPayload, FormError> {
        Ok(CategoryPayload {
            name: form.text("name")?,
            description: form.text("description")?,
        })
    }

    fn to_form(category: &Category) -> FormState {
        FormState::with_values(
            &CATEGORY_FIELDS,
            [
                ("name", category.name.as_str()),
                ("description", category.description.as_str()),
            ],
        )
    }

    fn render(category: &Category) -> ListEntry {
        ListEntry::new(category.name.clone()).detail("Description", category.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_and_edit_projection() {
        let category = Category {
            id: EntityId(9),
            name: "Poetry".to_string(),
            description: "Verse".to_string(),
        };

        let form = Categories::to_form(&category);
        let payload = Categories::to_payload(&form).unwrap();

        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            serde_json::json!({ "name": "Poetry", "description": "Verse" })
        );
    }
}
