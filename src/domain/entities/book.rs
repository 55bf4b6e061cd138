//! Book entity.

use serde::{Deserialize, Serialize};

use super::id::{EntityId, IdRef, Identified, NamedRef};
use crate::domain::errors::FormError;
use crate::domain::form::{FieldKind, FieldSpec, FormState};
use crate::domain::resource::{ListEntry, Resource, ResourceKind};
use crate::domain::serde_utils::null_as_default;

/// Catalog book as returned by the backend, with nested author, publisher
/// and categories.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "crate::domain::serde_utils::lenient_i32::deserialize"
    )]
    pub publication_year: Option<i32>,
    #[serde(
        default,
        deserialize_with = "crate::domain::serde_utils::lenient_i32::deserialize"
    )]
    pub stock: Option<i32>,
    #[serde(default)]
    pub author: Option<NamedRef>,
    #[serde(default)]
    pub publisher: Option<NamedRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<NamedRef>,
}

impl Identified for Book {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Book write body.
///
/// The record supports several categories; the form selects one.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub name: String,
    pub publication_year: i32,
    pub stock: i32,
    pub author: IdRef,
    pub publisher: IdRef,
    pub categories: Vec<IdRef>,
}

static BOOK_FIELDS: [FieldSpec; 6] = [
    FieldSpec::new("title", "Book Name", FieldKind::Text),
    FieldSpec::new("publicationYear", "Publication Year", FieldKind::Number),
    FieldSpec::new("stock", "Stock", FieldKind::Number),
    FieldSpec::new("authorId", "Author", FieldKind::Reference(ResourceKind::Author)),
    FieldSpec::new(
        "publisherId",
        "Publisher",
        FieldKind::Reference(ResourceKind::Publisher),
    ),
    FieldSpec::new(
        "categoryId",
        "Category",
        FieldKind::Reference(ResourceKind::Category),
    ),
];

/// Books collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Books;

impl Resource for Books {
    type Entity = Book;
    type Payload = BookPayload;

    const KIND: ResourceKind = ResourceKind::Book;

    fn fields() -> &'static [FieldSpec] {
        &BOOK_FIELDS
    }

    fn to_payload(form: &FormState) -> Result<BookPayload, FormError> {
        Ok(BookPayload {
            name: form.text("title")?,
            publication_year: form.number("publicationYear")?,
            stock: form.number("stock")?,
            author: IdRef::new(form.reference("authorId")?),
            publisher: IdRef::new(form.reference("publisherId")?),
            categories: vec![IdRef::new(form.reference("categoryId")?)],
        })
    }

    fn to_form(book: &Book) -> FormState {
        let number = |value: Option<i32>| value.map(|v| v.to_string()).unwrap_or_default();
        let id_of = |nested: Option<&NamedRef>| nested.map(|n| n.id.to_string()).unwrap_or_default();

        FormState::with_values(
            &BOOK_FIELDS,
            [
                ("title", book.name.clone()),
                ("publicationYear", number(book.publication_year)),
                ("stock", number(book.stock)),
                ("authorId", id_of(book.author.as_ref())),
                ("publisherId", id_of(book.publisher.as_ref())),
                ("categoryId", id_of(book.categories.first())),
            ],
        )
    }

    fn render(book: &Book) -> ListEntry {
        let name_of = |nested: Option<&NamedRef>| nested.map(|n| n.name.clone()).unwrap_or_default();
        let number = |value: Option<i32>| value.map(|v| v.to_string()).unwrap_or_default();

        let categories = if book.categories.is_empty() {
            "None".to_string()
        } else {
            book.categories
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        ListEntry::new(book.name.clone())
            .detail("Author", name_of(book.author.as_ref()))
            .detail("Publication Year", number(book.publication_year))
            .detail("Stock", number(book.stock))
            .detail("Publisher", name_of(book.publisher.as_ref()))
            .detail("Categories", categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Snow",
            "publicationYear": 2002,
            "stock": 5,
            "author": { "id": 1, "name": "Orhan Pamuk", "country": "Turkey" },
            "publisher": { "id": 2, "name": "Faber" },
            "categories": [
                { "id": 4, "name": "Novel" },
                { "id": 5, "name": "Political" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_decode_nested_read_representation() {
        let book = sample_book();
        assert_eq!(book.id, EntityId(3));
        assert_eq!(book.author, Some(NamedRef::new(1, "Orhan Pamuk")));
        assert_eq!(book.categories.len(), 2);
    }

    #[test]
    fn test_decode_tolerates_missing_references() {
        let book: Book = serde_json::from_value(serde_json::json!({
            "id": 8,
            "name": "Orphan",
            "publicationYear": "1999",
            "stock": 1,
            "author": null,
            "publisher": null,
            "categories": null
        }))
        .unwrap();

        assert_eq!(book.publication_year, Some(1999));
        assert!(book.author.is_none());
        assert!(book.categories.is_empty());
        assert_eq!(Books::to_form(&book).get("categoryId"), "");
    }

    #[test]
    fn test_edit_projects_references_to_ids() {
        let form = Books::to_form(&sample_book());

        assert_eq!(form.get("title"), "Snow");
        assert_eq!(form.get("publicationYear"), "2002");
        assert_eq!(form.get("stock"), "5");
        assert_eq!(form.get("authorId"), "1");
        assert_eq!(form.get("publisherId"), "2");
        assert_eq!(form.get("categoryId"), "4");
    }

    #[test]
    fn test_payload_sends_integers_and_wrapped_references() {
        let mut form = Books::to_form(&sample_book());
        form.set("stock", "12").unwrap();

        let json = serde_json::to_value(Books::to_payload(&form).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Snow",
                "publicationYear": 2002,
                "stock": 12,
                "author": { "id": 1 },
                "publisher": { "id": 2 },
                "categories": [{ "id": 4 }]
            })
        );
    }

    #[test]
    fn test_payload_rejects_non_numeric_stock() {
        let mut form = Books::to_form(&sample_book());
        form.set("stock", "a dozen").unwrap();

        assert_eq!(
            Books::to_payload(&form),
            Err(FormError::invalid_number("stock", "a dozen"))
        );
    }

    #[test]
    fn test_render_lists_categories() {
        let entry = Books::render(&sample_book());
        assert_eq!(entry.title, "Snow");
        assert!(entry.details.contains(&("Categories", "Novel, Political".to_string())));
        assert!(entry.details.contains(&("Author", "Orhan Pamuk".to_string())));

        let mut bare = sample_book();
        bare.categories.clear();
        assert!(Books::render(&bare)
            .details
            .contains(&("Categories", "None".to_string())));
    }

    #[test]
    fn test_references_follow_field_order() {
        assert_eq!(
            Books::references(),
            vec![
                ResourceKind::Author,
                ResourceKind::Publisher,
                ResourceKind::Category
            ]
        );
    }
}
