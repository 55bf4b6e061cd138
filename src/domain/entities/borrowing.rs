//! Borrowing record entity.

use serde::{Deserialize, Serialize};

use super::id::{EntityId, IdRef, Identified, NamedRef};
use crate::domain::errors::FormError;
use crate::domain::form::{FieldKind, FieldSpec, FormState, date_prefix};
use crate::domain::resource::{ListEntry, ReferenceLoad, Resource, ResourceKind};
use crate::domain::serde_utils::null_as_default;

/// Loan of one book to a borrower.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Borrowing {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub borrower_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub borrower_mail: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub borrowing_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub book: Option<NamedRef>,
}

impl Identified for Borrowing {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Borrowing write body.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowingPayload {
    pub borrower_name: String,
    pub borrower_mail: String,
    pub borrowing_date: String,
    pub return_date: String,
    pub book_for_borrowing_request: IdRef,
}

static BORROWING_FIELDS: [FieldSpec; 5] = [
    FieldSpec::new("borrowerName", "Borrower Name", FieldKind::Text),
    FieldSpec::new("borrowerMail", "E-mail", FieldKind::Email),
    FieldSpec::new("borrowingDate", "Borrow Date", FieldKind::Date),
    FieldSpec::new("returnDate", "Return Date", FieldKind::Date).optional(),
    FieldSpec::new("bookId", "Book", FieldKind::Reference(ResourceKind::Book)),
];

/// Borrowing records collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Borrowings;

impl Resource for Borrowings {
    type Entity = Borrowing;
    type Payload = BorrowingPayload;

    const KIND: ResourceKind = ResourceKind::Borrowing;
    const REFERENCE_LOAD: ReferenceLoad = ReferenceLoad::Independent;

    fn fields() -> &'static [FieldSpec] {
        &BORROWING_FIELDS
    }

    fn to_payload(form: &FormState) -> Result<BorrowingPayload, FormError> {
        let borrowing_date = form.text("borrowingDate")?;
        let return_date = match form.get("returnDate").trim() {
            "" => borrowing_date.clone(),
            value => value.to_string(),
        };

        Ok(BorrowingPayload {
            borrower_name: form.text("borrowerName")?,
            borrower_mail: form.text("borrowerMail")?,
            borrowing_date,
            return_date,
            book_for_borrowing_request: IdRef::new(form.reference("bookId")?),
        })
    }

    fn to_form(borrowing: &Borrowing) -> FormState {
        FormState::with_values(
            &BORROWING_FIELDS,
            [
                ("borrowerName", borrowing.borrower_name.clone()),
                ("borrowerMail", borrowing.borrower_mail.clone()),
                (
                    "borrowingDate",
                    date_prefix(&borrowing.borrowing_date).to_string(),
                ),
                (
                    "returnDate",
                    borrowing
                        .return_date
                        .as_deref()
                        .map(|d| date_prefix(d).to_string())
                        .unwrap_or_default(),
                ),
                (
                    "bookId",
                    borrowing
                        .book
                        .as_ref()
                        .map(|b| b.id.to_string())
                        .unwrap_or_default(),
                ),
            ],
        )
    }

    fn render(borrowing: &Borrowing) -> ListEntry {
        ListEntry::new(borrowing.borrower_name.clone())
            .detail(
                "Book",
                borrowing
                    .book
                    .as_ref()
                    .map_or_else(|| "No book".to_string(), |b| b.name.clone()),
            )
            .detail("Borrow Date", date_prefix(&borrowing.borrowing_date))
            .detail(
                "Return Date",
                borrowing.return_date.as_deref().map(date_prefix).unwrap_or_default(),
            )
            .detail("E-mail", borrowing.borrower_mail.clone())
    }
}
