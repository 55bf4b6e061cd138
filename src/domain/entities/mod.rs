//! Domain entity definitions.

mod author;
mod book;
mod borrowing;
mod category;
mod id;
mod publisher;

pub use author::{Author, AuthorPayload, Authors};
pub use book::{Book, BookPayload, Books};
pub use borrowing::{Borrowing, BorrowingPayload, Borrowings};
pub use category::{Categories, Category, CategoryPayload};
pub use id::{EntityId, IdRef, Identified, NamedRef};
pub use publisher::{Publisher, PublisherPayload, Publishers};
