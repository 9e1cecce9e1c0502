//! Core data structures for toxin-antitoxin annotation tables.
//!
//! - [`record`]: a single table row, [`AnnotationRecord`], identified by a
//!   [`RecordId`] assigned at load time.
//! - [`field`]: the [`RecordField`] selector used wherever a column has to be
//!   chosen at runtime (pair counting, permutation).
//! - [`store`]: the immutable ordered collection [`RecordStore`] every
//!   component consumes and produces.
//! - [`typedef`]: string type aliases and the absent-sequence sentinel.

pub mod field;
pub mod record;
pub mod store;
pub mod typedef;


pub use field::RecordField;
pub use record::{
    AnnotationRecord,
    RecordId,
};
pub use store::RecordStore;
