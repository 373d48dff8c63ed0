//! Query-option construction for the CRUD surface.
//!
//! Centralizes the skip/limit/projection/sort/hint translation so every
//! operation applies the same conventions: skip is always honored, a
//! non-positive limit means "unlimited", single-document selection orders by
//! `_id` ascending, and deletes hint the `_id` index.

use bson::{doc, Document};
use mongodb::options::{CountOptions, DeleteOptions, FindOneOptions, FindOptions, Hint};

/// Index hint used by the delete operations.
fn id_index() -> Hint {
    Hint::Keys(doc! { "_id": 1 })
}

/// Options for a count.
pub(crate) fn count(limit: i64, skip: u64) -> CountOptions {
    let mut opts = CountOptions::default();
    opts.skip = Some(skip);
    if limit > 0 {
        opts.limit = Some(limit as u64);
    }
    opts
}

/// Options for a find, with an optional field projection.
pub(crate) fn find(limit: i64, skip: u64, projection: Option<Document>) -> FindOptions {
    let mut opts = FindOptions::default();
    opts.skip = Some(skip);
    opts.projection = projection;
    if limit > 0 {
        opts.limit = Some(limit);
    }
    opts
}

/// Options for a find-one: `_id`-ascending order, then skip.
pub(crate) fn find_one(skip: u64) -> FindOneOptions {
    let mut opts = FindOneOptions::default();
    opts.sort = Some(doc! { "_id": 1 });
    opts.skip = Some(skip);
    opts
}

/// Options for delete-one/delete-many.
pub(crate) fn delete() -> DeleteOptions {
    let mut opts = DeleteOptions::default();
    opts.hint = Some(id_index());
    opts
}
