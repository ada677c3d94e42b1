//! Generic entity services.
//!
//! A [`Service`] maps one [`Entity`](crate::entities::Entity) to QuickBooks
//! REST semantics without per-entity code:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `load(id)` | `GET {resource}/{id}` |
//! | `create(data)` | `POST {resource}` |
//! | `update(data)` | `POST {resource}?operation=update` |
//! | `delete(id, sync_token)` | `POST {resource}?operation=delete` |
//! | `query()` / `all()` | `GET query?query=SELECT ...` |
//!
//! Services never retry; transport failures reach the caller as
//! [`ServiceError::Transport`] unless a more specific variant applies.

mod descriptor;
mod errors;
mod service;

pub use descriptor::ResourceDescriptor;
pub use errors::{ServiceError, STALE_OBJECT_FAULT_CODE};
pub use service::Service;
