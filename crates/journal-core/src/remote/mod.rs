//! Client side of the entry service.
//!
//! - `RemoteClient`: one HTTP request per operation, typed `RemoteError`s
//! - `LenientClient`: logs failures and returns `None` instead
//! - `RemoteStore`: `EntryStore` implementation over `RemoteClient`

mod client;
mod lenient;
mod store;

pub use client::RemoteClient;
pub use lenient::LenientClient;
pub use store::RemoteStore;
