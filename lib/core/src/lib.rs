//! Core routing model for hashnav.
//!
//! This crate provides the framework-independent pieces of hash-based
//! client-side routing:
//!
//! - **Location**: the normalized path carried in the URL fragment
//! - **Route table**: exact path to view bindings
//! - **Dispatcher**: the current location and the view it selects
//! - **History / Navigator**: push/replace navigation over a fragment store
//! - **Links**: navigation entries and the click interception policy

pub mod dispatcher;
pub mod error;
pub mod history;
pub mod link;
pub mod location;
pub mod navigator;
pub mod route;

pub use dispatcher::Dispatcher;
pub use error::{HistoryError, Result, RouteError};
pub use history::{History, MemoryHistory};
pub use link::{LinkClick, NavLink};
pub use location::Location;
pub use navigator::{NavigationMode, Navigator};
pub use route::{Route, RouteTable, RouteTableBuilder};
