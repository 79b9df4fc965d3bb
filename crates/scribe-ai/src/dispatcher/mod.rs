//! Request dispatcher: the state machine between the palette and the
//! completion endpoint.
//!
//! Every dispatch gets a fresh [`RequestId`](scribe_common::RequestId).
//! Messages tagged with any other id are dropped, so only the most recent
//! request can ever reach the document, and superseded requests are
//! cancelled as soon as a newer one starts.

mod controller;
mod lifecycle;
mod state;

pub use controller::Dispatcher;
pub use state::{DispatchEvent, DispatchState};
