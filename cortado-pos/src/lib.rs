//! Cortado POS - front-of-house flow core
//!
//! View-layer state for the café dashboards and the guest QR ordering flow:
//! the shopping cart, the order submission flow, per-call loading/error
//! tracking, status badges, the navigation guard, and the order board.
//!
//! Everything here is single-flow view bookkeeping; durable state lives
//! behind the café API and is always re-adopted from server responses.

pub mod board;
pub mod call_state;
pub mod cart;
pub mod checkout;
pub mod guard;
pub mod status;

pub use board::OrderBoard;
pub use call_state::CallState;
pub use cart::{Cart, CartLine};
pub use checkout::{CheckoutError, CheckoutFlow, CheckoutState, Outcome, OrderSubmitter, Settlement};
pub use guard::{DashboardView, Destination, Navigator, RouteGuard, UnauthorizedHandler};
pub use status::{Badge, Tone};
