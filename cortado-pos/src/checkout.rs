//! Order submission flow
//!
//! Idle -> Submitting -> Settled(Success | Failure). Preconditions are
//! checked before anything leaves the device; once a submission is in
//! flight, the cart is cleared and the guest is routed to the table's order
//! view regardless of outcome, so a failed call never strands the guest on
//! a broken cart screen. A failed submission shows an ambiguous-outcome
//! message and uses a longer delay before navigating; it is not retried.

use crate::cart::Cart;
use crate::guard::{Destination, Navigator};
use async_trait::async_trait;
use cortado_client::{ApiClient, ClientResult};
use shared::models::{Order, OrderCreate, OrderItemCreate};
use std::time::Duration;
use thiserror::Error;

/// Narrow seam over order creation so the flow can run against the real
/// API client or a test double
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit_order(&self, payload: OrderCreate) -> ClientResult<Order>;
}

#[async_trait]
impl OrderSubmitter for ApiClient {
    async fn submit_order(&self, payload: OrderCreate) -> ClientResult<Order> {
        self.create_order(&payload).await
    }
}

/// Precondition violation; the flow stays Idle and nothing is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Please select a table before ordering")]
    NoTableSelected,
    #[error("Your cart is empty")]
    EmptyCart,
    #[error("Please enter your name")]
    BlankGuestName,
}

/// How a submission settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Result of a settled submission
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub outcome: Outcome,
    /// The server's order object on success
    pub order: Option<Order>,
    /// Message shown to the guest
    pub message: String,
    /// Pause before navigating to the table's order view
    pub delay: Duration,
}

/// Flow state
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    Idle,
    Submitting,
    Settled(Settlement),
}

/// Guest order submission flow for one table session
#[derive(Debug)]
pub struct CheckoutFlow {
    cart: Cart,
    table_id: Option<String>,
    guest_name: String,
    review_open: bool,
    state: CheckoutState,
    success_delay: Duration,
    failure_delay: Duration,
}

impl CheckoutFlow {
    /// Pause before navigation after a confirmed order
    pub const SUCCESS_DELAY: Duration = Duration::from_millis(1500);
    /// Longer pause after an unconfirmed order, so the guest reads the message
    pub const FAILURE_DELAY: Duration = Duration::from_millis(3000);

    pub fn new() -> Self {
        Self {
            cart: Cart::new(),
            table_id: None,
            guest_name: String::new(),
            review_open: false,
            state: CheckoutState::Idle,
            success_delay: Self::SUCCESS_DELAY,
            failure_delay: Self::FAILURE_DELAY,
        }
    }

    /// Override the navigation delays (tests shorten these)
    pub fn with_delays(mut self, success: Duration, failure: Duration) -> Self {
        self.success_delay = success;
        self.failure_delay = failure;
        self
    }

    pub fn select_table(&mut self, table_id: impl Into<String>) {
        self.table_id = Some(table_id.into());
    }

    pub fn table_id(&self) -> Option<&str> {
        self.table_id.as_deref()
    }

    pub fn set_guest_name(&mut self, name: impl Into<String>) {
        self.guest_name = name.into();
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn open_review(&mut self) {
        self.review_open = true;
    }

    pub fn close_review(&mut self) {
        self.review_open = false;
    }

    pub fn is_review_open(&self) -> bool {
        self.review_open
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Validate preconditions without submitting
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.table_id.is_none() {
            return Err(CheckoutError::NoTableSelected);
        }
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if self.guest_name.trim().is_empty() {
            return Err(CheckoutError::BlankGuestName);
        }
        Ok(())
    }

    /// Submit the cart as a new order
    ///
    /// On a precondition violation, no request is issued and the cart is
    /// untouched. Otherwise the cart and guest name are cleared whatever the
    /// server says, the settlement message is exposed via state, and after
    /// the settlement's delay the guest is navigated to the table's order
    /// view. An error or empty response settles as Failure.
    pub async fn submit(
        &mut self,
        submitter: &dyn OrderSubmitter,
        navigator: &dyn Navigator,
    ) -> Result<Settlement, CheckoutError> {
        self.validate()?;
        let Some(table_id) = self.table_id.clone() else {
            return Err(CheckoutError::NoTableSelected);
        };

        self.state = CheckoutState::Submitting;
        let payload = OrderCreate {
            table_id: table_id.clone(),
            guest_name: Some(self.guest_name.trim().to_string()),
            items: self
                .cart
                .lines()
                .iter()
                .map(|line| OrderItemCreate {
                    product_id: line.product.id.clone(),
                    quantity: line.quantity as i32,
                })
                .collect(),
        };

        let result = submitter.submit_order(payload).await;

        self.cart.clear();
        self.guest_name.clear();
        self.review_open = false;

        let settlement = match result {
            Ok(order) => {
                tracing::info!(order_id = %order.id, table_id = %table_id, "Order submitted");
                Settlement {
                    outcome: Outcome::Success,
                    order: Some(order),
                    message: "Order placed! It will be with you shortly.".to_string(),
                    delay: self.success_delay,
                }
            }
            Err(err) => {
                tracing::warn!(table_id = %table_id, "Order submission failed: {}", err);
                Settlement {
                    outcome: Outcome::Failure,
                    order: None,
                    message: "We could not confirm your order. Please check with the staff."
                        .to_string(),
                    delay: self.failure_delay,
                }
            }
        };

        self.state = CheckoutState::Settled(settlement.clone());

        tokio::time::sleep(settlement.delay).await;
        navigator.navigate(Destination::TableOrders { table_id });

        Ok(settlement)
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}
