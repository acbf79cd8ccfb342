//! Checkout

use thiserror::Error;

use crate::{
    cart::CartStore,
    orders::{Order, OrderStore},
    session::SessionStore,
};

/// Reasons an order cannot be placed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    /// No user is signed in.
    #[error("you must be signed in to place an order")]
    NotLoggedIn,

    /// The cart has no lines.
    #[error("your cart is empty")]
    EmptyCart,
}

/// Turn the cart into an order.
///
/// The order is appended to `orders` before the cart is cleared, so a
/// rejected checkout leaves both stores untouched.
///
/// # Errors
///
/// - [`CheckoutError::NotLoggedIn`]: `session` has no identity.
/// - [`CheckoutError::EmptyCart`]: `cart` has no lines.
pub fn place_order(
    session: &SessionStore,
    cart: &mut CartStore,
    orders: &mut OrderStore,
) -> Result<Order, CheckoutError> {
    if !session.is_logged_in() {
        return Err(CheckoutError::NotLoggedIn);
    }

    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let order = orders.add_order(cart.total(), cart.titles());

    cart.clear();

    Ok(order)
}
