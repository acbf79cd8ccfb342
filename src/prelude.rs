//! Wavecart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{AddOutcome, CartError, CartItem, CartLineItem, CartStore},
    categories::{CategoryStore, LoadStatus, LoadTicket},
    checkout::{CheckoutError, place_order},
    favorites::FavoritesStore,
    highlights::{featured_products, pick_highlight},
    listeners::{ListenerKey, Listeners},
    orders::{Order, OrderStore},
    pagination::{DEFAULT_PAGE_SIZE, Pagination, PaginationError, REVIEWS_PER_PAGE},
    pricing::{discounted_unit_price, format_usd, line_total},
    products::{Category, Product, ProductId, Review, StarRating},
    receipt::{ReceiptError, write_cart_receipt},
    search::{SearchState, SearchTicket},
    session::{Identity, SessionStore},
    sorting::{Sort, SortKey, SortOrder},
};
