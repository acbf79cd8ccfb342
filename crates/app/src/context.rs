//! Storefront Context

use std::{fmt, sync::Arc};

use jiff::SignedDuration;
use rand::Rng;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use wavecart::{
    cart::{AddOutcome, CartError, CartItem, CartStore},
    categories::{CategoryStore, LoadTicket},
    checkout::{self, CheckoutError},
    favorites::FavoritesStore,
    highlights::pick_highlight,
    orders::{Order, OrderStore},
    products::{Category, Product, ProductId},
    session::{Identity, SessionStore},
};

use crate::{
    auth::{AuthError, AuthService, Credentials, FirebaseAuthClient, SignUp},
    catalog::{CatalogError, CatalogService, HttpCatalogClient, PageQuery},
    config::AppConfig,
    notices::{Notice, Notices},
    shared::Shared,
};

/// Products fetched for the home page to pick a highlight from.
pub const FEATURED_POOL_SIZE: u32 = 30;

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build catalog client")]
    Catalog(#[source] CatalogError),
}

/// Collaborators and store handles for one storefront process.
///
/// Every store starts empty. Handles are cheap to clone and can be passed to
/// views and background tasks.
#[derive(Clone)]
pub struct Storefront {
    pub catalog: Arc<dyn CatalogService>,
    pub auth: Arc<dyn AuthService>,
    pub cart: Shared<CartStore>,
    pub favorites: Shared<FavoritesStore>,
    pub orders: Shared<OrderStore>,
    pub session: Shared<SessionStore>,
    pub categories: Shared<CategoryStore>,
    pub notices: Shared<Notices>,
}

impl fmt::Debug for Storefront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("cart", &self.cart)
            .field("favorites", &self.favorites)
            .field("orders", &self.orders)
            .field("session", &self.session)
            .field("categories", &self.categories)
            .finish_non_exhaustive()
    }
}

impl Storefront {
    pub fn new(catalog: Arc<dyn CatalogService>, auth: Arc<dyn AuthService>) -> Self {
        Self {
            catalog,
            auth,
            cart: Shared::default(),
            favorites: Shared::default(),
            orders: Shared::default(),
            session: Shared::default(),
            categories: Shared::default(),
            notices: Shared::default(),
        }
    }

    /// Build a storefront over the HTTP catalog and Firebase auth.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let catalog = HttpCatalogClient::new(config.catalog.client_config())
            .map_err(AppInitError::Catalog)?;
        let auth = FirebaseAuthClient::new(config.auth.firebase_config());

        let ttl = SignedDuration::from_secs(
            i64::try_from(config.storefront.notice_ttl_seconds).unwrap_or(i64::MAX),
        );

        Ok(Self {
            notices: Shared::new(Notices::new(ttl)),
            ..Self::new(Arc::new(catalog), Arc::new(auth))
        })
    }

    fn notify(&self, notice: impl Into<Notice>) {
        self.notices.update(|notices| notices.push(notice));
    }

    /// Load categories once.
    ///
    /// Returns `false` without fetching when a load has already started or
    /// finished. Dropping the returned future mid-request fails the load.
    pub async fn load_categories(&self) -> bool {
        let Some(ticket) = self.categories.update(CategoryStore::begin_load) else {
            debug!("categories already requested");

            return false;
        };

        let load = CategoryLoad {
            categories: self.categories.clone(),
            ticket: Some(ticket),
        };

        let result = self.catalog.list_categories().await;

        if let Err(error) = &result {
            warn!(%error, "failed to load categories");

            self.notify(error);
        }

        load.finish(result.map_err(|error| error.to_string()));

        true
    }

    /// Pick a random featured product from the first
    /// [`FEATURED_POOL_SIZE`] catalog products.
    ///
    /// Returns `None` when none of them is featured.
    pub async fn highlight<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Option<Product>, CatalogError> {
        let page = self
            .catalog
            .list_products(PageQuery::new(FEATURED_POOL_SIZE, 0))
            .await?;

        Ok(pick_highlight(&page.products, rng).cloned())
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// # Errors
    ///
    /// Returns the cart's rejection. A notice is queued either way.
    pub fn add_to_cart(&self, product: &Product, quantity: u32) -> Result<AddOutcome, CartError> {
        self.add_cart_item(CartItem::from(product), quantity)
    }

    /// Add one more unit of a line already in the cart.
    ///
    /// Returns `None` when no line has `id`.
    pub fn increase_quantity(&self, id: ProductId) -> Option<Result<AddOutcome, CartError>> {
        let item = self.cart.read(|cart| {
            cart.get(id).map(|line| CartItem {
                id: line.id(),
                title: line.title().to_string(),
                price: line.unit_price(),
                discount_percentage: line.discount_percentage(),
                stock: line.stock(),
                thumbnail: line.thumbnail().to_string(),
            })
        })?;

        Some(self.add_cart_item(item, 1))
    }

    fn add_cart_item(&self, item: CartItem, quantity: u32) -> Result<AddOutcome, CartError> {
        let result = self.cart.update(|cart| cart.add_item(item, quantity));

        match &result {
            Ok(outcome) => self.notify(outcome),
            Err(error) => self.notify(error),
        }

        result
    }

    pub fn decrease_quantity(&self, id: ProductId) -> bool {
        self.cart.update(|cart| cart.decrease_quantity(id))
    }

    pub fn remove_from_cart(&self, id: ProductId) -> bool {
        self.cart.update(|cart| cart.remove_item(id)).is_some()
    }

    pub fn clear_cart(&self) {
        self.cart.update(CartStore::clear);
    }

    /// Add or remove `product` from favorites. Returns whether it is now a
    /// favorite.
    pub fn toggle_favorite(&self, product: Product) -> bool {
        self.favorites.update(|favorites| favorites.toggle(product))
    }

    pub fn clear_favorites(&self) {
        let cleared = self.favorites.update(|favorites| {
            let had_items = !favorites.is_empty();

            favorites.clear();

            had_items
        });

        if cleared {
            self.notify(Notice::success("All favorite items cleared!"));
        } else {
            self.notify(Notice::warning("No favorite items to clear!"));
        }
    }

    /// Sign in and record the identity in the session.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection after queuing a notice.
    pub async fn sign_in(&self, credentials: Credentials) -> Result<Identity, AuthError> {
        match self.auth.sign_in(credentials).await {
            Ok(identity) => {
                self.session.update(|session| session.sign_in(identity.clone()));

                Ok(identity)
            }
            Err(error) => {
                self.notify(&error);

                Err(error)
            }
        }
    }

    /// Register and record the new identity in the session.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection after queuing a notice.
    pub async fn sign_up(&self, sign_up: SignUp) -> Result<Identity, AuthError> {
        match self.auth.sign_up(sign_up).await {
            Ok(identity) => {
                self.session.update(|session| session.sign_in(identity.clone()));

                Ok(identity)
            }
            Err(error) => {
                self.notify(&error);

                Err(error)
            }
        }
    }

    /// Sign out and clear the session.
    ///
    /// # Errors
    ///
    /// Returns the provider's error. The local session is cleared regardless.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let result = self.auth.sign_out().await;

        self.session.update(SessionStore::sign_out);

        result
    }

    /// Keep the session in step with the identity provider.
    ///
    /// The task ends when the provider drops its side of the channel.
    pub fn bind_session(&self) -> JoinHandle<()> {
        let mut identities = self.auth.subscribe();
        let session = self.session.clone();

        let current = identities.borrow_and_update().clone();
        session.update(|store| store.apply(current));

        tokio::spawn(async move {
            while identities.changed().await.is_ok() {
                let identity = identities.borrow_and_update().clone();

                debug!(signed_in = identity.is_some(), "identity changed");

                session.update(|store| store.apply(identity));
            }
        })
    }

    /// Place an order from the cart, then clear the cart.
    ///
    /// # Errors
    ///
    /// Returns the checkout rejection after queuing a notice.
    pub fn place_order(&self) -> Result<Order, CheckoutError> {
        let result = {
            let session = self.session.lock();
            let mut cart = self.cart.lock();
            let mut orders = self.orders.lock();

            checkout::place_order(&session, &mut cart, &mut orders)
        };

        match &result {
            Ok(order) => {
                info!(order = order.id, total = %order.total_amount, "order placed");

                self.notify(Notice::success("Order placed successfully!"));
            }
            Err(error) => self.notify(error),
        }

        result
    }
}

/// Error recorded when a category load is dropped before it completes.
pub const CATEGORY_LOAD_CANCELLED: &str = "category load cancelled";

/// A started category load. Dropped unfinished, it records a failure so the
/// store never stays `Loading`.
struct CategoryLoad {
    categories: Shared<CategoryStore>,
    ticket: Option<LoadTicket>,
}

impl CategoryLoad {
    fn finish(mut self, result: Result<Vec<Category>, String>) {
        if let Some(ticket) = self.ticket.take() {
            self.categories.update(|store| store.finish_load(ticket, result));
        }
    }
}

impl Drop for CategoryLoad {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            warn!("category load dropped before completing");

            self.categories.update(|store| {
                store.finish_load(ticket, Err(CATEGORY_LOAD_CANCELLED.to_string()));
            });
        }
    }
}
