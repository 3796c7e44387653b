//! Per-session storefront state.

use std::sync::Arc;
use std::time::Duration;

use kallpa_commerce::cart::{CartAction, CartPricing, CartState, CartStore, PricingPolicy};
use kallpa_commerce::catalog::{Catalog, Product};
use kallpa_commerce::checkout::{CheckoutStep, CheckoutWizard, Order, OrderConfirmation};
use kallpa_commerce::search::{
    filter_products, FilterCriteria, OverlayKey, OverlayOutcome, PageLink, SearchOverlay,
};
use kallpa_commerce::CommerceError;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::account::Account;
use crate::auth::{AuthSession, Authenticator, Credentials};
use crate::config::StorefrontConfig;
use crate::gateway::{OrderGateway, SimulatedGateway};
use crate::pages::{ProductPage, ProductSelection};
use crate::StorefrontError;

/// Everything one browsing session owns.
///
/// The UI holds a `Storefront` and passes it by reference; the catalog is
/// the only piece shared between sessions.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    cart: CartStore,
    criteria: FilterCriteria,
    search: SearchOverlay,
    checkout: CheckoutWizard,
    session: Option<AuthSession>,
    orders: Vec<Order>,
    pricing: PricingPolicy,
    processing_delay: Duration,
}

/// Returns the wizard to Review if placement is abandoned before `disarm`,
/// including when the `place_order` future is dropped mid-flight.
struct PlacementGuard<'a> {
    wizard: &'a mut CheckoutWizard,
    armed: bool,
}

impl<'a> PlacementGuard<'a> {
    fn new(wizard: &'a mut CheckoutWizard) -> Self {
        Self {
            wizard,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PlacementGuard<'_> {
    fn drop(&mut self) {
        if self.armed && self.wizard.is_processing() {
            self.wizard.abort_placement();
            warn!("order placement abandoned");
        }
    }
}

impl Storefront {
    /// Start a session over a shared catalog.
    ///
    /// The catalog must be priced in the configured currency.
    pub fn new(catalog: Arc<Catalog>, config: &StorefrontConfig) -> Result<Self, StorefrontError> {
        let currency = config.currency()?;
        if let Some(catalog_currency) = catalog.currency() {
            if catalog_currency != currency {
                return Err(StorefrontError::Config(format!(
                    "catalog is priced in {}, config currency is {}",
                    catalog_currency, currency
                )));
            }
        }
        Ok(Self {
            catalog,
            cart: CartStore::new(currency),
            criteria: FilterCriteria::default().with_price_range(config.price_range()),
            search: SearchOverlay::new(PageLink::defaults()),
            checkout: CheckoutWizard::new(),
            session: None,
            orders: Vec::new(),
            pricing: config.pricing_policy(),
            processing_delay: config.checkout.processing_delay(),
        })
    }

    /// Start a session over the embedded sample catalog.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, StorefrontError> {
        let catalog = Catalog::sample_in(config.currency()?)?;
        Self::new(Arc::new(catalog), config)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // Cart

    pub fn cart(&self) -> &CartState {
        self.cart.state()
    }

    pub fn dispatch(&mut self, action: CartAction) {
        self.cart.dispatch(action);
    }

    /// Subtotal, shipping, tax and total for the current cart.
    pub fn pricing(&self) -> Result<CartPricing, StorefrontError> {
        Ok(CartPricing::calculate(self.cart.state(), &self.pricing)?)
    }

    // Catalog page

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    /// Products matching the current criteria, sorted.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter_products(self.catalog.products(), &self.criteria)
    }

    // Product page

    pub fn product_page(&self, id: &str) -> ProductPage<'_> {
        match self.catalog.find(id) {
            Some(product) => ProductPage::Found(product),
            None => ProductPage::NotFound,
        }
    }

    /// Add the selected size and color of a product to the cart.
    pub fn add_selection(
        &mut self,
        product_id: &str,
        selection: &ProductSelection,
    ) -> Result<(), StorefrontError> {
        let product = self.catalog.get(product_id)?;
        let action = selection.to_action(product)?;
        self.cart.dispatch(action);
        Ok(())
    }

    // Search overlay

    pub fn search(&self) -> &SearchOverlay {
        &self.search
    }

    pub fn open_search(&mut self) {
        self.search.open();
    }

    pub fn close_search(&mut self) {
        self.search.close();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query, self.catalog.products());
    }

    pub fn search_key(&mut self, key: OverlayKey) -> OverlayOutcome {
        self.search.handle_key(key)
    }

    // Checkout

    pub fn checkout(&self) -> &CheckoutWizard {
        &self.checkout
    }

    /// Form access for binding shipping and payment inputs.
    pub fn checkout_mut(&mut self) -> &mut CheckoutWizard {
        &mut self.checkout
    }

    pub fn checkout_advance(&mut self) -> Result<CheckoutStep, StorefrontError> {
        Ok(self.checkout.advance()?)
    }

    pub fn checkout_back(&mut self) -> Result<CheckoutStep, StorefrontError> {
        Ok(self.checkout.go_back()?)
    }

    /// Start a fresh checkout after a completed one.
    pub fn restart_checkout(&mut self) {
        if !self.checkout.is_processing() {
            self.checkout = CheckoutWizard::new();
        }
    }

    /// The simulated gateway with the configured processing delay.
    pub fn simulated_gateway(&self) -> SimulatedGateway {
        SimulatedGateway::new(self.processing_delay)
    }

    /// Place the order on the Review step.
    ///
    /// On success the wizard completes, the cart is cleared and the order is
    /// kept in the account history. On failure or cancellation the wizard
    /// returns to Review and the cart is left untouched; dropping the
    /// returned future does the same.
    pub async fn place_order(
        &mut self,
        gateway: &dyn OrderGateway,
        cancel: &CancellationToken,
    ) -> Result<OrderConfirmation, StorefrontError> {
        let mut order = self
            .checkout
            .begin_placement(self.cart.state(), &self.pricing)?;
        let mut guard = PlacementGuard::new(&mut self.checkout);
        info!(
            order_id = %order.id,
            customer = %order.shipping.full_name(),
            items = order.item_count(),
            total = %order.grand_total(),
            "placing order"
        );

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(CommerceError::OrderCancelled),
            result = gateway.submit(&order) => result,
        };

        match outcome {
            Ok(confirmation) => {
                guard.wizard.complete(confirmation.clone())?;
                guard.disarm();
                self.cart.dispatch(CartAction::Clear);
                order.confirm();
                info!(order_id = %order.id, "order confirmed");
                self.orders.push(order);
                Ok(confirmation)
            }
            Err(e) => {
                guard.wizard.abort_placement();
                drop(guard);
                warn!(order_id = %order.id, error = %e, "order placement failed");
                Err(e.into())
            }
        }
    }

    // Account

    pub fn login(
        &mut self,
        authenticator: &dyn Authenticator,
        credentials: &Credentials,
    ) -> Result<&AuthSession, StorefrontError> {
        let session = authenticator.authenticate(credentials)?;
        info!(email = %session.user.email, "logged in");
        Ok(self.session.insert(session))
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(email = %session.user.email, "logged out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    /// The account area; requires a session.
    pub fn account(&self) -> Result<Account<'_>, StorefrontError> {
        let session = self
            .session
            .as_ref()
            .ok_or(StorefrontError::Unauthenticated)?;
        Ok(Account {
            profile: &session.user,
            orders: &self.orders,
        })
    }

    /// Orders placed this session, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}
