use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::clients::CartClient;
use crate::domain::{Cart, CartItem, CustomizationOption, MenuItem};
use crate::error::CartError;
use crate::messages::{CartRequest, ServiceResponse};

/// Owns the single session cart. Every reply carries a snapshot, so callers
/// never observe the cart mid-mutation.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
}

impl CartService {
    pub fn new(buffer_size: usize) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            cart: Cart::default(),
        };
        let client = CartClient::new(sender);
        (service, client)
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddItem { item, quantity, selected_options, respond_to } => {
                    self.handle_add_item(item, quantity, selected_options, respond_to);
                }
                CartRequest::RemoveItem { item_id, respond_to } => {
                    self.handle_remove_item(item_id, respond_to);
                }
                CartRequest::SetQuantity { item_id, quantity, respond_to } => {
                    self.handle_set_quantity(item_id, quantity, respond_to);
                }
                CartRequest::Clear { respond_to } => {
                    self.handle_clear(respond_to);
                }
                CartRequest::GetCart { respond_to } => {
                    self.handle_get_cart(respond_to);
                }
                CartRequest::ItemCount { respond_to } => {
                    self.handle_item_count(respond_to);
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }
        info!("CartService stopped");
    }

    #[instrument(fields(item_id = %item.id, quantity = quantity), skip(self, item, selected_options, respond_to))]
    fn handle_add_item(
        &mut self,
        item: MenuItem,
        quantity: u32,
        selected_options: Vec<CustomizationOption>,
        respond_to: ServiceResponse<Cart, CartError>,
    ) {
        debug!("Processing add_item request");
        let result = self.add_item(item, quantity, selected_options);
        if let Err(e) = &result {
            error!(error = %e, "Add to cart rejected");
        }
        let _ = respond_to.send(result);
    }

    /// Validates the add and merges it into the cart. Lines merge only when
    /// the dish and the add-on selection both match; a different selection
    /// opens a new line.
    fn add_item(
        &mut self,
        item: MenuItem,
        quantity: u32,
        selected_options: Vec<CustomizationOption>,
    ) -> Result<Cart, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        if !item.is_available {
            return Err(CartError::ItemUnavailable(item.id));
        }
        if let Some(in_cart) = &self.cart.restaurant_id {
            if *in_cart != item.restaurant_id {
                return Err(CartError::DifferentRestaurant {
                    in_cart: in_cart.clone(),
                    attempted: item.restaurant_id.clone(),
                });
            }
        }
        item.validate_selection(&selected_options)?;

        self.cart.restaurant_id = Some(item.restaurant_id.clone());
        let existing = self
            .cart
            .items
            .iter_mut()
            .find(|line| line.matches(&item.id, &selected_options));
        match existing {
            Some(line) => line.quantity += quantity,
            None => self.cart.items.push(CartItem::new(item, quantity, selected_options)),
        }

        info!(item_count = self.cart.item_count(), "Cart updated");
        Ok(self.cart.clone())
    }

    /// Drops the first line carrying this dish.
    #[instrument(fields(item_id = %item_id), skip(self, respond_to))]
    fn handle_remove_item(&mut self, item_id: String, respond_to: ServiceResponse<Cart, CartError>) {
        debug!("Processing remove_item request");
        let result = match self.cart.items.iter().position(|line| line.menu_item.id == item_id) {
            Some(index) => {
                self.cart.items.remove(index);
                if self.cart.items.is_empty() {
                    self.cart.restaurant_id = None;
                }
                info!(item_count = self.cart.item_count(), "Item removed");
                Ok(self.cart.clone())
            }
            None => {
                error!("Item not in cart");
                Err(CartError::ItemNotInCart(item_id))
            }
        };
        let _ = respond_to.send(result);
    }

    /// Overwrites the quantity on the first line carrying this dish.
    /// Quantity zero removes the line.
    #[instrument(fields(item_id = %item_id, quantity = quantity), skip(self, respond_to))]
    fn handle_set_quantity(
        &mut self,
        item_id: String,
        quantity: u32,
        respond_to: ServiceResponse<Cart, CartError>,
    ) {
        debug!("Processing set_quantity request");
        let result = match self.cart.items.iter().position(|line| line.menu_item.id == item_id) {
            Some(index) => {
                if quantity == 0 {
                    self.cart.items.remove(index);
                    if self.cart.items.is_empty() {
                        self.cart.restaurant_id = None;
                    }
                } else {
                    self.cart.items[index].quantity = quantity;
                }
                info!(item_count = self.cart.item_count(), "Quantity updated");
                Ok(self.cart.clone())
            }
            None => {
                error!("Item not in cart");
                Err(CartError::ItemNotInCart(item_id))
            }
        };
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_clear(&mut self, respond_to: ServiceResponse<(), CartError>) {
        debug!("Processing clear request");
        self.cart = Cart::default();
        info!("Cart cleared");
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_cart(&self, respond_to: ServiceResponse<Cart, CartError>) {
        debug!("Processing get_cart request");
        let _ = respond_to.send(Ok(self.cart.clone()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_item_count(&self, respond_to: ServiceResponse<u32, CartError>) {
        debug!("Processing item_count request");
        let _ = respond_to.send(Ok(self.cart.item_count()));
    }
}
