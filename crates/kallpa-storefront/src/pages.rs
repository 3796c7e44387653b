//! Product detail page state.

use kallpa_commerce::cart::CartAction;
use kallpa_commerce::catalog::Product;

use crate::StorefrontError;

/// Result of resolving a `/products/{id}` route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductPage<'a> {
    Found(&'a Product),
    /// Unknown id; the UI renders "Product not found".
    NotFound,
}

impl<'a> ProductPage<'a> {
    pub fn product(&self) -> Option<&'a Product> {
        match self {
            ProductPage::Found(product) => Some(product),
            ProductPage::NotFound => None,
        }
    }
}

/// Size and color picked on the product page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSelection {
    pub size: Option<String>,
    pub color: Option<String>,
}

impl ProductSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Image to show: the selected color's variant when there is one.
    pub fn image<'a>(&self, product: &'a Product) -> &'a str {
        match &self.color {
            Some(color) => product.image_for_color(color),
            None => &product.image,
        }
    }

    /// Turn the selection into an add-to-cart action.
    ///
    /// Both size and color must be chosen and offered by the product.
    pub fn to_action(&self, product: &Product) -> Result<CartAction, StorefrontError> {
        let (size, color) = match (&self.size, &self.color) {
            (Some(size), Some(color)) => (size, color),
            (None, Some(_)) => return Err(StorefrontError::SelectionIncomplete("a size".into())),
            (Some(_), None) => return Err(StorefrontError::SelectionIncomplete("a color".into())),
            (None, None) => {
                return Err(StorefrontError::SelectionIncomplete(
                    "a size and a color".into(),
                ))
            }
        };

        if !product.has_size(size) {
            return Err(StorefrontError::UnavailableOption(format!("size {}", size)));
        }
        if !product.has_color(color) {
            return Err(StorefrontError::UnavailableOption(format!("color {}", color)));
        }

        Ok(CartAction::add(product.clone(), size.clone(), color.clone()))
    }
}
