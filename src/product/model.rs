//! Product record shape
//!
//! Field order here is the field order of the persisted JSON document.
//! Missing fields decode to their empty value so that callers may omit
//! ids and let the store assign them.

use serde::{Deserialize, Serialize};

use super::id::IdGenerator;

/// A purchasable option (variant) of a product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub id: String,
}

/// An image attached to a product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub id: String,
}

/// The top-level persisted record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub options: Vec<ProductOption>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Product {
    /// Create a product with a name and no options or images
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder: set an explicit id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder: append an option with the given sku
    pub fn with_option(mut self, sku: impl Into<String>) -> Self {
        self.options.push(ProductOption {
            sku: sku.into(),
            id: String::new(),
        });
        self
    }

    /// Builder: append an image with the given url
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(Image {
            url: url.into(),
            id: String::new(),
        });
        self
    }

    /// Fill every empty id (product, options, images) from `ids`.
    ///
    /// Ids that are already set are left untouched.
    pub fn assign_ids(&mut self, ids: &dyn IdGenerator) {
        if self.id.is_empty() {
            self.id = ids.next_id();
        }
        for option in self.options.iter_mut().filter(|o| o.id.is_empty()) {
            option.id = ids.next_id();
        }
        for image in self.images.iter_mut().filter(|i| i.id.is_empty()) {
            image.id = ids.next_id();
        }
    }

    /// True when the product and all nested entities carry an id
    pub fn is_fully_identified(&self) -> bool {
        !self.id.is_empty()
            && self.options.iter().all(|o| !o.id.is_empty())
            && self.images.iter().all(|i| !i.id.is_empty())
    }
}
