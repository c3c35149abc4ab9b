use serde::{Deserialize, Serialize};

/// A bookable offering listed on the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: u32,
    pub category: String,
    pub image: String,
    pub available: bool,
}

/// Creation payload: a `Service` minus the server-assigned `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: u32,
    pub category: String,
    pub image: String,
    pub available: bool,
}

/// Partial update. Provided fields overwrite, absent fields are preserved;
/// `id` is immutable and cannot be patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServicePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl Service {
    pub fn apply(&mut self, patch: ServicePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
    }
}
