use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use catalog_core::{Entity, EntityId, ValidationError};

/// Maximum product name length, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum product description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new() -> Self {
        Self(EntityId::new())
    }

    pub fn from_string(value: impl Into<String>) -> Self {
        Self(EntityId::from_string(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Enabled,
    #[default]
    Disabled,
}

impl ProductStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::Enabled => "enabled",
            ProductStatus::Disabled => "disabled",
        }
    }

    /// Parse a persisted status value.
    ///
    /// An unset (empty) status is coerced to `Disabled`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "enabled" => Ok(ProductStatus::Enabled),
            "disabled" | "" => Ok(ProductStatus::Disabled),
            _ => Err(ValidationError::InvalidStatus),
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ProductStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Entity: Product.
///
/// Every constructor and mutator runs the full ordered validation
/// (id, name, name length, description length, status, price). A rejected
/// mutation leaves the product exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: f64,
    status: ProductStatus,
}

impl Product {
    /// Create a new product with a fresh id, `Disabled`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Result<Self, ValidationError> {
        let product = Self {
            id: ProductId::new(),
            name: name.into(),
            description: description.into(),
            price,
            status: ProductStatus::Disabled,
        };
        product.validate()?;
        Ok(product)
    }

    /// Rebuild a product read back from storage.
    ///
    /// `status` is the raw stored value; it is checked in its usual place in
    /// the validation order, after the text fields and before the price.
    pub fn reconstitute(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        status: &str,
    ) -> Result<Self, ValidationError> {
        let mut product = Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            status: ProductStatus::Disabled,
        };
        product.check_identity_and_text()?;
        product.status = ProductStatus::parse(status)?;
        product.check_price()?;
        Ok(product)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn is_enabled(&self) -> bool {
        self.status == ProductStatus::Enabled
    }

    /// Replace the identifier. Only storage adapters rebuilding a product
    /// should call this.
    pub fn set_id(&mut self, id: ProductId) {
        self.id = id;
    }

    /// Overwrite name and description.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        let description = description.into();
        self.mutate(|p| {
            p.name = name;
            p.description = description;
        })
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), ValidationError> {
        self.mutate(|p| p.price = price)
    }

    /// Enable the product.
    ///
    /// Only a priced product (`price > 0`) switches to `Enabled`. A free
    /// product keeps its current status; the call then reports the outcome
    /// of a plain validation pass.
    pub fn enable(&mut self) -> Result<(), ValidationError> {
        if self.price > 0.0 {
            self.status = ProductStatus::Enabled;
            return Ok(());
        }
        self.validate()
    }

    pub fn disable(&mut self) -> Result<(), ValidationError> {
        self.mutate(|p| p.status = ProductStatus::Disabled)
    }

    fn mutate(&mut self, change: impl FnOnce(&mut Self)) -> Result<(), ValidationError> {
        let mut candidate = self.clone();
        change(&mut candidate);
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    fn check_identity_and_text(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::InvalidId);
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong { max: MAX_NAME_LEN });
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::DescriptionTooLong {
                max: MAX_DESCRIPTION_LEN,
            });
        }
        Ok(())
    }

    fn check_price(&self) -> Result<(), ValidationError> {
        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.check_identity_and_text()?;
        // `status` is typed, so the status check cannot fail here; raw values
        // are checked in `reconstitute`.
        self.check_price()
    }
}
