//! Roster entities - the fixed set of providers and the products each one owns.
//!
//! The roster only feeds the intake form. Analytics never joins back against it,
//! so a product removed from the roster still reports under the names that were
//! copied into its historical entries.

use serde::{Deserialize, Serialize};

/// A product sold by exactly one provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identifier (e.g. "coca-600")
    pub id: String,
    /// Display name (e.g. "Coca 600ml")
    pub name: String,
    /// Optional photo shown next to the product in the form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A supplier together with the products it delivers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Stable identifier (e.g. "coca")
    pub id: String,
    /// Display name (e.g. "Coca")
    pub name: String,
    /// Products owned by this provider, in form order
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Provider {
    /// Looks up one of this provider's products by id.
    #[must_use]
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }
}

/// The complete provider roster, in tab order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// All known providers
    pub suppliers: Vec<Provider>,
}

impl Roster {
    /// Finds a provider by id.
    #[must_use]
    pub fn supplier(&self, supplier_id: &str) -> Option<&Provider> {
        self.suppliers.iter().find(|s| s.id == supplier_id)
    }

    /// The provider shown first, which is the active one when nothing was chosen.
    #[must_use]
    pub fn first_supplier(&self) -> Option<&Provider> {
        self.suppliers.first()
    }

    /// Iterates every product together with its owning provider.
    pub fn products(&self) -> impl Iterator<Item = (&Provider, &Product)> {
        self.suppliers
            .iter()
            .flat_map(|s| s.products.iter().map(move |p| (s, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::roster::default_roster;

    #[test]
    fn test_supplier_lookup() {
        let roster = default_roster();
        assert_eq!(roster.supplier("baires").map(|s| s.name.as_str()), Some("Baires"));
        assert!(roster.supplier("pepsi").is_none());
        assert_eq!(roster.first_supplier().map(|s| s.id.as_str()), Some("coca"));
    }

    #[test]
    fn test_product_lookup_is_scoped_to_provider() {
        let roster = default_roster();
        let coca = roster.supplier("coca");
        assert!(coca.and_then(|s| s.product("coca-15")).is_some());
        assert!(coca.and_then(|s| s.product("baires-agua")).is_none());
    }

    #[test]
    fn test_products_iterates_whole_roster() {
        let roster = default_roster();
        let ids: Vec<&str> = roster.products().map(|(_, p)| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "coca-600",
                "coca-15",
                "baires-agua",
                "baires-soda",
                "brancor-queso",
                "brancor-yogur"
            ]
        );
    }
}
