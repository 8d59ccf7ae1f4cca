//! Roster configuration loading from a TOML file.
//!
//! The file lists `[[suppliers]]` tables, each with nested `[[suppliers.products]]`.
//! When no file is present the built-in roster is used.

use crate::{
    entities::{Product, Provider, Roster},
    errors::{Error, Result},
};
use std::{collections::HashSet, path::Path};

/// Loads and validates a roster from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or required fields are missing
/// - The roster fails validation (see [`validate_roster`])
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load roster from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read roster file {}: {e}", path_ref.display()),
    })?;

    let roster: Roster = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse roster file {}: {e}", path_ref.display()),
    })?;

    validate_roster(&roster)?;
    Ok(roster)
}

/// Loads the roster at `path`, or the built-in roster when the file does not exist.
pub fn load_roster_or_default<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let path_ref = path.as_ref();
    if path_ref.exists() {
        load_roster(path_ref)
    } else {
        tracing::info!(
            "No roster file at {}, using built-in roster",
            path_ref.display()
        );
        Ok(default_roster())
    }
}

/// Checks the structural rules of a roster.
///
/// # Errors
/// Returns [`Error::Config`] when the roster is empty, an id or name is blank,
/// a supplier id repeats, or a product id appears more than once anywhere in
/// the roster (each product belongs to exactly one provider).
pub fn validate_roster(roster: &Roster) -> Result<()> {
    if roster.suppliers.is_empty() {
        return Err(config_error("Roster must define at least one supplier"));
    }

    let mut supplier_ids = HashSet::new();
    let mut product_ids = HashSet::new();

    for supplier in &roster.suppliers {
        if supplier.id.trim().is_empty() || supplier.name.trim().is_empty() {
            return Err(config_error("Supplier id and name cannot be empty"));
        }
        if !supplier_ids.insert(supplier.id.as_str()) {
            return Err(config_error(&format!(
                "Duplicate supplier id '{}'",
                supplier.id
            )));
        }

        for product in &supplier.products {
            if product.id.trim().is_empty() || product.name.trim().is_empty() {
                return Err(config_error(&format!(
                    "Product id and name cannot be empty (supplier '{}')",
                    supplier.id
                )));
            }
            if !product_ids.insert(product.id.as_str()) {
                return Err(config_error(&format!(
                    "Duplicate product id '{}'",
                    product.id
                )));
            }
        }
    }

    Ok(())
}

fn config_error(message: &str) -> Error {
    Error::Config {
        message: message.to_string(),
    }
}

fn product(id: &str, name: &str, image: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        image: Some(image.to_string()),
    }
}

/// The built-in roster: three suppliers with two products each.
#[must_use]
pub fn default_roster() -> Roster {
    Roster {
        suppliers: vec![
            Provider {
                id: "coca".to_string(),
                name: "Coca".to_string(),
                products: vec![
                    product(
                        "coca-600",
                        "Coca 600ml",
                        "https://images.unsplash.com/photo-1629203851122-3726ecdf080e?auto=format&fit=crop&w=400&q=80",
                    ),
                    product(
                        "coca-15",
                        "Coca 1.5L",
                        "https://images.unsplash.com/photo-1596803244618-8c4f0ef4dbe8?auto=format&fit=crop&w=400&q=80",
                    ),
                ],
            },
            Provider {
                id: "baires".to_string(),
                name: "Baires".to_string(),
                products: vec![
                    product(
                        "baires-agua",
                        "Agua Baires",
                        "https://images.unsplash.com/photo-1548839140-29a749e1cf4d?auto=format&fit=crop&w=400&q=80",
                    ),
                    product(
                        "baires-soda",
                        "Soda Baires",
                        "https://images.unsplash.com/photo-1581006852262-e4307cf6283a?auto=format&fit=crop&w=400&q=80",
                    ),
                ],
            },
            Provider {
                id: "brancor".to_string(),
                name: "Brancor".to_string(),
                products: vec![
                    product(
                        "brancor-queso",
                        "Queso Cremoso",
                        "https://images.unsplash.com/photo-1552767059-ce182ead6c1b?auto=format&fit=crop&w=400&q=80",
                    ),
                    product(
                        "brancor-yogur",
                        "Yogur Firme",
                        "https://images.unsplash.com/photo-1488477181946-6428a0291777?auto=format&fit=crop&w=400&q=80",
                    ),
                ],
            },
        ],
    }
}
