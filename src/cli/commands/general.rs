//! General commands - the roster as the form's supplier tabs would show it.

use super::new_table;
use crate::cli::AppContext;

/// Lists every supplier with its products, ids and photo links.
#[must_use]
pub fn suppliers(ctx: &AppContext) -> String {
    let mut table = new_table(&["Proveedor", "ID proveedor", "Producto", "ID producto", "Foto"]);

    for (supplier, product) in ctx.roster.products() {
        table.add_row(vec![
            supplier.name.as_str(),
            supplier.id.as_str(),
            product.name.as_str(),
            product.id.as_str(),
            product.image.as_deref().unwrap_or("-"),
        ]);
    }

    table.to_string()
}
