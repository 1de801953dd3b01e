//! Catalog lookup: resolve variants and products into read-only snapshots.
//!
//! Runs on the caller's connection so lookups happen inside the same
//! transaction as the writes they guard.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::catalog::{ProductSnapshot, VariantSnapshot};
use crate::domain::errors::DomainError;
use crate::schema::{product_variants, products};

use super::models::{ProductRow, ProductVariantRow};

pub fn resolve_product(
    conn: &mut PgConnection,
    product_id: Uuid,
) -> Result<ProductSnapshot, DomainError> {
    let row = products::table
        .filter(products::id.eq(product_id))
        .select(ProductRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(DomainError::ProductMissing)?;

    Ok(ProductSnapshot {
        id: row.id,
        title: row.title,
        price: row.price,
    })
}

/// Resolve a variant together with its owning product. A variant without a
/// resolvable product is unusable and reported as `ProductMissing`, distinct
/// from the variant itself being absent.
pub fn resolve_variant(
    conn: &mut PgConnection,
    variant_id: Uuid,
) -> Result<VariantSnapshot, DomainError> {
    let row: ProductVariantRow = product_variants::table
        .filter(product_variants::id.eq(variant_id))
        .select(ProductVariantRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(DomainError::VariantNotFound(variant_id))?;

    let product_id = row.product_id.ok_or(DomainError::ProductMissing)?;
    let product = resolve_product(conn, product_id)?;

    Ok(VariantSnapshot {
        id: row.id,
        product,
        title: row.title,
        price: row.price,
        min_selling_quantity: row.min_selling_quantity,
        max_selling_quantity: row.max_selling_quantity,
        available_stock: row.available_stock,
    })
}
