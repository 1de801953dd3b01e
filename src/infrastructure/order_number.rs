use diesel::prelude::*;
use diesel::sql_types::BigInt;

use crate::domain::errors::DomainError;

#[derive(QueryableByName)]
struct NextVal {
    #[diesel(sql_type = BigInt)]
    nextval: i64,
}

/// Allocate the next order number, formatted `OD{n}`.
///
/// Backed by `order_number_seq` (1000..=999999), so numbers are unique by
/// construction and always match `^OD\d{4,6}$`. The source generated a
/// random 4-digit suffix with no uniqueness check; only that defect is
/// fixed, the format is unchanged.
pub fn next_order_number(conn: &mut PgConnection) -> Result<String, DomainError> {
    let row: NextVal =
        diesel::sql_query("SELECT nextval('order_number_seq') AS nextval").get_result(conn)?;
    Ok(format!("OD{}", row.nextval))
}
