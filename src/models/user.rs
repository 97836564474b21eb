use diesel::prelude::*;
use uuid::Uuid;

/// User row as stored in the `usuarios` table.
///
/// The same struct is used for SELECT (`Queryable`/`Selectable`), INSERT
/// (`Insertable`) and full-row UPDATE (`AsChangeset`, which leaves the
/// primary key out of the SET clause).
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::usuarios)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: Uuid,
    #[diesel(column_name = nome)]
    pub name: String,
    pub email: String,
    /// Stored exactly as supplied by the client.
    #[diesel(column_name = senha)]
    pub password: String,
}
