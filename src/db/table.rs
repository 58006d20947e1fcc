/// Errors surfaced by table operations.
///
/// Expected outcomes (missing rows, duplicate keys) are reported through
/// the `Ok` value of each operation; this type only carries failures the
/// caller has to treat as fatal or as "not implemented".
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("{operation} is not supported by table `{table}`")]
    Unsupported {
        table: &'static str,
        operation: &'static str,
    },

    #[error("{operation} failed on table `{table}`")]
    Store {
        table: &'static str,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl TableError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, TableError::Unsupported { .. })
    }
}

/// Single-table persistence contract over an entity `T` keyed by `K`.
///
/// Implementations borrow a connection owned by the caller and never close it.
/// `create_table` and the row reads are best-effort: store failures come back
/// as `false` or an empty result. Writes return `Err` on unexpected failures.
#[allow(async_fn_in_trait)]
pub trait Table<T, K> {
    /// Fixed name of the backing table.
    fn table_name(&self) -> &'static str;

    /// `true` if the table was created, `false` on any failure (including
    /// when it already exists).
    async fn create_table(&mut self) -> bool;

    async fn drop_table(&mut self) -> Result<bool, TableError>;

    async fn find_by_primary_key(&mut self, key: K) -> Option<T>;

    /// Every row, in the order the store returns them.
    async fn find_all(&mut self) -> Vec<T>;

    /// Inserts a new row. `Ok(false)` if the primary key is already taken.
    async fn save(&mut self, entity: &T) -> Result<bool, TableError>;

    /// Rewrites the non-key fields of the row matching the entity's key.
    /// `Ok(true)` only if a row changed.
    async fn update(&mut self, _entity: &T) -> Result<bool, TableError> {
        Err(TableError::Unsupported {
            table: self.table_name(),
            operation: "update",
        })
    }

    /// `Ok(true)` only if a row was removed.
    async fn delete(&mut self, key: K) -> Result<bool, TableError>;
}
