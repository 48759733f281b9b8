/// Transaction isolation level; controls the degree of locking that occurs
/// when selecting data.
///
/// See <https://en.wikipedia.org/wiki/Isolation_(database_systems)#Isolation_levels>.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsolationLevel {
    /// The lowest isolation level. Dirty reads are allowed, so one transaction
    /// may see **not yet committed** changes made by other transactions.
    ReadUncommitted,

    /// A `SELECT` query will only see data that has been committed before the
    /// query began.
    ReadCommitted,

    /// A `SELECT` query will only see data committed before the transaction
    /// began.
    RepeatableRead,

    Serializable,
}

impl IsolationLevel {
    /// Map the literal forms the server reports through session tracking.
    ///
    /// Any other literal is an unknown level and maps to `None`.
    pub(crate) fn from_session_value(value: &str) -> Option<Self> {
        match value {
            "REPEATABLE-READ" => Some(Self::RepeatableRead),
            "READ-UNCOMMITTED" => Some(Self::ReadUncommitted),
            "READ-COMMITTED" => Some(Self::ReadCommitted),
            "SERIALIZABLE" => Some(Self::Serializable),

            _ => None,
        }
    }
}
