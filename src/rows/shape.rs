use super::field::Field;

/// Type-level contract of a row: its name and its fields in declaration order.
///
/// Two types are compatible for copying exactly when they implement
/// [`Row`](super::Row) with the same shape.
pub trait RowShape: 'static {
    const NAME: &'static str;
    const FIELDS: &'static [Field];

    fn len() -> usize {
        Self::FIELDS.len()
    }

    /// Field names match ignoring ASCII case, like unquoted SQL identifiers.
    fn index_of(name: &str) -> Option<usize> {
        Self::FIELDS.iter().position(|f| f.is_named(name))
    }

    fn field(name: &str) -> Option<&'static Field> {
        Self::FIELDS.iter().find(|f| f.is_named(name))
    }
}
