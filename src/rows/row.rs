use tracing::trace;

use super::{shape::RowShape, value::Value};

/// Positional access to the fields of a row.
///
/// `get` must return a value conforming to the declared type of the field at
/// `index` (or null). `set` stores a value of another type as null. Indexes
/// outside the shape read as null and writes to them are ignored.
pub trait Row {
    type Shape: RowShape;

    fn get(&self, index: usize) -> Value;

    fn set(&mut self, index: usize, value: Value);
}

/// Copies every field of `source` into `target` in declaration order.
pub fn copy_fields<S, A, B>(source: &A, target: &mut B)
where
    S: RowShape,
    A: Row<Shape = S> + ?Sized,
    B: Row<Shape = S> + ?Sized,
{
    trace!(shape = S::NAME, fields = S::len(), "copying row");
    for index in 0..S::len() {
        target.set(index, source.get(index));
    }
}

/// `from` / `into` for every row, bound to rows of the same shape.
pub trait RowCopy: Row {
    /// Loads every field from another row of the same shape.
    fn copy_from<R>(&mut self, source: &R)
    where
        R: Row<Shape = Self::Shape> + ?Sized,
    {
        copy_fields(source, self);
    }

    /// Copies every field into `target` and hands it back for chaining.
    fn copy_into<'t, E>(&self, target: &'t mut E) -> &'t mut E
    where
        E: Row<Shape = Self::Shape> + ?Sized,
    {
        copy_fields(self, target);
        target
    }
}

impl<T: Row + ?Sized> RowCopy for T {}
