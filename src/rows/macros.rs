/// Generates the typed interface of one row shape.
///
/// ```
/// rusty_rows::row_interface! {
///     /// `PUBLIC.V_2603`
///     pub shape V2603("PUBLIC.V_2603"): IV2603, V2603Pojo {
///         col1: i64 = "COL1",
///         col4: i64 = "COL4",
///     }
/// }
///
/// use rusty_rows::rows::RowCopy;
///
/// let mut a = V2603Pojo::default();
/// a.set_col1(7);
/// let mut b = rusty_rows::rows::Record::<V2603>::new();
/// b.copy_from(&a);
/// assert_eq!(b.col1(), Some(7));
/// ```
///
/// This expands to:
/// - the shape marker `V2603` implementing `RowShape`
/// - the field enum `V2603Field` with one variant per field in order
/// - the accessor trait `IV2603`, implemented for every row of the shape
/// - the plain struct `V2603Pojo` with one `Option` field per field
///
/// A field may name the table it references: `parent: RowId = "PARENT_ID" references "AA"`.
#[macro_export]
macro_rules! row_interface {
    (
        $(#[$meta:meta])*
        $vis:vis shape $shape:ident($name:literal): $iface:ident, $pojo:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty = $column:literal $(references $target:literal)?
            ),* $(,)?
        }
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis struct $shape;

            impl $crate::rows::RowShape for $shape {
                const NAME: &'static str = $name;
                const FIELDS: &'static [$crate::rows::Field] = &[
                    $(
                        $crate::rows::Field::new(
                            $column,
                            <$ty as $crate::rows::FieldValue>::TYPE,
                        ) $(.references($target))?
                    ),*
                ];
            }

            /// Fields of the shape in declaration order.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis enum [<$shape Field>] {
                $([<$field:camel>]),*
            }

            impl [<$shape Field>] {
                pub const ALL: &'static [Self] = &[$(Self::[<$field:camel>]),*];

                pub const fn index(self) -> usize {
                    self as usize
                }

                pub fn from_index(index: usize) -> Option<Self> {
                    Self::ALL.get(index).copied()
                }

                pub fn field(self) -> &'static $crate::rows::Field {
                    &<$shape as $crate::rows::RowShape>::FIELDS[self.index()]
                }
            }

            /// Typed getters and setters, implemented for every row of the shape.
            $vis trait $iface: $crate::rows::Row<Shape = $shape> {
                $(
                    $(#[$field_meta])*
                    fn $field(&self) -> Option<$ty> {
                        self.get([<$shape Field>]::[<$field:camel>].index()).into_field()
                    }

                    fn [<set_ $field>](&mut self, value: impl Into<Option<$ty>>) {
                        self.set(
                            [<$shape Field>]::[<$field:camel>].index(),
                            $crate::rows::Value::from_field(value.into()),
                        );
                    }
                )*
            }

            impl<T: $crate::rows::Row<Shape = $shape> + ?Sized> $iface for T {}

            /// Plain value holder, one optional field per column.
            #[derive(Debug, Clone, Default, PartialEq)]
            $vis struct $pojo {
                $(
                    $(#[$field_meta])*
                    pub $field: Option<$ty>,
                )*
            }

            impl $crate::rows::Row for $pojo {
                type Shape = $shape;

                fn get(&self, index: usize) -> $crate::rows::Value {
                    match [<$shape Field>]::from_index(index) {
                        $(
                            Some([<$shape Field>]::[<$field:camel>]) => {
                                $crate::rows::Value::from_field(self.$field.clone())
                            }
                        )*
                        None => $crate::rows::Value::Null,
                    }
                }

                fn set(&mut self, index: usize, value: $crate::rows::Value) {
                    match [<$shape Field>]::from_index(index) {
                        $(
                            Some([<$shape Field>]::[<$field:camel>]) => {
                                self.$field = value.into_field();
                            }
                        )*
                        None => {}
                    }
                }
            }
        }
    };
}
