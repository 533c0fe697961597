/// Defines a newtype index into one of the schema's vectors.
macro_rules! id_type {
    ($( #[$attrs:meta] )* $name:ident) => {
        $( #[$attrs] )*
        #[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
        pub struct $name(pub usize);

        impl core::fmt::Debug for $name {
            fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(fmt, "{}({})", stringify!($name), self.0)
            }
        }
    };
}
