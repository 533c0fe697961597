/// Generates one `#[test]` per listed async test function and per enabled
/// driver. Each function takes the driver's [`Setup`](crate::Setup).
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+
    ) => {
        #[cfg(feature = "sqlite")]
        mod sqlite {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::CascadeTest::new(
                        $crate::db::sqlite::SetupSqlite::new()
                    );

                    test.run_test(|setup| async move {
                        super::$f(setup).await;
                    });
                }
            )*
        }
    };
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident,
        )+
    ) => {
        $crate::tests!( $(
            $( #[$attrs] )*
            $f
        ),+ );
    }
}
