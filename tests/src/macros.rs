#[macro_export]
macro_rules! models {
    (
        $( $model:ident => $table:expr ),* $(,)?
    ) => {{
        let mut builder = tabula::Db::builder();
        $( builder.register::<$model>($table); )*
        builder
    }};
}

#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+ $(,)?
    ) => {
        #[cfg(feature = "sqlite")]
        mod sqlite {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::DbTest::new(
                        $crate::db::sqlite::SetupSqlite::new()
                    );

                    super::$f(&mut test);
                }
            )*
        }

        #[cfg(feature = "postgresql")]
        mod postgresql {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::DbTest::new(
                        $crate::db::postgresql::SetupPostgreSQL::new()
                    );

                    super::$f(&mut test);
                }
            )*
        }
    };
}
