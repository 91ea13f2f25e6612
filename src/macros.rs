pub use const_str::{concat, convert_ascii_case};

/// Builds a `where` clause for an entity query, checking at compile time
/// that the named fields exist on the entity struct. Snake-case field
/// names are converted to the wire's `UpperCamel` form.
///
/// ```
/// use qbo_concepts::qb_where_clause;
/// use qbo_concepts::types::Account;
///
/// let clause = qb_where_clause!(Account | account_type = "Bank");
/// assert_eq!(clause, "where AccountType = 'Bank'");
/// ```
#[macro_export]
macro_rules! qb_where_clause {
    (_OP =) => {" = '"};
    (_OP like) => {" like '"};
    (_OP in) => {" in '"};
    (_OP $op:tt) => { compile_error!("Invalid Operator") };

    (_TYPECHECK $struct_name:ident, $($field:ident),+) => {
        {
            // Compiler doesn't include this in the binary,
            // just uses it to make sure the fields exist
            const _: () = {
                fn dummy(v: $struct_name) {
                    $(
                        let _ = v.$field;
                    )+
                }
            };
        }
    };

    (_CLAUSE $($field:ident $op:tt $value:literal),+) => {
        {
            $crate::macros::concat!(
                "where ",
                $(
                    $crate::macros::convert_ascii_case!(upper_camel, stringify!($field)),
                    ' ',
                    stringify!($op),
                    " '",
                    $value,
                    "' and ",
                )+
            ).trim_end_matches(" and ")
        }
    };

    (_CLAUSE $($field:ident $op:tt $value:expr),+) => {
        {
            let mut _values = String::from("where ");
            $(
                _values += $crate::macros::convert_ascii_case!(upper_camel, stringify!($field));
                _values += " ";
                _values += stringify!($op);
                _values += " '";
                _values += &($value).to_string();
                _values += "' and ";
            )+
            _values.truncate(_values.len() - 5);
            _values
        }
    };

    ($struct_name:ident | $($field:ident $op:tt $value:expr),+) => {
        {
            $crate::qb_where_clause!(_TYPECHECK $struct_name, $($field),+);
            $crate::qb_where_clause!(_CLAUSE $($field $op $value),+)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::types::{Account, AccountSubType, AccountType};

    #[test]
    fn literal_values_build_a_static_clause() {
        let clause = qb_where_clause!(Account | account_type = "Bank");
        assert_eq!(clause, "where AccountType = 'Bank'");
    }

    #[test]
    fn expression_values_build_at_runtime() {
        let clause = qb_where_clause!(
            Account | account_type = AccountType::Income,
            account_sub_type = AccountSubType::SalesOfProductIncome
        );
        assert_eq!(
            clause,
            "where AccountType = 'Income' and AccountSubType = 'SalesOfProductIncome'"
        );
    }
}
