pub fn assert_type<T>(_: &T) {}

#[allow(unused_macros)]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub(crate) use current_location;

/// Fatal precondition check. Violations indicate programmer error, not
/// recoverable runtime conditions.
#[allow(unused_macros)]
macro_rules! check {
    ($lhs:expr) => {{
        $crate::assert::assert_type::<bool>(&$lhs);
        if !$lhs {
            panic!(
                "check failed: {}: {}",
                $crate::assert::current_location!(),
                stringify!($lhs),
            );
        }
    }};
}
#[allow(unused_imports)]
pub(crate) use check;
