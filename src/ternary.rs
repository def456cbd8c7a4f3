/// A ternary expression macro.  Rust's `if` is already an expression,
/// but `cargo fmt` splits it across five lines, and the table of
/// border cases in the energy and path-search code is far easier to
/// read when each case fits on one line.  Both arms are lazy, which
/// matters: the false arm frequently contains `x - 1` on an unsigned
/// coordinate that is only safe because the condition guards it.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
