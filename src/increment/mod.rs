/// Adds one to `x`.
///
/// `i64::MAX` wraps around to `i64::MIN`, in debug and release builds alike.
pub fn add_one(x: i64) -> i64 {
    x.wrapping_add(1)
}
