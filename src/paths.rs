//! Pure token/filename helpers. Nothing here touches the filesystem.

/// 10^width. Caller keeps `width` in 1..=9 so this stays in `u32`.
pub fn pow10(width: u32) -> u32 {
    let mut limit = 1u32;
    for _ in 0..width {
        limit *= 10;
    }
    limit
}

/// Renders `token` as a fixed number of decimal digits, zero-padded on the
/// left so lexical order matches integral order. `limit` is 10^width and
/// `token` must be below it.
///
/// Works by rendering `limit + token` (always one digit wider than the
/// field) and dropping the synthetic leading '1'.
pub fn padded_token(token: u32, limit: u32) -> String {
    let s = (limit + token).to_string();
    s[1..].to_string()
}

pub fn filename(prefix: &str, token: &str, postfix: &str) -> String {
    format!("{prefix}{token}{postfix}")
}
