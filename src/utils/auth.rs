/// Compare two secrets in constant time.
///
/// Runs over every byte of equal-length inputs so the comparison time does
/// not reveal the length of the matching prefix.
pub fn constant_time_eq(provided: &str, expected: &str) -> bool {
    provided.len() == expected.len()
        && provided
            .as_bytes()
            .iter()
            .zip(expected.as_bytes().iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

/// Check submitted admin credentials against the configured pair.
/// Both halves are always compared.
pub fn verify_credentials(
    username: &str,
    password: &str,
    expected_username: &str,
    expected_password: &str,
) -> bool {
    let username_ok = constant_time_eq(username, expected_username);
    let password_ok = constant_time_eq(password, expected_password);
    username_ok & password_ok
}
