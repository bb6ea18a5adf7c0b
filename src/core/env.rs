/// Fallback when neither `USER` nor `USERNAME` is set.
pub const UNKNOWN_USER: &str = "Unknown";

/// Current user name: `$USER`, then `$USERNAME`, then `"Unknown"`.
/// Empty values count as unset.
pub fn get_user_from_env() -> String {
    user_from_lookup(lossy_var)
}

/// Reads `key`, replacing any non-UTF-8 bytes instead of dropping the value.
pub fn lossy_var(key: &str) -> Option<String> {
    std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
}

pub fn user_from_lookup<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| {
            tracing::debug!("USER/USERNAME not set, falling back to {}", UNKNOWN_USER);
            UNKNOWN_USER.to_string()
        })
}
