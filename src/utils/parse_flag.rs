/// Read a yes/no value from a form field or query parameter.
///
/// Blank or absent values fall back to `default`; anything outside the
/// usual truthy spellings counts as `false`.
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return default;
    };
    ["1", "true", "yes", "on"]
        .iter()
        .any(|truthy| raw.eq_ignore_ascii_case(truthy))
}
