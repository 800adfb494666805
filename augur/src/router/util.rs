use augur_core::{AugurError, Capability};

/// Collapse a set of per-source errors into a uniform `AugurError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `NotFound` → `NotFound(not_found_what)`.
/// - If exactly one source failed → that error.
/// - Else → `AllSourcesFailed(errors)`.
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    mut errors: Vec<AugurError>,
    not_found_what: String,
) -> AugurError {
    if !attempted_any {
        return AugurError::unsupported(capability.as_str());
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, AugurError::NotFound { .. }))
    {
        return AugurError::not_found(not_found_what);
    }
    if errors.len() == 1
        && let Some(only) = errors.pop()
    {
        return only;
    }
    AugurError::AllSourcesFailed(errors)
}
