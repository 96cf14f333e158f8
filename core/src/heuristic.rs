/// Root zone every Front Door endpoint lives under.
pub const FRONT_DOOR_ZONE: &str = ".azurefd.net";

const MIN_SUFFIX_LEN: usize = 10;

pub fn is_front_door_endpoint(cname: &str) -> bool {
    cname.contains(FRONT_DOOR_ZONE)
}

/// Detects the random suffix Front Door appends to generated endpoint names,
/// as in `contoso-d4hbg7f2c3evgwbx.z01.azurefd.net`.
///
/// Only the last hyphen-separated segment of the first label is inspected. It
/// counts as a suffix when it is longer than ten characters and holds a digit.
/// Hand-picked names can match and generated ones can slip through.
pub fn has_auto_generated_suffix(cname: &str) -> bool {
    let label = cname.split('.').next().unwrap_or_default();
    let last = label.rsplit('-').next().unwrap_or_default();
    last.len() > MIN_SUFFIX_LEN && last.chars().any(|c| c.is_ascii_digit())
}
