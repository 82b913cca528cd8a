use crate::error::{AppError, AppResult};
use crate::krm::KubeObject;

pub const PROFILE_GROUP: &str = "infra.nephio.org";
pub const PROFILE_VERSION: &str = "v1alpha1";
pub const PROFILE_KIND: &str = "ClusterScaleProfile";

/// Finds the ClusterScaleProfile with the given name. The whole list is
/// scanned and the last match wins.
pub fn resolve_profile<'a>(items: &'a [KubeObject], name: &str) -> AppResult<&'a KubeObject> {
    items
        .iter()
        .rev()
        .find(|item| {
            item.is_gvk(PROFILE_GROUP, PROFILE_VERSION, PROFILE_KIND) && item.name() == name
        })
        .ok_or_else(|| AppError::ProfileNotFound {
            group: PROFILE_GROUP,
            version: PROFILE_VERSION,
            name: name.to_string(),
        })
}

/// Reads `spec.siteDensity` from a resolved profile.
pub fn site_density(profile: &KubeObject) -> AppResult<String> {
    profile.nested_string(&["spec", "siteDensity"])
}
