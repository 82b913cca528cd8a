use tracing::debug;

use crate::config::DeploymentScalePolicy;
use crate::error::AppResult;
use crate::krm::KubeObject;

/// Deployment scaling is not wired up yet: the policy is decoded and
/// validated, but nothing is read from or written to the resources.
pub fn apply_scale_policy(
    items: &mut [KubeObject],
    profile: &KubeObject,
    policy: &DeploymentScalePolicy,
) -> AppResult<()> {
    debug!(
        deployment = %policy.name,
        profile = profile.name(),
        resources = items.len(),
        "deployment scaling is a no-op"
    );
    Ok(())
}
