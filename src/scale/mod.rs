pub mod config_map;
pub mod deployment;
pub mod profile;

use tracing::info;

use crate::config::FunctionConfig;
use crate::error::AppResult;
use crate::krm::ResourceList;

/// Applies the configured scale profile to the ResourceList's items.
///
/// Policies run in declared order and the first failure aborts the run.
/// Mutations made before the failure stay in `list`.
pub fn run(list: &mut ResourceList) -> AppResult<()> {
    let config = match list.function_config.as_ref() {
        Some(function_config) => FunctionConfig::decode(function_config)?,
        None => FunctionConfig::default(),
    };
    config.validate()?;

    let profile = profile::resolve_profile(&list.items, &config.profile_name)?.clone();
    info!(
        profile = %config.profile_name,
        config_maps = config.config_maps.len(),
        deployments = config.deployments.len(),
        "resolved scale profile"
    );

    for policy in &config.config_maps {
        let target = config_map::resolve_config_map(&mut list.items, &policy.name)?;
        config_map::apply_scale_key(target, &profile, policy)?;
    }

    for policy in &config.deployments {
        deployment::apply_scale_policy(&mut list.items, &profile, policy)?;
    }

    Ok(())
}
