use tracing::info;

use crate::config::ConfigMapScalePolicy;
use crate::error::{AppError, AppResult};
use crate::krm::KubeObject;

use super::profile;

const DATA_FIELD: &str = "data";

/// Finds the core/v1 ConfigMap with the given name. The first match wins.
pub fn resolve_config_map<'a>(
    items: &'a mut [KubeObject],
    name: &str,
) -> AppResult<&'a mut KubeObject> {
    items
        .iter_mut()
        .find(|item| item.is_gvk("", "v1", "ConfigMap") && item.name() == name)
        .ok_or_else(|| AppError::ConfigMapNotFound(name.to_string()))
}

/// Copies `data[key-<siteDensity>]` onto `data[key]`. The ConfigMap is left
/// untouched when the scaled key is missing.
pub fn apply_scale_key(
    config_map: &mut KubeObject,
    profile: &KubeObject,
    policy: &ConfigMapScalePolicy,
) -> AppResult<()> {
    let site_density = profile::site_density(profile)?;
    let scaled_key = policy.scaled_key(&site_density);
    let data = config_map.nested_string_map(&[DATA_FIELD])?;

    let Some(scaled_value) = data.get(&scaled_key) else {
        return Err(AppError::ScaledKeyNotFound {
            key: scaled_key,
            config_map: policy.name.clone(),
        });
    };

    config_map.set_nested_string(&[DATA_FIELD, policy.key.as_str()], scaled_value)?;
    info!(
        config_map = %policy.name,
        key = %policy.key,
        from = %scaled_key,
        "applied scale profile to ConfigMap"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(raw: &str) -> KubeObject {
        KubeObject::from_yaml(raw).expect("fixture should parse")
    }

    fn policy(name: &str, key: &str) -> ConfigMapScalePolicy {
        ConfigMapScalePolicy {
            name: name.to_string(),
            key: key.to_string(),
        }
    }

    #[test]
    fn copies_scaled_value_onto_key() {
        let profile = object("spec:\n  siteDensity: low\n");
        let mut config_map =
            object("kind: ConfigMap\ndata:\n  replicas-high: '10'\n  replicas-low: '2'\n");

        apply_scale_key(&mut config_map, &profile, &policy("cm1", "replicas"))
            .expect("apply should succeed");

        let data = config_map.nested_string_map(&["data"]).expect("data");
        assert_eq!(data["replicas"], "2");
        assert_eq!(data["replicas-low"], "2");
        assert_eq!(data["replicas-high"], "10");
    }

    #[test]
    fn missing_site_density_is_malformed() {
        let profile = object("kind: ClusterScaleProfile\nspec: {}\n");
        let mut config_map = object("kind: ConfigMap\ndata:\n  replicas-low: '2'\n");

        let result = apply_scale_key(&mut config_map, &profile, &policy("cm1", "replicas"));
        assert!(matches!(result, Err(AppError::MalformedField { .. })));
    }

    #[test]
    fn missing_data_reports_scaled_key() {
        let profile = object("spec:\n  siteDensity: medium\n");
        let mut config_map = object("kind: ConfigMap\nmetadata:\n  name: cm1\n");

        match apply_scale_key(&mut config_map, &profile, &policy("cm1", "replicas")) {
            Err(AppError::ScaledKeyNotFound { key, config_map }) => {
                assert_eq!(key, "replicas-medium");
                assert_eq!(config_map, "cm1");
            }
            other => panic!("expected scaled key error, got {other:?}"),
        }
        assert!(config_map.nested(&["data"]).is_none());
    }
}
