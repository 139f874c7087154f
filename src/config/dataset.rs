//! Dataset description handed to the training engine's data loader

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::module_ref::ModuleRef;
use super::normalization::NormalizationType;

/// Location of the lab pick episodes relative to the artifacts root
const BRAWN_DATA_SUBDIR: &str = "datasets/dobot_nova5/episodes_pick_bottled_sugar_lab";

/// Dataset identity, observation mapping, and normalization for one RLDS dataset.
///
/// Serialized field names are the data loader's contract and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSpec {
    /// Registered dataset name
    pub name: String,
    /// Directory containing the dataset
    pub data_dir: PathBuf,
    /// Camera slot to observation key mapping
    pub image_obs_keys: HashMap<String, String>,
    /// Proprio slot to observation key mapping
    #[serde(default)]
    pub proprio_obs_keys: HashMap<String, String>,
    /// Observation key holding the language instruction
    pub language_key: String,
    /// Normalization scheme applied to actions and proprio
    pub action_proprio_normalization_type: NormalizationType,
    /// Per-dimension selection of which action components are normalized
    pub action_normalization_mask: Vec<bool>,
    /// Standardization transform resolved by the training engine
    pub standardize_fn: ModuleRef,
}

impl DatasetSpec {
    /// The lab pick-bottled-sugar dataset rooted under `artifacts_root`.
    pub fn brawn_pick_bottled_sugar(artifacts_root: &Path) -> Self {
        Self {
            name: "episodes_pick_bottled_sugar_lab_first_60_openvla_rlds".to_string(),
            data_dir: artifacts_root.join(BRAWN_DATA_SUBDIR),
            image_obs_keys: HashMap::from([(
                "primary".to_string(),
                "static_rgb_image".to_string(),
            )]),
            proprio_obs_keys: HashMap::new(),
            language_key: "language_instruction".to_string(),
            action_proprio_normalization_type: NormalizationType::Normal,
            // gripper dimension stays unnormalized
            action_normalization_mask: vec![true, true, true, true, true, true, false],
            standardize_fn: ModuleRef::new(
                "crossformer.data.oxe.oxe_standardization_transforms",
                "brawn_dataset_transform",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brawn_dataset_defaults() {
        let root = Path::new("/tmp/artifacts");
        let ds = DatasetSpec::brawn_pick_bottled_sugar(root);

        assert_eq!(ds.name, "episodes_pick_bottled_sugar_lab_first_60_openvla_rlds");
        assert_eq!(
            ds.data_dir,
            root.join("datasets/dobot_nova5/episodes_pick_bottled_sugar_lab")
        );
        assert_eq!(
            ds.image_obs_keys.get("primary"),
            Some(&"static_rgb_image".to_string())
        );
        assert!(ds.proprio_obs_keys.is_empty());
        assert_eq!(ds.language_key, "language_instruction");
        assert_eq!(
            ds.action_proprio_normalization_type,
            NormalizationType::Normal
        );
    }

    #[test]
    fn test_mask_covers_single_arm_with_gripper_passthrough() {
        let ds = DatasetSpec::brawn_pick_bottled_sugar(Path::new("/tmp/a"));
        assert_eq!(ds.action_normalization_mask.len(), 7);
        assert!(!ds.action_normalization_mask[6]);
        assert!(ds.action_normalization_mask[..6].iter().all(|&m| m));
    }

    #[test]
    fn test_standardize_fn_reference() {
        let ds = DatasetSpec::brawn_pick_bottled_sugar(Path::new("/tmp/a"));
        assert_eq!(
            ds.standardize_fn.to_string(),
            "crossformer.data.oxe.oxe_standardization_transforms:brawn_dataset_transform"
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let ds = DatasetSpec::brawn_pick_bottled_sugar(Path::new("/tmp/a"));
        let json = serde_json::to_string(&ds).unwrap();
        for key in [
            "\"name\"",
            "\"data_dir\"",
            "\"image_obs_keys\"",
            "\"proprio_obs_keys\"",
            "\"language_key\"",
            "\"action_proprio_normalization_type\"",
            "\"action_normalization_mask\"",
            "\"standardize_fn\"",
        ] {
            assert!(json.contains(key), "missing field {key} in {json}");
        }
    }

    #[test]
    fn test_yaml_round_trip() {
        let ds = DatasetSpec::brawn_pick_bottled_sugar(Path::new("/tmp/a"));
        let yaml = serde_yaml::to_string(&ds).unwrap();
        let back: DatasetSpec = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, ds);
    }

    #[test]
    fn test_missing_proprio_keys_defaults_empty() {
        let yaml = r#"
name: custom
data_dir: /data/custom
image_obs_keys:
  primary: cam0
language_key: language_instruction
action_proprio_normalization_type: bounds
action_normalization_mask: [true, false]
standardize_fn:
  module: pkg.mod
  name: func
"#;
        let ds: DatasetSpec = serde_yaml::from_str(yaml).unwrap();
        assert!(ds.proprio_obs_keys.is_empty());
        assert_eq!(
            ds.action_proprio_normalization_type,
            NormalizationType::Bounds
        );
    }
}
