//! Trajectory and frame level transform configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Goal relabeling strategy understood by the data pipeline
pub const GOAL_RELABEL_UNIFORM: &str = "uniform";

/// Task augmentation strategy understood by the data pipeline
pub const TASK_AUGMENT_DELETE: &str = "delete_task_conditioning";

/// Random resized crop parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomResizedCropSpec {
    /// Area scale range sampled per crop
    pub scale: [f64; 2],
    /// Aspect ratio range sampled per crop
    pub ratio: [f64; 2],
}

/// Photometric and geometric augmentation stack for one camera slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAugmentSpec {
    pub random_resized_crop: RandomResizedCropSpec,
    pub random_brightness: Vec<f64>,
    pub random_contrast: Vec<f64>,
    pub random_saturation: Vec<f64>,
    pub random_hue: Vec<f64>,
    /// Order in which the augmentations above are applied
    pub augment_order: Vec<String>,
}

impl ImageAugmentSpec {
    /// Augmentation stack used for the workspace camera during finetuning.
    pub fn workspace_camera() -> Self {
        Self {
            random_resized_crop: RandomResizedCropSpec {
                scale: [0.8, 1.0],
                ratio: [0.9, 1.1],
            },
            random_brightness: vec![0.1],
            random_contrast: vec![0.9, 1.1],
            random_saturation: vec![0.9, 1.1],
            random_hue: vec![0.05],
            augment_order: vec![
                "random_resized_crop".to_string(),
                "random_brightness".to_string(),
                "random_contrast".to_string(),
                "random_saturation".to_string(),
                "random_hue".to_string(),
            ],
        }
    }
}

/// Parameters for the task augmentation strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAugmentSpec {
    /// Probability of keeping the goal image when a trajectory has both
    /// image and language conditioning
    pub keep_image_prob: f64,
}

/// Goal relabeling and chunking applied per trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajTransformSpec {
    /// Observation frames per window
    pub window_size: usize,
    /// Future actions predicted per step
    pub action_horizon: usize,
    /// Goal relabeling strategy, or `None` to disable relabeling
    #[serde(default)]
    pub goal_relabeling_strategy: Option<String>,
    /// Task conditioning augmentation strategy
    pub task_augment_strategy: String,
    /// Parameters for the task augmentation strategy
    pub task_augment_kwargs: TaskAugmentSpec,
}

/// Per-frame image resizing and augmentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameTransformSpec {
    /// Camera slot to (height, width) resize target
    pub resize_size: HashMap<String, (u32, u32)>,
    /// Camera slot to augmentation stack
    pub image_augment_kwargs: HashMap<String, ImageAugmentSpec>,
}

impl FrameTransformSpec {
    /// 224x224 workspace camera with the standard augmentation stack.
    pub fn workspace_default() -> Self {
        Self {
            resize_size: HashMap::from([("primary".to_string(), (224, 224))]),
            image_augment_kwargs: HashMap::from([(
                "primary".to_string(),
                ImageAugmentSpec::workspace_camera(),
            )]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_camera_augment_stack() {
        let aug = ImageAugmentSpec::workspace_camera();
        assert_eq!(aug.random_resized_crop.scale, [0.8, 1.0]);
        assert_eq!(aug.random_resized_crop.ratio, [0.9, 1.1]);
        assert_eq!(aug.random_brightness, vec![0.1]);
        assert_eq!(aug.random_hue, vec![0.05]);
        assert_eq!(aug.augment_order.len(), 5);
        assert_eq!(aug.augment_order[0], "random_resized_crop");
    }

    #[test]
    fn test_augment_order_matches_declared_fields() {
        let aug = ImageAugmentSpec::workspace_camera();
        assert_eq!(
            aug.augment_order,
            vec![
                "random_resized_crop",
                "random_brightness",
                "random_contrast",
                "random_saturation",
                "random_hue",
            ]
        );
    }

    #[test]
    fn test_workspace_default_frame_transform() {
        let frame = FrameTransformSpec::workspace_default();
        assert_eq!(frame.resize_size.get("primary"), Some(&(224, 224)));
        assert!(frame.image_augment_kwargs.contains_key("primary"));
    }

    #[test]
    fn test_resize_size_serializes_as_pair() {
        let frame = FrameTransformSpec::workspace_default();
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["resize_size"]["primary"][0], 224);
        assert_eq!(json["resize_size"]["primary"][1], 224);
    }

    #[test]
    fn test_traj_transform_round_trip() {
        let traj = TrajTransformSpec {
            window_size: 1,
            action_horizon: 4,
            goal_relabeling_strategy: Some(GOAL_RELABEL_UNIFORM.to_string()),
            task_augment_strategy: TASK_AUGMENT_DELETE.to_string(),
            task_augment_kwargs: TaskAugmentSpec {
                keep_image_prob: 0.5,
            },
        };
        let yaml = serde_yaml::to_string(&traj).unwrap();
        let back: TrajTransformSpec = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, traj);
    }

    #[test]
    fn test_disabled_relabeling_serializes_as_null() {
        let traj = TrajTransformSpec {
            window_size: 1,
            action_horizon: 4,
            goal_relabeling_strategy: None,
            task_augment_strategy: TASK_AUGMENT_DELETE.to_string(),
            task_augment_kwargs: TaskAugmentSpec {
                keep_image_prob: 0.0,
            },
        };
        let yaml = serde_yaml::to_string(&traj).unwrap();
        assert!(yaml.contains("goal_relabeling_strategy: null"));
    }
}
