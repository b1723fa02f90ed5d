use crate::config::{BREAKPOINT_MEDIUM, BREAKPOINT_WIDE};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportTier {
    Narrow,
    Medium,
    Wide,
}

impl ViewportTier {
    pub fn classify(width: f64) -> Self {
        if width < BREAKPOINT_MEDIUM {
            ViewportTier::Narrow
        } else if width < BREAKPOINT_WIDE {
            ViewportTier::Medium
        } else {
            ViewportTier::Wide
        }
    }

    pub fn layout(self) -> TierLayout {
        match self {
            // top centre, close under the menu
            ViewportTier::Narrow => TierLayout {
                camera_distance: 16.0,
                group_position: Vec3::new(0.0, 2.5, 0.0),
                group_scale: 0.55,
            },
            ViewportTier::Medium => TierLayout {
                camera_distance: 14.0,
                group_position: Vec3::new(2.0, 1.2, 0.0),
                group_scale: 0.5,
            },
            // right of the headline
            ViewportTier::Wide => TierLayout {
                camera_distance: 12.0,
                group_position: Vec3::new(3.5, -0.5, 0.0),
                group_scale: 0.8,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierLayout {
    pub camera_distance: f32,
    pub group_position: Vec3,
    pub group_scale: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(ViewportTier::classify(0.0), ViewportTier::Narrow);
        assert_eq!(ViewportTier::classify(767.0), ViewportTier::Narrow);
        assert_eq!(ViewportTier::classify(767.9), ViewportTier::Narrow);
        assert_eq!(ViewportTier::classify(768.0), ViewportTier::Medium);
        assert_eq!(ViewportTier::classify(1023.0), ViewportTier::Medium);
        assert_eq!(ViewportTier::classify(1024.0), ViewportTier::Wide);
        assert_eq!(ViewportTier::classify(2560.0), ViewportTier::Wide);
    }

    #[test]
    fn each_tier_is_distinct() {
        let narrow = ViewportTier::Narrow.layout();
        let medium = ViewportTier::Medium.layout();
        let wide = ViewportTier::Wide.layout();
        assert_ne!(narrow, medium);
        assert_ne!(medium, wide);
        assert_eq!(wide.camera_distance, 12.0);
        assert_eq!(narrow.group_scale, 0.55);
    }
}
