//! Window layout and the play field derived from it
//!
//! The window holds a header (title, score, timer), the play field, and a
//! footer row for the restart button. The play field is what is left after
//! removing that chrome.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub header_height: f32,
    pub margin: f32,
    pub footer_height: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            padding: PADDING,
            header_height: HEADER_HEIGHT,
            margin: MARGIN,
            footer_height: FOOTER_HEIGHT,
        }
    }
}

impl Layout {
    /// Same chrome, different window size
    pub fn with_window(&self, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..*self
        }
    }

    /// Window minus header, footer and side padding
    pub fn play_field(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.padding, self.header_height + self.padding),
            Vec2::new(
                self.width - self.padding,
                self.height - self.footer_height - self.margin - self.padding,
            ),
        )
    }

    /// True when the window size is finite and within `MAX_WINDOW_EXTENT`,
    /// the chrome sizes are finite and non-negative, and the play field has
    /// positive area
    pub fn is_playable(&self) -> bool {
        let window_ok = [self.width, self.height]
            .iter()
            .all(|&d| d.is_finite() && d <= MAX_WINDOW_EXTENT);
        let chrome_ok = [self.padding, self.header_height, self.margin, self.footer_height]
            .iter()
            .all(|&c| c.is_finite() && c >= 0.0);
        if !window_ok || !chrome_ok {
            return false;
        }
        let size = self.play_field().size();
        size.x > 0.0 && size.y > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_play_field() {
        let field = Layout::default().play_field();
        assert_eq!(field.min, Vec2::new(50.0, 150.0));
        assert_eq!(field.max, Vec2::new(750.0, 460.0));
        assert!(field.contains(Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn test_resized_window() {
        let layout = Layout::default().with_window(1200.0, 800.0);
        assert_eq!(layout.play_field().max, Vec2::new(1150.0, 660.0));
        assert!(layout.is_playable());

        let cramped = Layout::default().with_window(90.0, 250.0);
        assert!(!cramped.is_playable());
    }

    #[test]
    fn test_unusable_window_sizes() {
        let base = Layout::default();
        assert!(!base.with_window(f32::INFINITY, 600.0).is_playable());
        assert!(!base.with_window(800.0, f32::NAN).is_playable());
        assert!(!base.with_window(f32::MAX, f32::MAX).is_playable());
        assert!(base.with_window(MAX_WINDOW_EXTENT, MAX_WINDOW_EXTENT).is_playable());

        let negative_chrome = Layout {
            padding: -1.0e30,
            ..Layout::default()
        };
        assert!(!negative_chrome.is_playable());
    }
}
