use crate::math::{Matrix, Point, transform_point, transform_points};
use crate::settings::Settings;
use winit::keyboard::ModifiersState;

/// Which transform a wheel notch drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelModifier {
    Plain,
    Control,
    Shift,
    Alt,
}

impl From<ModifiersState> for WheelModifier {
    fn from(state: ModifiersState) -> Self {
        if state.control_key() {
            WheelModifier::Control
        } else if state.shift_key() {
            WheelModifier::Shift
        } else if state.alt_key() {
            WheelModifier::Alt
        } else {
            WheelModifier::Plain
        }
    }
}

/// Cumulative scale, rotation and translation of the shape.
///
/// "Screen" here is the window-centred space produced before the
/// coordinate-system adjustment; translation is measured in its pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub scale: f32,
    /// Degrees, clockwise on screen.
    pub rotation: f32,
    pub translation: Point,
}

impl CanvasTransform {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            translation: Point::ORIGIN,
        }
    }

    /// Homogeneous `T · R · S`: scale first, then rotate, then translate.
    pub fn matrix(&self) -> Option<Matrix> {
        Matrix::translation(self.translation.x, self.translation.y)
            .multiply(&Matrix::homogeneous_rotation(self.rotation))?
            .multiply(&Matrix::scaling(self.scale))
    }

    pub fn canvas_to_screen(&self, canvas_pos: Point) -> Option<Point> {
        transform_point(&self.matrix()?, canvas_pos)
    }

    pub fn screen_to_canvas(&self, screen_pos: Point) -> Option<Point> {
        transform_point(&self.matrix()?.affine_inverse()?, screen_pos)
    }

    pub fn project(&self, points: &[Point]) -> Option<Vec<Point>> {
        transform_points(&self.matrix()?, points)
    }

    /// Applies `notches` wheel steps. `cursor` is in window-centred space.
    /// Returns false and leaves the state untouched when nothing changed or
    /// the new transform could not be built.
    pub fn apply_wheel(
        &mut self,
        notches: i32,
        modifier: WheelModifier,
        cursor: Point,
        settings: &Settings,
    ) -> bool {
        if notches == 0 {
            return false;
        }

        let steps = notches as f32;
        let mut next = *self;

        match modifier {
            WheelModifier::Control => {
                next.scale *= settings.scale_factor_per_notch.powi(notches);
            }
            WheelModifier::Shift => {
                next.rotation += steps * settings.rotation_deg_per_notch;
            }
            WheelModifier::Alt => {
                next.translation.x += steps * settings.translation_px_per_notch;
            }
            WheelModifier::Plain => {
                next.translation.y -= steps * settings.translation_px_per_notch;
            }
        }

        if matches!(modifier, WheelModifier::Control | WheelModifier::Shift) {
            // Keep the object point under the cursor where it was.
            let anchor = self.screen_to_canvas(cursor).unwrap_or(cursor);
            let Some(moved) = next.canvas_to_screen(anchor) else {
                log::warn!("Skipping wheel update: transform {:?} is unusable", next);
                return false;
            };
            next.translation = next.translation + (cursor - moved);
        }

        if !next.is_usable() {
            log::warn!("Skipping wheel update: transform {:?} is unusable", next);
            return false;
        }

        *self = next;
        true
    }

    /// Finite, non-zero scale and an invertible composed matrix.
    pub fn is_usable(&self) -> bool {
        self.scale.is_finite()
            && self.scale != 0.0
            && self.rotation.is_finite()
            && self.translation.x.is_finite()
            && self.translation.y.is_finite()
            && self
                .matrix()
                .and_then(|m| m.affine_inverse())
                .is_some()
    }

    pub fn hud_text(&self) -> String {
        format!(
            "Scale: {:.2}   Rotation: {:.1}°   Translation: {:.0}, {:.0}   |   Wheel: Ctrl=Zoom  Shift=Rotate  Alt=Pan X  None=Pan Y",
            self.scale, self.rotation, self.translation.x, self.translation.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::Shape;

    const EPSILON: f32 = 1e-3;

    fn assert_points_near(actual: &[Point], expected: &[Point]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(a.distance(*e) < EPSILON, "expected {:?}, got {:?}", e, a);
        }
    }

    #[test]
    fn test_identity_projection() {
        let shape = Shape::rectangle();
        let projected = CanvasTransform::new().project(shape.points()).unwrap();
        assert_eq!(projected, shape.points());
    }

    #[test]
    fn test_composition_order() {
        let transform = CanvasTransform {
            scale: 2.0,
            rotation: 90.0,
            translation: Point::new(100.0, 0.0),
        };
        // (10, 0) scales to (20, 0), rotates to (0, 20), then moves by +100 x.
        let p = transform.canvas_to_screen(Point::new(10.0, 0.0)).unwrap();
        assert!(p.distance(Point::new(100.0, 20.0)) < EPSILON);
    }

    #[test]
    fn test_wheel_up_then_down_restores_shape() {
        let shape = Shape::rectangle();
        let settings = Settings::default();
        let cursor = Point::new(37.0, -12.0);

        for modifier in [
            WheelModifier::Plain,
            WheelModifier::Control,
            WheelModifier::Shift,
            WheelModifier::Alt,
        ] {
            let mut transform = CanvasTransform {
                scale: 1.3,
                rotation: 20.0,
                translation: Point::new(-15.0, 40.0),
            };
            let before = transform.project(shape.points()).unwrap();

            assert!(transform.apply_wheel(3, modifier, cursor, &settings));
            assert!(transform.apply_wheel(-3, modifier, cursor, &settings));

            let after = transform.project(shape.points()).unwrap();
            assert_points_near(&after, &before);
        }
    }

    #[test]
    fn test_zoom_keeps_point_under_cursor() {
        let settings = Settings::default();
        let cursor = Point::new(120.0, -80.0);
        let mut transform = CanvasTransform::new();
        let anchor = transform.screen_to_canvas(cursor).unwrap();

        assert!(transform.apply_wheel(2, WheelModifier::Control, cursor, &settings));
        assert!((transform.scale - 1.21).abs() < 1e-5);
        let moved = transform.canvas_to_screen(anchor).unwrap();
        assert!(moved.distance(cursor) < EPSILON);
    }

    #[test]
    fn test_rotate_keeps_point_under_cursor() {
        let settings = Settings::default();
        let cursor = Point::new(-40.0, 25.0);
        let mut transform = CanvasTransform {
            scale: 0.8,
            rotation: -30.0,
            translation: Point::new(5.0, 5.0),
        };
        let anchor = transform.screen_to_canvas(cursor).unwrap();

        assert!(transform.apply_wheel(1, WheelModifier::Shift, cursor, &settings));
        assert!((transform.rotation - -15.0).abs() < 1e-5);
        let moved = transform.canvas_to_screen(anchor).unwrap();
        assert!(moved.distance(cursor) < EPSILON);
    }

    #[test]
    fn test_pan_directions() {
        let settings = Settings::default();
        let mut transform = CanvasTransform::new();

        assert!(transform.apply_wheel(1, WheelModifier::Alt, Point::ORIGIN, &settings));
        assert_eq!(transform.translation, Point::new(20.0, 0.0));

        assert!(transform.apply_wheel(2, WheelModifier::Plain, Point::ORIGIN, &settings));
        assert_eq!(transform.translation, Point::new(20.0, -40.0));
    }

    #[test]
    fn test_zero_notches_is_noop() {
        let mut transform = CanvasTransform::new();
        assert!(!transform.apply_wheel(0, WheelModifier::Control, Point::ORIGIN, &Settings::default()));
        assert_eq!(transform, CanvasTransform::new());
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        let settings = Settings {
            scale_factor_per_notch: 0.0,
            ..Settings::default()
        };
        let mut transform = CanvasTransform {
            scale: 1.5,
            rotation: 10.0,
            translation: Point::new(3.0, 4.0),
        };
        let before = transform;

        assert!(!transform.apply_wheel(1, WheelModifier::Control, Point::new(10.0, 10.0), &settings));
        assert_eq!(transform, before);
    }

    #[test]
    fn test_huge_zoom_out_keeps_prior_state() {
        let settings = Settings::default();
        let cursor = Point::new(100.0, 50.0);
        let mut transform = CanvasTransform::new();

        // 1.1^-1000 is too small to invert.
        assert!(!transform.apply_wheel(-1000, WheelModifier::Control, cursor, &settings));
        assert_eq!(transform, CanvasTransform::new());

        // 1.1^1000 overflows f32.
        assert!(!transform.apply_wheel(1000, WheelModifier::Control, cursor, &settings));
        assert_eq!(transform, CanvasTransform::new());
    }

    #[test]
    fn test_repeated_zoom_out_stays_finite() {
        let settings = Settings::default();
        let cursor = Point::new(100.0, 50.0);
        let mut transform = CanvasTransform::new();

        let mut accepted = 0;
        for _ in 0..600 {
            if transform.apply_wheel(-1, WheelModifier::Control, cursor, &settings) {
                accepted += 1;
            }
            assert!(transform.is_usable(), "unusable after zoom out: {:?}", transform);
        }
        // Zooming stops before the inverse overflows.
        assert!(accepted < 600);
        let floor = transform;
        assert!(!transform.apply_wheel(-1, WheelModifier::Control, cursor, &settings));
        assert_eq!(transform, floor);

        for _ in 0..accepted {
            assert!(transform.apply_wheel(1, WheelModifier::Control, cursor, &settings));
            assert!(transform.is_usable(), "unusable after zoom in: {:?}", transform);
        }
        assert!((transform.scale - 1.0).abs() < 1e-2);
        let restored = transform.canvas_to_screen(Point::new(75.0, 50.0)).unwrap();
        assert!(restored.x.is_finite() && restored.y.is_finite());
    }

    #[test]
    fn test_non_finite_state_is_unusable() {
        let mut transform = CanvasTransform::new();
        assert!(transform.is_usable());
        transform.translation.x = f32::NAN;
        assert!(!transform.is_usable());
        transform = CanvasTransform { rotation: f32::INFINITY, ..CanvasTransform::new() };
        assert!(!transform.is_usable());
    }

    #[test]
    fn test_modifier_precedence() {
        let all = ModifiersState::CONTROL | ModifiersState::SHIFT | ModifiersState::ALT;
        assert_eq!(WheelModifier::from(all), WheelModifier::Control);
        assert_eq!(
            WheelModifier::from(ModifiersState::SHIFT | ModifiersState::ALT),
            WheelModifier::Shift
        );
        assert_eq!(WheelModifier::from(ModifiersState::ALT), WheelModifier::Alt);
        assert_eq!(WheelModifier::from(ModifiersState::empty()), WheelModifier::Plain);
    }

    #[test]
    fn test_hud_text() {
        let transform = CanvasTransform {
            scale: 1.21,
            rotation: 15.0,
            translation: Point::new(20.0, -40.0),
        };
        let hud = transform.hud_text();
        assert!(hud.starts_with("Scale: 1.21   Rotation: 15.0°   Translation: 20, -40"));
        assert!(hud.contains("Shift=Rotate"));
    }
}
