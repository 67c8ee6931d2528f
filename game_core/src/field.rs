use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Containment with open edges, so touching the border does not count
    pub fn contains_strict(&self, point: Vec2) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.y > self.min.y && point.y < self.max.y
    }
}

/// The playing field, centered on the origin with +y up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    width: f32,
    height: f32,
    wall_margin: f32,
}

impl Field {
    pub fn new(width: f32, height: f32, wall_margin: f32) -> Self {
        Self {
            width,
            height,
            wall_margin,
        }
    }

    pub fn from_config(config: &crate::Config) -> Self {
        Self::new(config.field_width, config.field_height, config.wall_margin)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// |y| at which the ball bounces off the top and bottom walls
    pub fn wall_y(&self) -> f32 {
        self.height / 2.0 - self.wall_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_strict_edges() {
        let aabb = Aabb::new(Vec2::ZERO, Vec2::new(2.0, 2.0));
        assert!(!aabb.contains_strict(Vec2::new(2.0, 1.0)), "Edge is outside when strict");
        assert!(!aabb.contains_strict(Vec2::new(1.0, 0.0)));
        assert!(aabb.contains_strict(Vec2::new(1.0, 1.0)));
        assert!(!aabb.contains_strict(Vec2::new(-0.1, 1.0)));
    }

    #[test]
    fn test_field_geometry() {
        let field = Field::new(900.0, 600.0, 10.0);
        assert_eq!(field.wall_y(), 290.0);
        assert_eq!((field.width(), field.height()), (900.0, 600.0));
    }
}
