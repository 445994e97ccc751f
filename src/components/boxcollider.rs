use bevy_ecs::prelude::Component;

/// Axis-aligned rectangle in world space: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap: touching edges do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Modify BoxCollider with given offset from the entity position
    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Returns the collider AABB for a given entity position.
    /// Handles negative size by normalizing to a proper corner and extent.
    pub fn aabb(&self, x: f32, y: f32) -> Aabb {
        let x0 = x + self.offset_x;
        let y0 = y + self.offset_y;
        let x1 = x0 + self.width;
        let y1 = y0 + self.height;
        Aabb {
            x: x0.min(x1),
            y: y0.min(y1),
            w: (x1 - x0).abs(),
            h: (y1 - y0).abs(),
        }
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: (f32, f32), other: &Self, other_position: (f32, f32)) -> bool {
        let a = self.aabb(position.0, position.1);
        let b = other.aabb(other_position.0, other_position.1);
        a.overlaps(&b)
    }
}
