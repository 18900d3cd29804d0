use bevy::math::Affine3A;
use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;

/// Axis-aligned bounds of model geometry.
/// Used to find the visual center of a loaded hierarchy regardless of its authored pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl ModelBounds {
    /// Smallest box enclosing every point. Returns `None` for an empty set.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;

        Some(points.fold(
            Self {
                min: first,
                max: first,
            },
            |bounds, point| Self {
                min: bounds.min.min(point),
                max: bounds.max.max(point),
            },
        ))
    }

    /// Local bounds of a mesh's position attribute.
    pub fn from_mesh(mesh: &Mesh) -> Option<Self> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION)? {
            VertexAttributeValues::Float32x3(positions) => {
                Self::from_points(positions.iter().map(|position| Vec3::from_array(*position)))
            }
            _ => None,
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (min, max) = (self.min, self.max);
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
        ]
    }

    /// Re-fit the box around its eight transformed corners.
    pub fn transformed(&self, affine: &Affine3A) -> Self {
        let corners = self.corners().map(|corner| affine.transform_point3(corner));
        // Eight corners, never empty.
        Self::from_points(corners).unwrap_or(*self)
    }

    /// Center point used for re-centering the model root.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_point_set_has_no_bounds() {
        assert_eq!(ModelBounds::from_points(std::iter::empty()), None);
    }

    #[test]
    fn bounds_enclose_all_points() {
        let bounds = ModelBounds::from_points([
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-1.0, 4.0, 0.0),
            Vec3::new(0.0, 0.0, -3.0),
        ])
        .unwrap();

        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 4.0, 0.5));
        assert_eq!(bounds.center(), Vec3::new(0.0, 1.0, -1.25));
        assert_eq!(bounds.size(), Vec3::new(2.0, 6.0, 3.5));
    }

    #[test]
    fn union_covers_both_boxes() {
        let a = ModelBounds {
            min: Vec3::ZERO,
            max: Vec3::ONE,
        };
        let b = ModelBounds {
            min: Vec3::new(-2.0, 0.5, 0.5),
            max: Vec3::new(0.5, 0.5, 3.0),
        };

        let merged = a.union(&b);
        assert_eq!(merged.min, Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(merged.max, Vec3::new(1.0, 1.0, 3.0));
    }

    #[test]
    fn transformed_bounds_follow_scale_and_translation() {
        let unit = ModelBounds {
            min: Vec3::splat(-0.5),
            max: Vec3::splat(0.5),
        };
        let affine = Affine3A::from_scale_rotation_translation(
            Vec3::splat(2.0),
            Quat::IDENTITY,
            Vec3::new(0.0, 2.0, 0.0),
        );

        let moved = unit.transformed(&affine);
        assert!(moved.min.abs_diff_eq(Vec3::new(-1.0, 1.0, -1.0), 1e-6));
        assert!(moved.max.abs_diff_eq(Vec3::new(1.0, 3.0, 1.0), 1e-6));
    }

    #[test]
    fn rotated_box_is_refit_around_corners() {
        let slab = ModelBounds {
            min: Vec3::new(-2.0, -0.5, -0.5),
            max: Vec3::new(2.0, 0.5, 0.5),
        };
        let quarter_turn = Affine3A::from_rotation_y(std::f32::consts::FRAC_PI_2);

        let turned = slab.transformed(&quarter_turn);
        assert!(turned.size().abs_diff_eq(Vec3::new(1.0, 1.0, 4.0), 1e-5));
        assert!(turned.center().abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn cuboid_mesh_bounds_match_its_extents() {
        let mesh = Mesh::from(Cuboid::new(2.0, 4.0, 6.0));
        let bounds = ModelBounds::from_mesh(&mesh).unwrap();

        assert!(bounds.min.abs_diff_eq(Vec3::new(-1.0, -2.0, -3.0), 1e-6));
        assert!(bounds.max.abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-6));
    }
}
