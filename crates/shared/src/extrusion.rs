//! Арифметика выдавливания осевого бокса
//!
//! Выдавливание никогда не меняет топологию: бокс масштабируется вдоль оси
//! грани относительно точки на противоположной грани и затем заменяется
//! новым боксом с пересчитанными размером и центром.

use crate::{BoxShape, FaceId};

/// Точка опоры для грани: на противоположной грани, относительно центра бокса.
/// По оси грани `-halfExtent * normal`, по остальным осям ноль.
pub fn pivot_for_face(shape: &BoxShape, face: FaceId) -> [f64; 3] {
    let axis = face.axis();
    let mut pivot = [0.0; 3];
    pivot[axis.index()] = -shape.half_extent(axis) * face.sign();
    pivot
}

/// Точка опоры в мировых координатах
pub fn world_pivot(shape: &BoxShape, pivot: [f64; 3]) -> [f64; 3] {
    [
        shape.center[0] + pivot[0],
        shape.center[1] + pivot[1],
        shape.center[2] + pivot[2],
    ]
}

/// Новый бокс после фиксации выдавливания грани с коэффициентом `factor`.
///
/// Меняется ровно одна ось: `new = old * factor`, центр смещается на
/// `±(new - old) / 2` в сторону выдавленной грани.
pub fn commit_extrusion(shape: &BoxShape, face: FaceId, factor: f64) -> BoxShape {
    let i = face.axis().index();
    let old = shape.size[i];
    let new = old * factor;
    let diff = new - old;

    let mut result = *shape;
    result.size[i] = new;
    result.center[i] += face.sign() * diff / 2.0;
    result
}

/// Масштабирование точки вдоль оси грани относительно мировой точки опоры
pub fn scale_about_pivot(point: [f64; 3], face: FaceId, world_pivot: [f64; 3], factor: f64) -> [f64; 3] {
    let i = face.axis().index();
    let mut out = point;
    out[i] = world_pivot[i] + (point[i] - world_pivot[i]) * factor;
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: [f64; 3], b: [f64; 3]) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < EPS)
    }

    #[test]
    fn test_pivot_on_opposite_face() {
        let b = BoxShape::unit();
        assert_eq!(pivot_for_face(&b, FaceId::PosX), [-0.5, 0.0, 0.0]);
        assert_eq!(pivot_for_face(&b, FaceId::NegX), [0.5, 0.0, 0.0]);
        assert_eq!(pivot_for_face(&b, FaceId::PosY), [0.0, -0.5, 0.0]);
        assert_eq!(pivot_for_face(&b, FaceId::NegZ), [0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_world_pivot_uses_center_and_size() {
        let b = BoxShape::new([0.75, 0.0, 0.0], [2.5, 1.0, 1.0]);
        let p = pivot_for_face(&b, FaceId::PosX);
        assert!(approx(world_pivot(&b, p), [-0.5, 0.0, 0.0]));
        let p = pivot_for_face(&b, FaceId::NegX);
        assert!(approx(world_pivot(&b, p), [2.0, 0.0, 0.0]));
    }

    #[test]
    fn test_commit_pos_x_example() {
        let b = commit_extrusion(&BoxShape::unit(), FaceId::PosX, 2.5);
        assert!(approx(b.size, [2.5, 1.0, 1.0]));
        assert!(approx(b.center, [0.75, 0.0, 0.0]));
    }

    #[test]
    fn test_commit_negative_face_shifts_backwards() {
        let b = commit_extrusion(&BoxShape::unit(), FaceId::NegY, 3.0);
        assert!(approx(b.size, [1.0, 3.0, 1.0]));
        assert!(approx(b.center, [0.0, -1.0, 0.0]));
    }

    #[test]
    fn test_commit_keeps_opposite_face_fixed() {
        let start = BoxShape::new([0.2, -0.4, 1.0], [1.5, 2.0, 0.5]);
        for face in FaceId::ALL {
            let anchored = start.face_coordinate(face.opposite());
            let out = commit_extrusion(&start, face, 2.2);
            assert!((out.face_coordinate(face.opposite()) - anchored).abs() < EPS);
        }
    }

    #[test]
    fn test_commit_touches_one_axis_only() {
        let start = BoxShape::new([1.0, 2.0, 3.0], [1.0, 2.0, 3.0]);
        let out = commit_extrusion(&start, FaceId::PosZ, 2.0);
        assert_eq!(out.size[0], start.size[0]);
        assert_eq!(out.size[1], start.size[1]);
        assert_eq!(out.center[0], start.center[0]);
        assert_eq!(out.center[1], start.center[1]);
    }

    #[test]
    fn test_scaling_about_pivot_matches_commit() {
        let start = BoxShape::new([0.0, 0.5, 0.0], [1.0, 2.0, 1.0]);
        for face in FaceId::ALL {
            let wp = world_pivot(&start, pivot_for_face(&start, face));
            let factor = 2.35;
            let lo = scale_about_pivot(start.min(), face, wp, factor);
            let hi = scale_about_pivot(start.max(), face, wp, factor);
            let committed = commit_extrusion(&start, face, factor);
            assert!(approx(lo, committed.min()), "{face:?}");
            assert!(approx(hi, committed.max()), "{face:?}");
        }
    }
}
