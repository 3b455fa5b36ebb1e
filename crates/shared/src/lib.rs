use serde::{Deserialize, Serialize};

pub mod extrusion;

pub use extrusion::{commit_extrusion, pivot_for_face, scale_about_pivot, world_pivot};

/// Допуск при сравнении нормали с осью координат
pub const NORMAL_TOLERANCE: f64 = 1e-3;

/// Ось координат
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Индекс компоненты вектора (0, 1, 2)
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Грань бокса. Порядок совпадает с номерами граней 1..6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceId {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl FaceId {
    /// Все шесть граней в каноническом порядке
    pub const ALL: [FaceId; 6] = [
        FaceId::PosX,
        FaceId::NegX,
        FaceId::PosY,
        FaceId::NegY,
        FaceId::PosZ,
        FaceId::NegZ,
    ];

    /// Индекс грани 0..6
    pub fn index(self) -> usize {
        match self {
            FaceId::PosX => 0,
            FaceId::NegX => 1,
            FaceId::PosY => 2,
            FaceId::NegY => 3,
            FaceId::PosZ => 4,
            FaceId::NegZ => 5,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            FaceId::PosX | FaceId::NegX => Axis::X,
            FaceId::PosY | FaceId::NegY => Axis::Y,
            FaceId::PosZ | FaceId::NegZ => Axis::Z,
        }
    }

    /// Знак нормали: +1 для положительной грани, -1 для отрицательной
    pub fn sign(self) -> f64 {
        match self {
            FaceId::PosX | FaceId::PosY | FaceId::PosZ => 1.0,
            FaceId::NegX | FaceId::NegY | FaceId::NegZ => -1.0,
        }
    }

    /// Единичная внешняя нормаль грани
    pub fn normal(self) -> [f64; 3] {
        let mut n = [0.0; 3];
        n[self.axis().index()] = self.sign();
        n
    }

    /// Противоположная грань на той же оси
    pub fn opposite(self) -> FaceId {
        match self {
            FaceId::PosX => FaceId::NegX,
            FaceId::NegX => FaceId::PosX,
            FaceId::PosY => FaceId::NegY,
            FaceId::NegY => FaceId::PosY,
            FaceId::PosZ => FaceId::NegZ,
            FaceId::NegZ => FaceId::PosZ,
        }
    }

    /// Определить грань по нормали. Нормаль, не совпадающая с осью, даёт None
    pub fn from_normal(normal: [f64; 3]) -> Option<FaceId> {
        let len = (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
        if !len.is_finite() || len < NORMAL_TOLERANCE {
            return None;
        }
        let n = [normal[0] / len, normal[1] / len, normal[2] / len];

        FaceId::ALL.into_iter().find(|face| {
            let expected = face.normal();
            (0..3).all(|i| (n[i] - expected[i]).abs() <= NORMAL_TOLERANCE)
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            FaceId::PosX => "+X",
            FaceId::NegX => "-X",
            FaceId::PosY => "+Y",
            FaceId::NegY => "-Y",
            FaceId::PosZ => "+Z",
            FaceId::NegZ => "-Z",
        }
    }
}

/// Состояние грани: 0: не тронута, 1: выдавливается, 2: выдавливание завершено
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceState {
    #[default]
    Untouched,
    Extruding,
    Committed,
}

/// Осевой бокс: центр и полные размеры рёбер
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    pub center: [f64; 3],
    /// Длина ребра по каждой оси (ширина, высота, глубина)
    pub size: [f64; 3],
}

impl Default for BoxShape {
    fn default() -> Self {
        Self::unit()
    }
}

impl BoxShape {
    /// Единичный куб в начале координат
    pub fn unit() -> Self {
        Self {
            center: [0.0; 3],
            size: [1.0; 3],
        }
    }

    pub fn new(center: [f64; 3], size: [f64; 3]) -> Self {
        Self { center, size }
    }

    /// Бокс по двум противоположным углам (в любом порядке)
    pub fn from_corners(a: [f64; 3], b: [f64; 3]) -> Self {
        Self {
            center: [(a[0] + b[0]) * 0.5, (a[1] + b[1]) * 0.5, (a[2] + b[2]) * 0.5],
            size: [(b[0] - a[0]).abs(), (b[1] - a[1]).abs(), (b[2] - a[2]).abs()],
        }
    }

    /// Половина ребра по оси
    pub fn half_extent(&self, axis: Axis) -> f64 {
        self.size[axis.index()] * 0.5
    }

    pub fn min(&self) -> [f64; 3] {
        [
            self.center[0] - self.size[0] * 0.5,
            self.center[1] - self.size[1] * 0.5,
            self.center[2] - self.size[2] * 0.5,
        ]
    }

    pub fn max(&self) -> [f64; 3] {
        [
            self.center[0] + self.size[0] * 0.5,
            self.center[1] + self.size[1] * 0.5,
            self.center[2] + self.size[2] * 0.5,
        ]
    }

    /// Координата плоскости грани вдоль её оси
    pub fn face_coordinate(&self, face: FaceId) -> f64 {
        let axis = face.axis();
        self.center[axis.index()] + face.sign() * self.half_extent(axis)
    }
}

/// Режим выдавливания
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrusionMode {
    /// Одно выдавливание за сессию, дальше только сброс
    Single,
    /// Каждая грань может быть выдавлена один раз
    #[default]
    Multiple,
}

impl ExtrusionMode {
    pub fn all() -> &'static [ExtrusionMode] {
        &[ExtrusionMode::Single, ExtrusionMode::Multiple]
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(ExtrusionMode::Single),
            "multiple" | "multi" => Ok(ExtrusionMode::Multiple),
            other => Err(format!("Unknown extrusion mode '{other}' (expected single|multiple)")),
        }
    }
}

/// Параметры анимации выдавливания
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtrusionParams {
    /// Масштаб в момент начала выдавливания
    pub base_scale: f64,
    /// Прирост масштаба за кадр
    pub step_per_frame: f64,
}

impl Default for ExtrusionParams {
    fn default() -> Self {
        Self {
            base_scale: 2.0,
            step_per_frame: 0.005,
        }
    }
}

impl ExtrusionParams {
    /// Масштаб после заданного числа кадров
    pub fn scale_after(&self, frames: u32) -> f64 {
        self.base_scale + self.step_per_frame * frames as f64
    }
}
