use glam::Vec3;

/// Shadow parameters carried as plain data for the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowConfig {
    pub map_size: u32,
    /// Far plane of the shadow projection.
    pub max_distance: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            map_size: 1024,
            max_distance: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {}

#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub range: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    pub range: f32,
    pub inner_cone: f32,
    pub outer_cone: f32,
}

/// Sky/ground two-tone fill light.
#[derive(Debug, Clone, PartialEq)]
pub struct HemisphereLight {
    pub ground_color: Vec3,
}

/// Flat rectangular area emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct RectAreaLight {
    pub width: f32,
    pub height: f32,
}

/// Light component kind in the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum LightKind {
    Directional(DirectionalLight),
    Point(PointLight),
    Spot(SpotLight),
    Hemisphere(HemisphereLight),
    RectArea(RectAreaLight),
}

/// Light component.
///
/// `intensity` is the single field the animation engine is allowed to
/// mutate; everything else is fixed at scene construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,

    pub cast_shadows: bool,
    pub shadow: Option<ShadowConfig>,
}

impl Light {
    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Directional(DirectionalLight {}),
            cast_shadows: false,
            shadow: Some(ShadowConfig::default()),
        }
    }

    #[must_use]
    pub fn new_point(color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Point(PointLight { range }),
            cast_shadows: false,
            shadow: Some(ShadowConfig::default()),
        }
    }

    #[must_use]
    pub fn new_spot(
        color: Vec3,
        intensity: f32,
        range: f32,
        inner_cone: f32,
        outer_cone: f32,
    ) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Spot(SpotLight {
                range,
                inner_cone,
                outer_cone,
            }),
            cast_shadows: false,
            shadow: Some(ShadowConfig::default()),
        }
    }

    #[must_use]
    pub fn new_hemisphere(sky_color: Vec3, ground_color: Vec3, intensity: f32) -> Self {
        Self {
            color: sky_color,
            intensity,
            kind: LightKind::Hemisphere(HemisphereLight { ground_color }),
            cast_shadows: false,
            shadow: None,
        }
    }

    #[must_use]
    pub fn new_rect_area(color: Vec3, intensity: f32, width: f32, height: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::RectArea(RectAreaLight { width, height }),
            cast_shadows: false,
            shadow: None,
        }
    }

    /// Marks the light as a shadow caster with the given map resolution
    /// and projection distance.
    #[must_use]
    pub fn with_shadow(mut self, map_size: u32, max_distance: f32) -> Self {
        self.cast_shadows = true;
        self.shadow = Some(ShadowConfig {
            map_size,
            max_distance,
        });
        self
    }
}
