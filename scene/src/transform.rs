use glam::Vec3;

/// One step of a Mitsuba `to_world` transform. Steps apply in the order
/// they were pushed, matching how Mitsuba reads them from the XML.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Translate(Vec3),
    Scale(Vec3),
    Rotate { axis: Vec3, angle_deg: f32 },
    LookAt { origin: Vec3, target: Vec3, up: Vec3 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    pub steps: Vec<Step>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn translate(mut self, offset: Vec3) -> Self {
        self.steps.push(Step::Translate(offset));
        self
    }

    pub fn scale(mut self, factors: Vec3) -> Self {
        self.steps.push(Step::Scale(factors));
        self
    }

    pub fn rotate(mut self, axis: Vec3, angle_deg: f32) -> Self {
        self.steps.push(Step::Rotate { axis, angle_deg });
        self
    }

    pub fn rotate_x(self, angle_deg: f32) -> Self {
        self.rotate(Vec3::X, angle_deg)
    }

    pub fn rotate_y(self, angle_deg: f32) -> Self {
        self.rotate(Vec3::Y, angle_deg)
    }

    pub fn look_at(mut self, origin: Vec3, target: Vec3, up: Vec3) -> Self {
        self.steps.push(Step::LookAt { origin, target, up });
        self
    }

    /// Rotation about an arbitrary pivot: move the pivot to the origin,
    /// apply `inner`, move it back.
    pub fn about(pivot: Vec3, inner: Transform) -> Self {
        let mut t = Transform::new().translate(-pivot);
        t.steps.extend(inner.steps);
        t.translate(pivot)
    }
}
