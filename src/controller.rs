//! Single owner of the live model and its diagram.
//!
//! Hosts hold one [`Controller`] and feed it every accepted edit through
//! [`Controller::apply`] (numbers) or [`Controller::apply_fields`] (raw text).
//! Both inputs are recomputed in full and swapped in together, so the model
//! and the diagram always describe the same inputs.

use log::debug;

use crate::{
    diagram::{self, Diagram},
    model::OpticalModel,
    readout::{FieldInputs, Readout},
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let controller = Controller::default();
        let model = controller.model();
        assert_eq!(model.n1, 1.0);
        assert_eq!(model.n2, 2.0);
        assert!((model.incidence_angle.to_degrees() - 30.0).abs() < 1e-12);
        assert_eq!(controller.diagram(), &diagram::project(model));
    }

    #[test]
    fn apply_replaces_model_and_diagram() {
        let mut controller = Controller::default();
        controller.apply(1.5, 1.0, 1.2);
        // refraction angle is NaN under TIR, so compare the debug output
        assert_eq!(
            format!("{:?}", controller.model()),
            format!("{:?}", OpticalModel::compute(1.5, 1.0, 1.2))
        );
        assert_eq!(
            controller.diagram(),
            &diagram::project(&OpticalModel::compute(1.5, 1.0, 1.2))
        );
        assert!(controller.readout().tir_warning);
    }

    #[test]
    fn apply_fields_maps_bad_text_to_nan() {
        let mut controller = Controller::default();
        controller.apply_fields(&FieldInputs::new("1.5", "oops", "45"));
        let model = controller.model();
        assert_eq!(model.n1, 1.5);
        assert!(model.n2.is_nan());
        assert!((model.incidence_angle - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
        assert_eq!(model.reflectance_te, 1.0);
        assert!(controller.diagram().iter().all(|s| s.is_finite()));
    }
}

/// Current model and diagram, replaced wholesale on every input change.
#[derive(Debug, Clone, PartialEq)]
pub struct Controller {
    model: OpticalModel,
    diagram: Diagram,
}

impl Default for Controller {
    /// Air into a medium of index 2, at 30 degrees.
    fn default() -> Self {
        Self::new(1.0, 2.0, 30f64.to_radians())
    }
}

impl Controller {
    pub fn new(n1: f64, n2: f64, incidence_angle: f64) -> Self {
        let model = OpticalModel::compute(n1, n2, incidence_angle);
        let diagram = diagram::project(&model);
        Self { model, diagram }
    }

    /// Recomputes everything from a complete set of inputs, incidence in radians.
    pub fn apply(&mut self, n1: f64, n2: f64, incidence_angle: f64) {
        debug!(
            "recomputing: n1 = {}, n2 = {}, theta1 = {} rad",
            n1, n2, incidence_angle
        );
        *self = Self::new(n1, n2, incidence_angle);
    }

    /// Parses the three text fields (incidence in degrees) and applies them.
    pub fn apply_fields(&mut self, fields: &FieldInputs) {
        let (n1, n2, incidence_angle) = fields.parse();
        self.apply(n1, n2, incidence_angle);
    }

    pub fn model(&self) -> &OpticalModel {
        &self.model
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn readout(&self) -> Readout {
        Readout::from_model(&self.model)
    }
}
