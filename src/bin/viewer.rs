use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use refrax::controller::Controller;
use refrax::helpers::{draw_diagram, draw_readout};
use refrax::readout::FieldInputs;

#[macroquad::main("Refrax")]
async fn main() {
    env_logger::init();

    let mut controller = Controller::default();
    let mut fields = FieldInputs::from_model(controller.model());

    loop {
        clear_background(BLACK);

        let previous = fields.clone();
        widgets::Window::new(hash!(), vec2(10.0, 10.0), vec2(240.0, 110.0))
            .label("Inputs")
            .ui(&mut *root_ui(), |ui| {
                ui.input_text(hash!(), "n1", &mut fields.n1);
                ui.input_text(hash!(), "n2", &mut fields.n2);
                ui.input_text(hash!(), "theta1 (deg)", &mut fields.incidence);
            });

        // only recompute on an actual edit
        if fields != previous {
            controller.apply_fields(&fields);
        }

        draw_diagram(controller.diagram());
        draw_readout(&controller.readout(), 20.0, 150.0, 24.0);

        next_frame().await
    }
}
