//! Properties panel for the selected object

use egui::Ui;
use shared::ObjectPatch;

use crate::state::scene::short_id;
use crate::state::EditorState;

pub fn show(ui: &mut Ui, state: &mut EditorState) {
    ui.heading("Properties");
    ui.separator();

    let selected_id = match state.selection.selected() {
        Some(id) => id.clone(),
        None => {
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.weak("Select an object");
                ui.weak("to view its properties");
            });
            return;
        }
    };

    let Some(obj) = state.scene.get(&selected_id) else {
        ui.weak("Object no longer exists");
        return;
    };

    // Edit copies of the object's fields; widget changes become a patch
    // applied through the debounced update path.
    let kind_label = obj.kind.label();
    let mut name = obj.name.clone();
    let mut visible = obj.visible;
    let mut position = obj.transform.position;
    let mut rotation = obj.transform.rotation;
    let mut scale = obj.transform.scale;
    let mut color = obj.material.color;
    let mut emissive = obj.material.emissive;
    let mut emissive_intensity = obj.material.emissive_intensity;
    let mut opacity = obj.material.opacity;
    let mut metalness = obj.material.metalness;
    let mut roughness = obj.material.roughness;
    let mut wireframe = obj.material.wireframe;

    let mut patch = ObjectPatch::default();

    egui::Grid::new("object_info")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("ID:");
            ui.monospace(short_id(&selected_id));
            ui.end_row();

            ui.label("Kind:");
            ui.label(kind_label);
            ui.end_row();

            ui.label("Name:");
            if ui.text_edit_singleline(&mut name).changed() {
                patch.name = Some(name.clone());
            }
            ui.end_row();

            ui.label("Visible:");
            if ui.checkbox(&mut visible, "").changed() {
                patch.visible = Some(visible);
            }
            ui.end_row();
        });

    ui.add_space(8.0);
    egui::CollapsingHeader::new("Transform")
        .id_salt("transform_section")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("transform_props")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    if vec3_row(ui, "Position", &mut position, 0.1) {
                        patch.position = Some(position);
                    }
                    if vec3_row(ui, "Rotation", &mut rotation, 0.05) {
                        patch.rotation = Some(rotation);
                    }
                    if vec3_row(ui, "Scale", &mut scale, 0.1) {
                        patch.scale = Some(scale);
                    }
                });
        });

    ui.add_space(8.0);
    egui::CollapsingHeader::new("Material")
        .id_salt("material_section")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("material_props")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Color:");
                    if ui.color_edit_button_rgb(&mut color).changed() {
                        patch.color = Some(color);
                    }
                    ui.end_row();

                    ui.label("Emissive:");
                    if ui.color_edit_button_rgb(&mut emissive).changed() {
                        patch.emissive = Some(emissive);
                    }
                    ui.end_row();

                    ui.label("Intensity:");
                    if ui
                        .add(egui::Slider::new(&mut emissive_intensity, 0.0..=1.0))
                        .changed()
                    {
                        patch.emissive_intensity = Some(emissive_intensity);
                    }
                    ui.end_row();

                    ui.label("Opacity:");
                    if ui.add(egui::Slider::new(&mut opacity, 0.0..=1.0)).changed() {
                        patch.opacity = Some(opacity);
                    }
                    ui.end_row();

                    ui.label("Metalness:");
                    if ui
                        .add(egui::Slider::new(&mut metalness, 0.0..=1.0))
                        .changed()
                    {
                        patch.metalness = Some(metalness);
                    }
                    ui.end_row();

                    ui.label("Roughness:");
                    if ui
                        .add(egui::Slider::new(&mut roughness, 0.0..=1.0))
                        .changed()
                    {
                        patch.roughness = Some(roughness);
                    }
                    ui.end_row();

                    ui.label("Wireframe:");
                    if ui.checkbox(&mut wireframe, "").changed() {
                        patch.wireframe = Some(wireframe);
                    }
                    ui.end_row();
                });
        });

    if patch != ObjectPatch::default() {
        state.update_object(&selected_id, &patch);
    }
}

/// Three drag values on one grid row; returns whether any component changed
fn vec3_row(ui: &mut Ui, label: &str, v: &mut [f64; 3], speed: f64) -> bool {
    let mut changed = false;
    ui.label(format!("{label}:"));
    ui.horizontal(|ui| {
        for c in v.iter_mut() {
            changed |= ui
                .add(egui::DragValue::new(c).speed(speed).max_decimals(3))
                .changed();
        }
    });
    ui.end_row();
    changed
}
