//! Application style configuration

use eframe::egui;

/// Configure initial application styles with given font size
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = egui::Color32::from_rgb(26, 27, 32);
    style.visuals.window_fill = egui::Color32::from_rgb(32, 33, 40);
    style.visuals.selection.bg_fill = egui::Color32::from_rgb(52, 92, 150);
    style.visuals.window_corner_radius = egui::CornerRadius::same(5);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(4);

    style.spacing.item_spacing = egui::vec2(6.0, 5.0);
    style.spacing.button_padding = egui::vec2(7.0, 3.0);

    apply_text_styles(&mut style, font_size);

    ctx.set_style(style);
}

/// Apply font size to all text styles
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    apply_text_styles(&mut style, font_size);
    ctx.set_style(style);
}

fn apply_text_styles(style: &mut egui::Style, font_size: f32) {
    let styles = [
        (egui::TextStyle::Body, font_size, false),
        (egui::TextStyle::Button, font_size, false),
        (egui::TextStyle::Small, font_size * 0.85, false),
        (egui::TextStyle::Heading, font_size * 1.3, false),
        (egui::TextStyle::Monospace, font_size, true),
    ];
    for (text_style, size, mono) in styles {
        let font = if mono {
            egui::FontId::monospace(size)
        } else {
            egui::FontId::proportional(size)
        };
        style.text_styles.insert(text_style, font);
    }
}
