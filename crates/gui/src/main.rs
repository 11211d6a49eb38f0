mod app;
mod ui;

// Re-export so that `crate::state` resolves to the lib crate types
// everywhere in the binary.
pub use scenelab_gui_lib::state;

use app::StudioApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scenelab_gui=info,scenelab_gui_lib=info".into()),
        )
        .init();

    // Parse --scene <path> argument
    let initial_objects = parse_scene_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("scenelab — 3D Scene Editor")
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "scenelab-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(StudioApp::new(cc, initial_objects)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_scene_arg() -> Option<Vec<shared::SceneObject>> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--scene" && i + 1 < args.len() {
            let path = &args[i + 1];
            match std::fs::read_to_string(path) {
                Ok(json) => match shared::SceneDocument::from_json(&json) {
                    Ok(doc) => {
                        tracing::info!("Loaded scene from {path} ({} objects)", doc.objects.len());
                        return Some(doc.objects);
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse scene from {path}: {e}");
                    }
                },
                Err(e) => {
                    tracing::error!("Failed to read scene file {path}: {e}");
                }
            }
            break;
        }
        i += 1;
    }
    None
}
