use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use holoboard::core::{AssetPaths, SceneConfig, WindowConfig};
use holoboard::ui::FpsOverlay;
use holoboard::HoloboardPlugin;

/// Element id given to the canvas so Bevy can find it
const CANVAS_ID: &str = "holoboard";

const USER_AGENT_MOBILE_MARKERS: [&str; 6] =
    ["Android", "iPhone", "iPad", "iPod", "Mobile", "webOS"];

/// Log a message to the browser console with a prefix
fn console_log(message: &str) {
    web_sys::console::log_1(&format!("[HOLOBOARD-WASM] {}", message).into());
}

/// True for phone and tablet browsers
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    USER_AGENT_MOBILE_MARKERS
        .iter()
        .any(|marker| user_agent.contains(marker))
}

fn is_mobile() -> bool {
    web_sys::window()
        .and_then(|window| window.navigator().user_agent().ok())
        .is_some_and(|agent| is_mobile_user_agent(&agent))
}

/// Mount the scene into `canvas` with procedural stand-ins for every asset
///
/// Returns as soon as the app is scheduled; the app itself runs on the
/// browser's animation loop.
#[wasm_bindgen]
pub fn init_holoboard(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    mount(canvas, AssetPaths::default())
}

/// Mount the scene into `canvas` loading [`AssetPaths::bundled`]
///
/// The page must serve those files under `assets/`, otherwise the scene
/// stops with the loading error.
#[wasm_bindgen]
pub fn init_holoboard_with_bundled_assets(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    mount(canvas, AssetPaths::bundled())
}

fn mount(canvas: HtmlCanvasElement, assets: AssetPaths) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    console_log(&format!(
        "Initializing with canvas {}x{} (bundled assets: {})",
        canvas.width(),
        canvas.height(),
        !assets.is_empty()
    ));
    canvas.set_id(CANVAS_ID);

    let mobile = is_mobile();
    let config = SceneConfig {
        assets,
        ..default()
    };
    let window = WindowConfig::for_canvas(format!("#{}", CANVAS_ID));

    wasm_bindgen_futures::spawn_local(async move {
        let mut app = App::new();

        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window.to_window()),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: "assets".to_string(),
                    meta_check: bevy::asset::AssetMetaCheck::Never,
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=warn,naga=error,holoboard=debug".to_string(),
                    ..default()
                }),
        );
        app.insert_resource(window);

        app.add_plugins(MeshPickingPlugin);
        app.add_plugins(EguiPlugin::default());
        app.add_plugins(HoloboardPlugin {
            config,
            overlay: FpsOverlay::for_device(mobile),
        });

        console_log(&format!("Starting app (mobile: {})", mobile));
        app.run();
    });

    Ok(())
}
