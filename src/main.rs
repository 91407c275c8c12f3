#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1024.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Math Dojo — Sumas con cinturones",
        options,
        Box::new(|cc| Ok(Box::new(math_dojo::MathApp::new(cc)))),
    )
}

// En la web la app se cuelga de un <canvas id="math_dojo_canvas"> y el
// progreso acaba en el local storage del navegador vía eframe.
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("no hay window")
            .document()
            .expect("no hay document");
        let canvas = document
            .get_element_by_id("math_dojo_canvas")
            .expect("falta el elemento #math_dojo_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("#math_dojo_canvas no es un canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(math_dojo::MathApp::new(cc)))),
            )
            .await
            .expect("no se pudo arrancar la app web");
    });
}
