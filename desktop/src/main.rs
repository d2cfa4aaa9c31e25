use dioxus::prelude::*;

fn main() {
    // PAYMENT_CONFIG and the PAYMENT_* variables are read when the panel mounts.
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
