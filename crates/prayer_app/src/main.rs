mod app;
mod render;
mod settings;

fn main() -> anyhow::Result<()> {
    app::run_app()
}
