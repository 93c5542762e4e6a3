use astrofall::app::App;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    App::new().with_title("Asteroid Crash").run()?;
    Ok(())
}
