use flagquiz::app::App;
use flagquiz::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let mut app = App::new()?;
    app.init()?;
    let result = app.run().await;
    app.restore().ok();
    result
}
