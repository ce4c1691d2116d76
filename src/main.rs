use quizdeck::app::App;
use quizdeck::error;

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", error::user_friendly_message(&err));
        std::process::exit(1);
    }
}

fn run() -> quizdeck::Result<()> {
    let mut app = App::new()?;
    app.init()?;
    let result = app.run();
    app.restore()?;
    result
}
