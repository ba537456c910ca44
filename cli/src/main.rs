use crossword::{App, logging};

fn main() {
    logging::init();
    if let Err(report) = color_eyre::install() {
        tracing::warn!(error = %report, "could not install the error report handler");
    }

    let app = App::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    app.run_logged(stdin.lock(), &mut stdout);
}
