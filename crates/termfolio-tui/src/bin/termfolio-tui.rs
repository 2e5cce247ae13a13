use std::io::IsTerminal;

fn main() {
    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    if interactive {
        if let Err(err) = termfolio_tui::interactive_runtime::run() {
            eprintln!("termfolio-tui: {err}");
            std::process::exit(1);
        }
    } else {
        print!("{}", termfolio_tui::interactive_runtime::render_snapshot_text());
    }
}
