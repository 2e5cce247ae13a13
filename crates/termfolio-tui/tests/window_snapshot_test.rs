//! Text snapshot of a minimal window layout.

use termfolio_core::{ContentSet, WidgetConfig, WindowGeometry};
use termfolio_surface::input::{InputEvent, ResizeEvent};
use termfolio_surface::snapshot::assert_render_frame_snapshot;
use termfolio_tui::app::App;

fn tiny_config() -> WidgetConfig {
    WidgetConfig {
        title: "t".to_owned(),
        path_line: "~".to_owned(),
        branch: "b".to_owned(),
        info_text: "i".to_owned(),
        palette: "default".to_owned(),
        window: WindowGeometry {
            small: (24, 6),
            large: (28, 8),
            origin: (0, 0),
        },
    }
}

#[test]
fn minimal_window_layout_snapshot() {
    let mut app = App::new(&tiny_config(), &ContentSet::Projects(Vec::new()), "default");
    app.update(InputEvent::Resize(ResizeEvent {
        width: 30,
        height: 8,
    }));

    let frame = app.render();
    let expected = concat!(
        "╭ ● ● ●  t─────────────╮      \n",
        "│~ git:(b)             │      \n",
        "│$ echo \"i\"            │      \n",
        "│                      │      \n",
        "│                      │      \n",
        "╰──────────────────────╯      \n",
        "                              \n",
        " Esc close window  M minimize \n",
    );
    assert_render_frame_snapshot("minimal window", &frame, expected);
}
