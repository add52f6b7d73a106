use yew_touch_scroll::components::App;
use yew_touch_scroll::util::init_logging;

fn main() {
    console_error_panic_hook::set_once();
    init_logging("yew_touch_scroll=debug");
    yew::Renderer::<App>::new().render();
}
