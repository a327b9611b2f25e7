use console::Style;
use travelmap_core::map::MapCamera;
use travelmap_core::popup::style::Affordance;
use travelmap_core::popup::view::{InfoOverflow, ReadMore};
use travelmap_core::popup::{FocusState, PopupController, PopupScene, SceneHost};

struct Styles {
    header: Style,
    label: Style,
    value: Style,
    enabled: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            enabled: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }

    fn flag(&self, on: bool, yes: &'static str, no: &'static str) -> String {
        if on {
            self.enabled.apply_to(yes).to_string()
        } else {
            self.disabled.apply_to(no).to_string()
        }
    }
}

pub fn print_event<H: SceneHost>(
    label: &str,
    popup: &PopupController<PopupScene<H>>,
    map: &MapCamera,
) {
    let s = Styles::new();
    let state = match (popup.is_open(), popup.focus()) {
        (false, _) => "closed",
        (true, FocusState::Normal) => "open",
        (true, FocusState::FullscreenImage) => "open, image fullscreen",
    };
    println!();
    println!(
        "  {} {}  {}",
        s.header.apply_to("\u{25b6}"),
        s.header.apply_to(label),
        s.label.apply_to(format!("[{state}] map {} @ z{:.0}", map.center, map.zoom))
    );
}

/// Print what the popup currently shows. Consumes a pending scroll request.
pub fn print_scene<H: SceneHost>(popup: &mut PopupController<PopupScene<H>>) {
    let s = Styles::new();
    let gallery = popup.gallery().state();
    let selected = popup.selected_index();
    let scene = popup.view_mut();

    if !scene.is_visible() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Popup"),
            s.disabled.apply_to("hidden")
        );
        return;
    }

    println!(
        "    {:<12}{}",
        s.label.apply_to("Title"),
        s.value.apply_to(&scene.title)
    );
    if let Some(ref url) = scene.main_image {
        println!("    {:<12}{}", s.label.apply_to("Image"), s.path.apply_to(url));
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Tombstone"),
        s.value.apply_to(&scene.tombstone)
    );
    println!(
        "    {:<12}{} chars",
        s.label.apply_to("Description"),
        scene.description.chars().count()
    );
    println!(
        "    {:<12}{}/{} (slide {}), offset {:.0}px",
        s.label.apply_to("Gallery"),
        gallery.current_index,
        gallery.slide_count,
        selected.map_or_else(|| "-".to_string(), |i| i.to_string()),
        scene.gallery_offset
    );
    println!(
        "    {:<12}prev {}  next {}",
        s.label.apply_to("Arrows"),
        s.flag(scene.prev_button == Affordance::Enabled, "on", "off"),
        s.flag(scene.next_button == Affordance::Enabled, "on", "off")
    );
    println!(
        "    {:<12}read more {}  scroll {}",
        s.label.apply_to("Info"),
        s.flag(scene.read_more == ReadMore::Visible, "shown", "hidden"),
        s.flag(scene.info_overflow == InfoOverflow::Scroll, "on", "off")
    );
    if let Some(target) = scene.take_scroll_request() {
        println!(
            "    {:<12}{:?}",
            s.label.apply_to("Scrolled to"),
            target
        );
    }
    if scene.platform_fullscreen {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Fullscreen"),
            s.enabled.apply_to("yes")
        );
    }
}
