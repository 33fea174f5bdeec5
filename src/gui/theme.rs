use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub plate: Srgba<f64>,
    pub selected: Srgba<f64>,
    pub shade: Srgba<f64>,
    pub limiter: Srgba<f64>,
    pub digit: Srgba<f64>,
    pub center_disc: Srgba<f64>,
    pub center_text: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            plate: Self::lookup_color(
                context,
                "accent_bg_color",
                Srgba::new(0.0, 0.0, 1.0, 0.3),
                Some(0.3),
            ),
            selected: Self::lookup_color(
                context,
                "success_color",
                Srgba::new(0.0, 1.0, 0.0, 0.4),
                Some(0.4),
            ),
            shade: Srgba::new(0.0, 0.0, 0.0, 1.0),
            limiter: Self::lookup_color(
                context,
                "error_color",
                Srgba::new(1.0, 0.0, 0.0, 1.0),
                None,
            ),
            digit: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.0, 0.0, 0.0, 1.0),
                None,
            ),
            center_disc: Self::lookup_color(
                context,
                "success_bg_color",
                Srgba::new(0.0, 0.8, 0.0, 1.0),
                Some(1.0),
            ),
            center_text: Srgba::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.rotary-number {
    font-size: 40px;
    font-weight: bold;
}
.rotary-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
