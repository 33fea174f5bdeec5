use super::{CENTER_FONT_SIZE, DIGIT_FONT_SIZE, HANDSET_GLYPH, SELECTED_LINE_WIDTH};
use crate::dial::geometry::{Point, point_on_circle};
use crate::dial::{DialSnapshot, Digit, LIMIT_ANGLE, LIMITER_RADIUS_FACTOR};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn circle(cr: &Context, center: Point, radius: f64) {
    cr.new_sub_path();
    cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
}

fn draw_centered_text(
    cr: &Context,
    center: Point,
    text: &str,
    size: f64,
) -> Result<(), cairo::Error> {
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(size);
    let ext = cr.text_extents(text)?;
    cr.move_to(
        center.x - ext.width() / 2.0 - ext.x_bearing(),
        center.y - ext.height() / 2.0 - ext.y_bearing(),
    );
    cr.show_text(text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoleState {
    Dragged,
    Shaded,
    Rest,
}

impl HoleState {
    fn resolve(snapshot: &DialSnapshot, digit: Digit) -> Self {
        match snapshot.dragged_digit {
            Some(d) if d == digit => Self::Dragged,
            Some(_) => Self::Shaded,
            None => Self::Rest,
        }
    }
}

struct DigitRenderer<'a> {
    snapshot: &'a DialSnapshot,
    digit: Digit,
}

impl<'a> DigitRenderer<'a> {
    fn new(snapshot: &'a DialSnapshot, digit: Digit) -> Self {
        Self { snapshot, digit }
    }

    fn hole_center(&self) -> Point {
        point_on_circle(
            ORIGIN,
            self.snapshot.metrics.orbit_radius,
            self.snapshot.display_angle(self.digit),
        )
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_hole(cr, colors)?;
        self.draw_label(cr, colors)
    }

    fn draw_hole(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let center = self.hole_center();
        let radius = self.snapshot.metrics.hit_radius;

        match HoleState::resolve(self.snapshot, self.digit) {
            HoleState::Dragged => {
                set_color(cr, colors.selected);
                cr.set_line_width(SELECTED_LINE_WIDTH);
                cr.new_path();
                circle(cr, center, radius);
                cr.stroke()
            }
            HoleState::Shaded => {
                let (r, g, b, a) = colors.shade.into_components();
                let gradient = cairo::RadialGradient::new(
                    center.x,
                    center.y,
                    0.0,
                    center.x,
                    center.y,
                    radius * 2.0,
                );
                gradient.add_color_stop_rgba(0.0, r, g, b, 0.0);
                gradient.add_color_stop_rgba(1.0, r, g, b, a);
                cr.set_source(&gradient)?;
                cr.new_path();
                circle(cr, center, radius);
                cr.fill()
            }
            HoleState::Rest => Ok(()),
        }
    }

    // Numbers are printed on the fixed ring under the plate, so they never move.
    fn draw_label(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let position = point_on_circle(
            ORIGIN,
            self.snapshot.metrics.orbit_radius,
            self.snapshot.rest_angle(self.digit),
        );
        set_color(cr, colors.digit);
        draw_centered_text(cr, position, &self.digit.to_string(), DIGIT_FONT_SIZE)
    }
}

pub fn draw(
    cr: &Context,
    snapshot: &DialSnapshot,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let metrics = &snapshot.metrics;
    cr.save()?;
    cr.translate(metrics.center.x, metrics.center.y);

    draw_limiter(cr, snapshot, colors)?;
    for digit in Digit::all() {
        DigitRenderer::new(snapshot, digit).draw(cr, colors)?;
    }
    draw_plate(cr, snapshot, colors)?;
    draw_center_disc(cr, snapshot, colors)?;

    cr.restore()
}

fn draw_limiter(
    cr: &Context,
    snapshot: &DialSnapshot,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let metrics = &snapshot.metrics;
    set_color(cr, colors.limiter);
    cr.new_path();
    circle(
        cr,
        point_on_circle(ORIGIN, metrics.orbit_radius, LIMIT_ANGLE),
        metrics.hit_radius * LIMITER_RADIUS_FACTOR,
    );
    cr.fill()
}

/// The turning plate: a disc with a finger hole cut out over every digit.
fn draw_plate(
    cr: &Context,
    snapshot: &DialSnapshot,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let metrics = &snapshot.metrics;
    cr.new_path();
    circle(cr, ORIGIN, metrics.width / 2.0);
    for digit in Digit::all() {
        circle(
            cr,
            point_on_circle(ORIGIN, metrics.orbit_radius, snapshot.display_angle(digit)),
            metrics.hit_radius,
        );
    }
    cr.set_fill_rule(cairo::FillRule::EvenOdd);
    set_color(cr, colors.plate);
    let result = cr.fill();
    cr.set_fill_rule(cairo::FillRule::Winding);
    result
}

fn draw_center_disc(
    cr: &Context,
    snapshot: &DialSnapshot,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    set_color(cr, colors.center_disc);
    cr.new_path();
    circle(cr, ORIGIN, snapshot.metrics.inner_radius);
    cr.fill()?;

    let label = match snapshot.dragged_digit {
        Some(digit) if snapshot.at_limit => digit.to_string(),
        _ => HANDSET_GLYPH.to_string(),
    };
    set_color(cr, colors.center_text);
    draw_centered_text(cr, ORIGIN, &label, CENTER_FONT_SIZE)
}
