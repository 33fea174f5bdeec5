use crate::config::{self, Settings};
use crate::dial::{Digit, GestureAction, Point, RotaryDial};
use crate::events::AppEvent;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::{LABEL_HEIGHT, WINDOW_SIZE, view};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub struct AppModel {
    pub dial: Rc<RefCell<RotaryDial>>,
    pub number: String,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    Resize(f64, f64),
    Dialed(Digit),
    Erase,
    Clear,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Settings, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Rotary Dial"),
            set_default_size: (WINDOW_SIZE, WINDOW_SIZE + LABEL_HEIGHT),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::BackSpace {
                        sender.input(AppMsg::Erase);
                        return glib::Propagation::Stop;
                    }
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Clear);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 20,
                set_margin_all: 10,

                gtk::Label {
                    add_css_class: "rotary-number",
                    set_height_request: LABEL_HEIGHT,
                    #[watch]
                    set_label: &model.number,
                },

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "rotary-drawing-area",

                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::Resize(width as f64, height as f64));
                    },

                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[sender] => move |_, x, y| {
                            sender.input(AppMsg::PointerDown(Point::new(x, y)));
                        },
                        connect_drag_update[sender] => move |gesture, dx, dy| {
                            if let Some((x, y)) = gesture.start_point() {
                                sender.input(AppMsg::PointerMove(Point::new(x + dx, y + dy)));
                            }
                        },
                        connect_drag_end[sender] => move |_, _, _| {
                            sender.input(AppMsg::PointerUp);
                        },
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (settings, rx) = init;

        theme::load_css();

        let input = sender.input_sender().clone();
        let dial = RotaryDial::new(
            settings.inner_radius,
            settings.hit_radius,
            settings.release_duration,
        )
        .with_listener(move |digit| input.emit(AppMsg::Dialed(digit)));

        let model = AppModel {
            dial: Rc::new(RefCell::new(dial)),
            number: String::new(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let dial_draw = model.dial.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = view::draw(cr, &dial_draw.borrow().snapshot(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::PointerDown(point) => {
                let action = self.dial.borrow_mut().pointer_down(point);
                self.apply(action);
            }
            AppMsg::PointerMove(point) => {
                let action = self.dial.borrow_mut().pointer_move(point);
                self.apply(action);
            }
            AppMsg::PointerUp => {
                let action = self.dial.borrow_mut().pointer_up();
                self.apply(action);
            }
            AppMsg::Resize(width, height) => {
                let action = self.dial.borrow_mut().resize(width, height);
                self.apply(action);
            }
            AppMsg::Dialed(digit) => self.number.push_str(&digit.to_string()),
            AppMsg::Erase => {
                self.number.pop();
            }
            AppMsg::Clear => self.number.clear(),
            AppMsg::ConfigReload => match config::load_config() {
                Ok(settings) => {
                    let action = self.dial.borrow_mut().reconfigure(
                        settings.inner_radius,
                        settings.hit_radius,
                        settings.release_duration,
                    );
                    self.apply(action);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

impl AppModel {
    fn apply(&self, action: GestureAction) {
        if action.should_animate {
            self.start_release_ticks();
        }
        if action.should_redraw {
            self.drawing_area.queue_draw();
        }
    }

    /// Feeds frame-clock time to the dial until the release animation has finished.
    fn start_release_ticks(&self) {
        let dial = self.dial.clone();
        self.drawing_area.add_tick_callback(move |area, clock| {
            let now = Duration::from_micros(clock.frame_time().max(0) as u64);
            let action = dial.borrow_mut().tick(now);
            if action.should_redraw {
                area.queue_draw();
            }
            if action.should_animate {
                glib::ControlFlow::Continue
            } else {
                glib::ControlFlow::Break
            }
        });
    }
}
