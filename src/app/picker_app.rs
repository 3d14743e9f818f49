//! Main picker application
//!
//! Implements the egui App trait for the color picker.

use std::time::Duration;

use egui::{Align2, Color32, FontId, RichText, Sense, Shape, Stroke, Vec2};
use tracing::{debug, info};

use crate::config::{Catalog, LinearGradient};
use crate::engine::{Channel, ColorEngine, ColorEvent, ColorState};
use crate::ipc::{dispatch, Dispatch, IpcMessage, IpcReceiver, IpcSender};
use crate::render::{gradient_mesh, hex_to_color32, BackdropRenderer};

/// How often to poll the control channel while idle
const IPC_POLL_INTERVAL: Duration = Duration::from_millis(50);

const PRESET_COLUMNS: usize = 4;
const GRADIENT_COLUMNS: usize = 2;
const SECTION_WIDTH: f32 = 480.0;

/// Main picker application
pub struct PickerApp {
    /// Color engine (sole owner of the state)
    engine: ColorEngine,

    /// Background painter
    backdrop: BackdropRenderer,

    /// Parsed gradients for the preset buttons, by catalog index
    gradient_previews: Vec<Option<LinearGradient>>,

    /// IPC receiver
    ipc_rx: Option<IpcReceiver>,
    /// IPC sender
    ipc_tx: Option<IpcSender>,
}

impl PickerApp {
    /// Create new picker application
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        engine: ColorEngine,
        ipc: Option<(IpcReceiver, IpcSender)>,
    ) -> Self {
        let gradient_previews = engine
            .catalog()
            .gradients
            .iter()
            .map(|preset| LinearGradient::parse(&preset.gradient).ok())
            .collect();

        let (ipc_rx, ipc_tx) = match ipc {
            Some((rx, tx)) => (Some(rx), Some(tx)),
            None => (None, None),
        };

        info!(
            "Picker initialized: {} presets, {} gradients",
            engine.catalog().presets.len(),
            engine.catalog().gradients.len()
        );

        Self {
            engine,
            backdrop: BackdropRenderer::new(),
            gradient_previews,
            ipc_rx,
            ipc_tx,
        }
    }

    /// Apply a UI event and publish the new state
    fn apply(&mut self, event: ColorEvent) {
        // Rejections are logged by the engine
        if let Ok(state) = self.engine.apply(event) {
            if let Some(ref tx) = self.ipc_tx {
                tx.send(IpcMessage::state_update(state));
            }
        }
    }

    /// Handle IPC messages
    fn handle_ipc_messages(&mut self, ctx: &egui::Context) {
        // Collect messages first to avoid borrow issues
        let messages: Vec<IpcMessage> = match self.ipc_rx {
            Some(ref rx) => std::iter::from_fn(|| rx.try_recv()).collect(),
            None => return,
        };

        for msg in messages {
            match dispatch(&mut self.engine, msg) {
                Dispatch::Reply(reply) => {
                    if let Some(ref tx) = self.ipc_tx {
                        tx.send(reply);
                    }
                }
                Dispatch::Shutdown => {
                    info!("Received shutdown command");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
        }
    }
}

/// Translucent rounded panel, like a frosted card over the backdrop
fn section_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(Color32::from_white_alpha(48))
        .rounding(16.0)
        .inner_margin(16.0)
}

fn show_header(ui: &mut egui::Ui) {
    ui.add_space(16.0);
    ui.label(RichText::new("Color Changer").size(36.0).strong());
    ui.label(RichText::new("Pick a color, any color").size(18.0));
    ui.add_space(16.0);
}

fn show_current_color(ui: &mut egui::Ui, state: &ColorState) {
    section_frame().show(ui, |ui| {
        ui.set_width(SECTION_WIDTH);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&state.background_color).size(30.0).monospace());
            ui.label(format!("Current color: {}", state.background_color));
        });
    });
}

fn show_sliders(ui: &mut egui::Ui, state: &ColorState, events: &mut Vec<ColorEvent>) {
    section_frame().show(ui, |ui| {
        ui.set_width(SECTION_WIDTH);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("RGB Sliders").size(20.0).strong());
        });
        ui.add_space(8.0);

        for channel in Channel::ALL {
            let mut value = state.channel(channel);
            ui.horizontal(|ui| {
                ui.label(channel.display_name());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(value.to_string()).monospace());
                });
            });

            let full_width = ui.available_width();
            ui.spacing_mut().slider_width = full_width;
            let slider = egui::Slider::new(&mut value, 0..=255).show_value(false);
            if ui.add(slider).changed() {
                events.push(ColorEvent::SliderChange { channel, value });
            }
            ui.add_space(8.0);
        }
    });
}

fn show_actions(ui: &mut egui::Ui, events: &mut Vec<ColorEvent>) {
    ui.horizontal(|ui| {
        let size = Vec2::new((SECTION_WIDTH + 32.0 - ui.spacing().item_spacing.x) / 2.0, 44.0);

        let random = egui::Button::new(RichText::new("Random").color(Color32::WHITE).size(16.0))
            .fill(Color32::from_rgb(0xA8, 0x55, 0xF7))
            .rounding(12.0)
            .min_size(size);
        if ui.add(random).clicked() {
            events.push(ColorEvent::Randomize);
        }

        let reset = egui::Button::new(RichText::new("Reset").color(Color32::WHITE).size(16.0))
            .fill(Color32::from_rgb(0x6B, 0x72, 0x80))
            .rounding(12.0)
            .min_size(size);
        if ui.add(reset).clicked() {
            events.push(ColorEvent::Reset);
        }
    });
}

fn show_presets(ui: &mut egui::Ui, catalog: &Catalog, events: &mut Vec<ColorEvent>) {
    section_frame().show(ui, |ui| {
        ui.set_width(SECTION_WIDTH);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Preset Colors").size(20.0).strong());
        });
        ui.add_space(8.0);

        let spacing = ui.spacing().item_spacing.x;
        let width = (SECTION_WIDTH - spacing * (PRESET_COLUMNS - 1) as f32) / PRESET_COLUMNS as f32;

        egui::Grid::new("preset_colors")
            .num_columns(PRESET_COLUMNS)
            .show(ui, |ui| {
                for (index, preset) in catalog.presets.iter().enumerate() {
                    let label = RichText::new(&preset.name)
                        .color(hex_to_color32(&preset.text))
                        .strong();
                    let button = egui::Button::new(label)
                        .fill(hex_to_color32(&preset.bg))
                        .rounding(12.0)
                        .min_size(Vec2::new(width, 56.0));
                    if ui.add(button).clicked() {
                        events.push(ColorEvent::ApplyPreset { index });
                    }
                    if (index + 1) % PRESET_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
    });
}

fn show_gradients(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    previews: &[Option<LinearGradient>],
    events: &mut Vec<ColorEvent>,
) {
    section_frame().show(ui, |ui| {
        ui.set_width(SECTION_WIDTH);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Gradients").size(20.0).strong());
        });
        ui.add_space(8.0);

        let spacing = ui.spacing().item_spacing.x;
        let width =
            (SECTION_WIDTH - spacing * (GRADIENT_COLUMNS - 1) as f32) / GRADIENT_COLUMNS as f32;

        egui::Grid::new("gradient_presets")
            .num_columns(GRADIENT_COLUMNS)
            .show(ui, |ui| {
                for (index, preset) in catalog.gradients.iter().enumerate() {
                    let (rect, response) =
                        ui.allocate_exact_size(Vec2::new(width, 56.0), Sense::click());

                    if ui.is_rect_visible(rect) {
                        let painter = ui.painter();
                        match previews.get(index).and_then(Option::as_ref) {
                            Some(gradient) => {
                                painter.add(Shape::mesh(gradient_mesh(rect, gradient)));
                            }
                            None => {
                                painter.rect_filled(rect, 0.0, Color32::BLACK);
                            }
                        }
                        if response.hovered() {
                            painter.rect_stroke(rect, 0.0, Stroke::new(2.0, Color32::WHITE));
                        }
                        painter.text(
                            rect.center(),
                            Align2::CENTER_CENTER,
                            &preset.name,
                            FontId::proportional(16.0),
                            Color32::WHITE,
                        );
                    }

                    if response.clicked() {
                        events.push(ColorEvent::ApplyGradient { index });
                    }
                    if (index + 1) % GRADIENT_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
    });
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle IPC messages
        self.handle_ipc_messages(ctx);

        let mut events = Vec::new();

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let state = self.engine.state();
                self.backdrop.paint(ui.painter(), ui.max_rect(), state.backdrop());
                ui.visuals_mut().override_text_color = Some(hex_to_color32(&state.text_color));

                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        show_header(ui);
                        show_current_color(ui, state);
                        ui.add_space(12.0);
                        show_sliders(ui, state, &mut events);
                        ui.add_space(12.0);
                        show_actions(ui, &mut events);
                        ui.add_space(12.0);
                        show_presets(ui, self.engine.catalog(), &mut events);
                        ui.add_space(12.0);
                        show_gradients(
                            ui,
                            self.engine.catalog(),
                            &self.gradient_previews,
                            &mut events,
                        );
                        ui.add_space(16.0);
                    });
                });
            });

        // Events are applied in the order the user produced them
        for event in events {
            debug!("UI event: {:?}", event);
            self.apply(event);
        }

        // Keep polling the control channel while it is open
        if self.ipc_rx.is_some() {
            ctx.request_repaint_after(IPC_POLL_INTERVAL);
        }
    }
}
