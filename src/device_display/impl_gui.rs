use crate::device_display::frame::{Frame, FrameBuilder};
use crate::device_display::interface::{Align, DeviceDisplay, TextAlign};
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// eframe app that paints whatever frame was presented last.
#[derive(Clone)]
pub struct DisplayWindow {
    presented: Arc<Mutex<Frame>>,
    repaint_every: Duration,
}

fn to_egui_align(align: Align) -> egui::Align {
    match align {
        Align::Start => egui::Align::Min,
        Align::Center => egui::Align::Center,
        Align::End => egui::Align::Max,
    }
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = match self.presented.lock() {
            Ok(frame) => frame.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();
                painter.rect_filled(rect, 0.0, egui::Color32::from_gray(frame.background));

                for item in &frame.texts {
                    painter.text(
                        rect.min + egui::vec2(item.x, item.y),
                        egui::Align2([
                            to_egui_align(item.align.horizontal),
                            to_egui_align(item.align.vertical),
                        ]),
                        &item.text,
                        egui::FontId::proportional(item.size),
                        egui::Color32::from_gray(item.gray),
                    );
                }
            });

        ctx.request_repaint_after(self.repaint_every);
    }
}

pub struct DeviceDisplayGui {
    width: f32,
    height: f32,
    builder: FrameBuilder,
    presented: Arc<Mutex<Frame>>,
}

impl DeviceDisplayGui {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            builder: FrameBuilder::new(),
            presented: Arc::new(Mutex::new(Frame::default())),
        }
    }

    pub fn window(&self, repaint_every: Duration) -> DisplayWindow {
        DisplayWindow {
            presented: self.presented.clone(),
            repaint_every,
        }
    }

    /// Blocks the calling thread until the window is closed. Must be the main thread.
    pub fn run_window(
        title: &str,
        width: f32,
        height: f32,
        window: DisplayWindow,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([width, height])
                .with_resizable(false),
            ..Default::default()
        };

        eframe::run_native(title, options, Box::new(|_cc| Box::new(window)))
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn background(&mut self, gray: u8) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.builder.background(gray);
        Ok(())
    }

    fn fill(&mut self, gray: u8) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.builder.fill(gray);
        Ok(())
    }

    fn text_size(&mut self, size: f32) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.builder.text_size(size);
        Ok(())
    }

    fn text_align(&mut self, align: TextAlign) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.builder.text_align(align);
        Ok(())
    }

    fn text(&mut self, text: &str, x: f32, y: f32) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.builder.text(text, x, y);
        Ok(())
    }

    fn present(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let frame = self.builder.finish();
        *self.presented.lock().map_err(|e| e.to_string())? = frame;
        Ok(())
    }
}
