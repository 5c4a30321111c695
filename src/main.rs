use eframe::egui;

use spiral_gallery::{FrameQueue, GalleryItem, LightboxKey, RegionGeometry, SpiralGallery};

/// Scroll room below the pinned gallery, in viewport heights.
const SCROLL_ROOM_VIEWPORTS: f32 = 3.0;
const CARD_WIDTH: f32 = 220.0;
const CARD_HEIGHT: f32 = 140.0;
/// Screen pixels per spiral unit.
const SPIRAL_TO_SCREEN: f32 = 0.9;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let reduced_motion = std::env::var("SPIRAL_REDUCED_MOTION")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Spiral Gallery — Showroom",
        options,
        Box::new(move |_cc| Ok(Box::new(ShowroomApp::new(reduced_motion)))),
    )
}

fn showroom_items() -> Vec<GalleryItem> {
    let raw: [(&str, &str, &str, Option<&str>); 12] = [
        ("ext-front", "Front three-quarter", "exterior", Some("LED matrix headlights")),
        ("ext-side", "Side profile", "exterior", None),
        ("ext-rear", "Rear three-quarter", "exterior", Some("Full-width light bar")),
        ("ext-roof", "Panoramic roof", "exterior", None),
        ("int-dash", "Dashboard", "interior", Some("14.6-inch touchscreen")),
        ("int-seats", "Front seats", "interior", None),
        ("int-rear", "Rear cabin", "interior", Some("Reclining rear bench")),
        ("int-trunk", "Cargo area", "interior", None),
        ("det-wheel", "20-inch alloy", "detail", None),
        ("det-badge", "Tailgate badge", "detail", None),
        ("det-charge", "Charging port", "detail", Some("800 V fast charging")),
        ("det-mirror", "Camera mirror", "detail", None),
    ];
    raw.iter()
        .map(|(id, alt, category, caption)| {
            let item = GalleryItem::new(*id, format!("images/gallery/{id}.webp"), *alt, *category);
            match caption {
                Some(c) => item.with_caption(*c),
                None => item,
            }
        })
        .collect()
}

fn category_color(category: &str) -> egui::Color32 {
    match category {
        "exterior" => egui::Color32::from_rgb(52, 101, 164),
        "interior" => egui::Color32::from_rgb(143, 89, 2),
        "detail" => egui::Color32::from_rgb(78, 154, 6),
        _ => egui::Color32::from_rgb(85, 87, 83),
    }
}

enum OverlayAction {
    Prev,
    Next,
    Close,
}

struct ShowroomApp {
    gallery: SpiralGallery<FrameQueue>,
    scroll_y: f32,
    viewport: Option<egui::Vec2>,
}

impl ShowroomApp {
    fn new(reduced_motion: bool) -> Self {
        let items = showroom_items();
        log::info!("showroom: {} items, reduced motion {}", items.len(), reduced_motion);
        let mut gallery = SpiralGallery::new(items, FrameQueue::new());
        gallery.set_reduced_motion(reduced_motion);
        gallery.mount();
        Self {
            gallery,
            scroll_y: 0.0,
            viewport: None,
        }
    }

    fn scroll_room(&self) -> f32 {
        self.viewport.map(|v| v.y * SCROLL_ROOM_VIEWPORTS).unwrap_or(0.0)
    }

    /// Feed this frame's raw input into the gallery.
    fn handle_input(&mut self, ctx: &egui::Context) {
        let size = ctx.screen_rect().size();
        if self.viewport != Some(size) {
            self.viewport = Some(size);
            self.gallery.on_resize(RegionGeometry {
                top: 0.0,
                height: size.y * (1.0 + SCROLL_ROOM_VIEWPORTS),
                viewport_height: size.y,
            });
        }

        if self.gallery.lightbox().is_open() {
            let keys = ctx.input(|i| {
                [
                    (egui::Key::Escape, LightboxKey::Escape),
                    (egui::Key::ArrowLeft, LightboxKey::Left),
                    (egui::Key::ArrowRight, LightboxKey::Right),
                ]
                .into_iter()
                .filter(|(k, _)| i.key_pressed(*k))
                .map(|(_, lk)| lk)
                .collect::<Vec<_>>()
            });
            for key in keys {
                self.gallery.lightbox_mut().handle_key(key);
            }
            return;
        }

        let dy = ctx.input(|i| i.raw_scroll_delta.y);
        if dy != 0.0 {
            self.scroll_y = (self.scroll_y - dy).clamp(0.0, self.scroll_room());
            self.gallery.on_scroll(self.scroll_y);
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut reduced = self.gallery.reduced_motion();
            if ui.checkbox(&mut reduced, "Reduce motion").changed() {
                self.gallery.set_reduced_motion(reduced);
            }
            ui.separator();

            let current = self.gallery.category().map(str::to_string);
            if ui.selectable_label(current.is_none(), "All").clicked() {
                self.gallery.set_category(None);
            }
            let categories: Vec<String> =
                self.gallery.categories().iter().map(|c| c.to_string()).collect();
            for c in categories {
                let selected = current.as_deref() == Some(c.as_str());
                if ui.selectable_label(selected, c.as_str()).clicked() {
                    self.gallery.set_category(Some(&c));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("progress {:.0}%", self.gallery.progress() * 100.0));
            });
        });
    }

    fn spiral(&mut self, ui: &mut egui::Ui) {
        let rect = ui.available_rect_before_wrap();
        let center = rect.center();
        let painter = ui.painter_at(rect);
        let mut clicked: Option<String> = None;

        for (item, d) in self.gallery.placements() {
            let pos = egui::pos2(
                center.x + d.translate_x * SPIRAL_TO_SCREEN,
                center.y + d.translate_y * SPIRAL_TO_SCREEN * 0.5,
            );
            let card = egui::Rect::from_center_size(
                pos,
                egui::vec2(CARD_WIDTH, CARD_HEIGHT) * d.scale,
            );
            painter.rect_filled(
                card,
                8.0 * d.scale,
                category_color(&item.category).gamma_multiply(d.opacity),
            );
            painter.text(
                card.center(),
                egui::Align2::CENTER_CENTER,
                &item.alt_text,
                egui::FontId::proportional(14.0 * d.scale.max(0.6)),
                egui::Color32::WHITE.gamma_multiply(d.opacity),
            );

            let response =
                ui.interact(card, egui::Id::new(("card", &item.id)), egui::Sense::click());
            if response.clicked() {
                clicked = Some(item.id.clone());
            }
        }

        if let Some(id) = clicked {
            self.gallery.lightbox_mut().select(&id);
        }
    }

    fn overlay(&mut self, ctx: &egui::Context) {
        let Some(item) = self.gallery.lightbox_item().cloned() else {
            return;
        };
        let position = self.gallery.lightbox().position();
        let mut action = None;

        egui::Window::new("lightbox")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.heading(item.alt_text.as_str());
                ui.label(egui::RichText::new(item.image_ref.as_str()).monospace().weak());
                if let Some(caption) = &item.caption {
                    ui.label(caption.as_str());
                }
                ui.horizontal(|ui| {
                    if ui.button("◀").clicked() {
                        action = Some(OverlayAction::Prev);
                    }
                    if let Some((n, total)) = position {
                        ui.label(format!("{n} / {total}"));
                    }
                    if ui.button("▶").clicked() {
                        action = Some(OverlayAction::Next);
                    }
                    if ui.button("✕").clicked() {
                        action = Some(OverlayAction::Close);
                    }
                });
            });

        let lightbox = self.gallery.lightbox_mut();
        match action {
            Some(OverlayAction::Prev) => lightbox.prev(),
            Some(OverlayAction::Next) => lightbox.next(),
            Some(OverlayAction::Close) => lightbox.close(),
            None => {}
        }
    }
}

impl eframe::App for ShowroomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // frame tick: deliver every callback requested since the last frame
        let due = self.gallery.scheduler_mut().drain();
        for token in due {
            self.gallery.frame(token);
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.spiral(ui));
        self.overlay(ctx);

        if self.gallery.scheduler_mut().has_pending() {
            ctx.request_repaint();
        }
    }
}
