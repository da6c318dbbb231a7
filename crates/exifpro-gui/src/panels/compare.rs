use exifpro_core::compare::{
    CompareViewport, InputEvent, Point, Rect, ReleaseFlag, RenderPlan, SlideAxis,
};
use exifpro_core::consts::{HANDLE_DIAMETER, TRANSFORM_ANIMATION_SECS};

use crate::app::ExifProApp;
use crate::panels::helpers::{enum_combo, image_combo, placeholder};

type Viewport = CompareViewport<egui::TextureId, ReleaseFlag>;

const FULL_UV: egui::Rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
const BACKGROUND: egui::Color32 = egui::Color32::from_gray(30);
const LABEL_MARGIN: f32 = 8.0;

pub fn show(ctx: &egui::Context, app: &mut ExifProApp) {
    egui::TopBottomPanel::top("compare_controls").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mut before = app.compare.before;
            let mut after = app.compare.after;
            let changed = image_combo(ui, "Before", &mut before, &app.library)
                | image_combo(ui, "After", &mut after, &app.library);
            if ui.button("Swap").clicked() {
                std::mem::swap(&mut before, &mut after);
                app.compare.assign(before, after, &app.library, &app.textures);
            } else if changed {
                app.compare.assign(before, after, &app.library, &app.textures);
            }

            ui.separator();

            let mut axis = app.compare.viewport.axis();
            if enum_combo(
                ui,
                "Divider",
                &mut axis,
                &[SlideAxis::Horizontal, SlideAxis::Vertical],
            ) {
                app.compare.viewport.set_axis(axis);
            }
        });
    });

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BACKGROUND))
        .show(ctx, |ui| {
            let viewport = &mut app.compare.viewport;
            if viewport.before().is_none() && viewport.after().is_none() {
                placeholder(ui, "Pick a before and an after image to compare");
                return;
            }

            let rect = ui.available_rect_before_wrap();
            viewport.set_viewport(to_core(rect));

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            let indicator_rect = zoom_indicator_rect(rect);
            let over_indicator = ui
                .input(|i| i.pointer.hover_pos())
                .is_some_and(|p| indicator_rect.contains(p));

            dispatch_input(ui, &response, viewport, over_indicator);
            if response.double_clicked() && !over_indicator {
                viewport.reset_zoom();
            }

            paint(ui, rect, &viewport.render_plan());

            let zoom = viewport.transform().zoom_percent();
            let indicator = ui
                .put(
                    indicator_rect,
                    egui::Button::new(format!("{zoom}%")).corner_radius(4.0),
                )
                .on_hover_text("Reset zoom");
            if indicator.clicked() {
                viewport.reset_zoom();
            }
        });
}

/// Translate this frame's egui input into viewport events.
///
/// egui reports pointer releases wherever they happen, so while the
/// viewport holds the release listener a release (or a button that is no
/// longer down) ends the drag even when the pointer left the panel.
fn dispatch_input(
    ui: &egui::Ui,
    response: &egui::Response,
    viewport: &mut Viewport,
    over_indicator: bool,
) {
    let (pressed, down, released, pos, moved, scroll) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
            i.pointer.delta() != egui::Vec2::ZERO,
            i.smooth_scroll_delta.y,
        )
    });

    if pressed && response.hovered() && !over_indicator {
        if let Some(p) = pos {
            viewport.handle(InputEvent::PointerDown { pos: to_point(p) });
        }
    }

    if viewport.listener().is_registered() {
        if moved {
            if let Some(p) = pos {
                viewport.handle(InputEvent::PointerMove { pos: to_point(p) });
            }
        }
        if released || !down {
            viewport.handle(InputEvent::PointerUp);
        }
    }

    if scroll != 0.0 && response.hovered() {
        if let Some(p) = ui.input(|i| i.pointer.hover_pos()) {
            // egui scrolls positive upwards; the viewport expects positive
            // to mean zoom out.
            let r = viewport.handle(InputEvent::Wheel {
                pos: to_point(p),
                delta_y: -scroll,
            });
            if r.changed {
                ui.ctx().request_repaint();
            }
        }
    }
}

fn paint(ui: &egui::Ui, rect: egui::Rect, plan: &RenderPlan<'_, egui::TextureId>) {
    let ctx = ui.ctx();
    let painter = ui.painter_at(rect);
    let secs = if plan.animate {
        TRANSFORM_ANIMATION_SECS
    } else {
        0.0
    };
    let id = ui.id().with("compare");

    if let Some(layer) = plan.after {
        let r = animate_rect(ctx, id.with("after"), to_egui(layer.rect), secs);
        painter.image(*layer.handle, r, FULL_UV, egui::Color32::WHITE);
    }
    if let Some(layer) = plan.before {
        let r = animate_rect(ctx, id.with("before"), to_egui(layer.rect), secs);
        painter
            .with_clip_rect(to_egui(plan.clip))
            .image(*layer.handle, r, FULL_UV, egui::Color32::WHITE);
    }

    painter.rect_filled(to_egui(plan.divider), 0.0, egui::Color32::WHITE);

    let handle = to_egui(plan.handle);
    painter.circle_filled(handle.center(), HANDLE_DIAMETER / 2.0, egui::Color32::WHITE);
    painter.circle_stroke(
        handle.center(),
        HANDLE_DIAMETER / 2.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(60)),
    );
    let arrows = match plan.axis {
        SlideAxis::Horizontal => "\u{25c0}\u{25b6}",
        SlideAxis::Vertical => "\u{25b2}\u{25bc}",
    };
    painter.text(
        handle.center(),
        egui::Align2::CENTER_CENTER,
        arrows,
        egui::FontId::proportional(11.0),
        egui::Color32::from_gray(60),
    );

    if plan.before.is_some() {
        draw_label(
            &painter,
            rect.left_top() + egui::vec2(LABEL_MARGIN, LABEL_MARGIN),
            egui::Align2::LEFT_TOP,
            "Before",
        );
    }
    if plan.after.is_some() {
        let (pos, align) = match plan.axis {
            SlideAxis::Horizontal => (
                rect.right_top() + egui::vec2(-LABEL_MARGIN, LABEL_MARGIN),
                egui::Align2::RIGHT_TOP,
            ),
            SlideAxis::Vertical => (
                rect.left_bottom() + egui::vec2(LABEL_MARGIN, -LABEL_MARGIN),
                egui::Align2::LEFT_BOTTOM,
            ),
        };
        draw_label(&painter, pos, align, "After");
    }
}

fn draw_label(painter: &egui::Painter, pos: egui::Pos2, align: egui::Align2, text: &str) {
    let color = egui::Color32::from_white_alpha(220);
    let galley = painter.layout_no_wrap(text.to_string(), egui::FontId::proportional(14.0), color);
    let rect = align.anchor_size(pos, galley.size());
    painter.rect_filled(rect.expand(4.0), 4.0, egui::Color32::from_black_alpha(120));
    painter.galley(rect.min, galley, color);
}

fn animate_rect(ctx: &egui::Context, id: egui::Id, target: egui::Rect, secs: f32) -> egui::Rect {
    let x = ctx.animate_value_with_time(id.with("x"), target.min.x, secs);
    let y = ctx.animate_value_with_time(id.with("y"), target.min.y, secs);
    let w = ctx.animate_value_with_time(id.with("w"), target.width(), secs);
    let h = ctx.animate_value_with_time(id.with("h"), target.height(), secs);
    egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(w, h))
}

fn zoom_indicator_rect(rect: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        rect.right_bottom() + egui::vec2(-72.0, -36.0),
        egui::vec2(60.0, 24.0),
    )
}

fn to_core(r: egui::Rect) -> Rect {
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

fn to_egui(r: Rect) -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(r.left, r.top), egui::vec2(r.width, r.height))
}

fn to_point(p: egui::Pos2) -> Point {
    Point::new(p.x, p.y)
}
