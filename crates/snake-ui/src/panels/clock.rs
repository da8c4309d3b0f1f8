use egui::{Color32, Pos2, Rect, Sense, Stroke};
use snake_shell::{ClockDisplay, SegmentStyle};

const MAX_HEIGHT: f32 = 80.0;
const LIT: Color32 = Color32::from_rgb(120, 220, 120);
const UNLIT: Color32 = Color32::from_rgb(26, 38, 30);
const BACKGROUND: Color32 = Color32::from_rgb(12, 14, 16);

// Segment order: top, top-right, bottom-right, bottom, bottom-left, top-left, middle.
fn segments_for(ch: char) -> [bool; 7] {
    match ch {
        '0' => [true, true, true, true, true, true, false],
        '1' => [false, true, true, false, false, false, false],
        '2' => [true, true, false, true, true, false, true],
        '3' => [true, true, true, true, false, false, true],
        '4' => [false, true, true, false, false, true, true],
        '5' => [true, false, true, true, false, true, true],
        '6' => [true, false, true, true, true, true, true],
        '7' => [true, true, true, false, false, false, false],
        '8' => [true; 7],
        '9' => [true, true, true, true, false, true, true],
        '-' => [false, false, false, false, false, false, true],
        _ => [false; 7],
    }
}

fn segment_rects(cell: Rect) -> [Rect; 7] {
    let (x, y) = (cell.left(), cell.top());
    let (w, h) = (cell.width(), cell.height());
    let t = (w * 0.16).max(2.0);
    let mid = y + h / 2.0;
    let r = |x0: f32, y0: f32, x1: f32, y1: f32| {
        Rect::from_min_max(Pos2::new(x0, y0), Pos2::new(x1, y1))
    };
    [
        r(x + t, y, x + w - t, y + t),
        r(x + w - t, y + t, x + w, mid),
        r(x + w - t, mid, x + w, y + h - t),
        r(x + t, y + h - t, x + w - t, y + h),
        r(x, mid, x + t, y + h - t),
        r(x, y + t, x + t, mid),
        r(x + t, mid - t / 2.0, x + w - t, mid + t / 2.0),
    ]
}

pub fn draw_clock(ui: &mut egui::Ui, clock: &ClockDisplay) {
    let width = ui.available_width();
    let height = MAX_HEIGHT.min(width * 0.4);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, BACKGROUND);

    let text = clock.text();
    let digits = text.chars().count().max(1) as f32;
    let pad = 8.0;
    let slot_w = (rect.width() - pad * 2.0) / digits;
    let cell_w = slot_w * 0.7;
    let cell_h = rect.height() - pad * 2.0;

    for (i, ch) in text.chars().enumerate() {
        let left = rect.left() + pad + i as f32 * slot_w + (slot_w - cell_w) / 2.0;
        let cell = Rect::from_min_size(
            Pos2::new(left, rect.top() + pad),
            egui::vec2(cell_w, cell_h),
        );
        for (lit, segment) in segments_for(ch).into_iter().zip(segment_rects(cell)) {
            match (clock.style(), lit) {
                (SegmentStyle::Outline, true) => {
                    painter.rect_stroke(segment, 1.0, Stroke::new(1.5, LIT));
                }
                (_, true) => {
                    painter.rect_filled(segment, 1.0, LIT);
                }
                (SegmentStyle::Filled, false) => {
                    painter.rect_filled(segment, 1.0, UNLIT);
                }
                _ => {}
            }
        }
    }
}
