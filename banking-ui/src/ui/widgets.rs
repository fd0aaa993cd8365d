use banking::data::{AccountSummary, Transaction};
use banking::ledger::{self, chart, AmountTone, ChartFrame};
use banking::util::format::format_currency;
use banking::Route;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

use crate::session::AppAction;

pub const CREDIT: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
pub const DEBIT: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);

pub fn field_error(ui: &mut egui::Ui, message: Option<&str>) {
    if let Some(message) = message {
        ui.colored_label(DEBIT, message);
    }
}

pub fn account_summary_card(ui: &mut egui::Ui, account: &AccountSummary, actions: &mut Vec<AppAction>) {
    ui.group(|ui| {
        ui.set_min_width(260.0);
        ui.label(egui::RichText::new(&account.name).strong());
        ui.label(
            egui::RichText::new(format_currency(account.balance, &account.currency))
                .size(24.0)
                .strong(),
        );
        ui.small("Available balance");
        if ui.button("View Details →").clicked() {
            actions.push(AppAction::Navigate(Route::AccountDetails(Some(account.id.clone()))));
        }
    });
}

pub fn transaction_row(ui: &mut egui::Ui, tx: &Transaction) {
    let color = match ledger::tone(tx.kind) {
        AmountTone::Credit => CREDIT,
        AmountTone::Debit => DEBIT,
        AmountTone::Neutral => ui.visuals().text_color(),
    };

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(&tx.description);
            ui.small(ledger::display_meta(tx));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(color, egui::RichText::new(ledger::display_amount(tx)).strong());
        });
    });
    ui.separator();
}

fn series_color(stroke: &str) -> Color32 {
    chart::parse_hex_color(stroke)
        .map(|(r, g, b)| Color32::from_rgb(r, g, b))
        .unwrap_or(Color32::LIGHT_BLUE)
}

/// Line chart of the overview, drawn straight onto the painter.
pub fn overview_chart(ui: &mut egui::Ui, frame: Option<&ChartFrame>) {
    let Some(frame) = frame else {
        ui.centered_and_justified(|ui| {
            ui.label(chart::EMPTY_CHART_MESSAGE);
        });
        return;
    };

    ui.horizontal(|ui| {
        for line in &frame.lines {
            ui.colored_label(series_color(&line.series.stroke), format!("● {}", line.series.name));
        }
    });

    let size = Vec2::new(ui.available_width(), 240.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let plot = response.rect.shrink2(Vec2::new(48.0, 20.0));
    let to_screen = |(x, y): (f32, f32)| -> Pos2 {
        Pos2::new(plot.left() + x * plot.width(), plot.bottom() - y * plot.height())
    };

    let grid = Stroke::new(1.0, ui.visuals().weak_text_color().gamma_multiply(0.3));
    for step in 0..=4 {
        let y = step as f32 / 4.0;
        painter.line_segment([to_screen((0.0, y)), to_screen((1.0, y))], grid);
        painter.text(
            Pos2::new(plot.left() - 6.0, to_screen((0.0, y)).y),
            egui::Align2::RIGHT_CENTER,
            format!("{:.0}", frame.max_value * y as f64),
            egui::FontId::proportional(11.0),
            ui.visuals().weak_text_color(),
        );
    }

    let span = frame.labels.len().saturating_sub(1).max(1) as f32;
    for (i, label) in frame.labels.iter().enumerate() {
        painter.text(
            to_screen((i as f32 / span, 0.0)) + Vec2::new(0.0, 12.0),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(11.0),
            ui.visuals().weak_text_color(),
        );
    }

    let hover = response.hover_pos().filter(|pos| plot.expand(8.0).contains(*pos));
    for line in &frame.lines {
        let color = series_color(&line.series.stroke);
        let points: Vec<Pos2> = line.points.iter().copied().map(to_screen).collect();
        painter.add(egui::Shape::line(points.clone(), Stroke::new(2.0, color)));
        for point in &points {
            painter.circle_filled(*point, 3.0, color);
        }

        let Some(pos) = hover else { continue };
        let hit = line
            .points
            .iter()
            .zip(&points)
            .find(|(_, screen)| Rect::from_center_size(**screen, Vec2::splat(16.0)).contains(pos));
        if let Some(((_, y), screen)) = hit {
            painter.text(
                *screen - Vec2::new(0.0, 12.0),
                egui::Align2::CENTER_BOTTOM,
                format!("{}: {:.0}", line.series.name, *y as f64 * frame.max_value),
                egui::FontId::proportional(12.0),
                color,
            );
        }
    }
}
