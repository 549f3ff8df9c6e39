use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Yearly PM2.5 line chart
// ---------------------------------------------------------------------------

/// Render the yearly PM2.5 average as a line with circle markers.
pub fn yearly_line_chart(ui: &mut Ui, state: &AppState) {
    let Some(summaries) = &state.summaries else {
        return;
    };

    let points: Vec<[f64; 2]> = summaries
        .yearly_pm25
        .iter()
        .map(|(&year, &mean)| [year as f64, mean])
        .collect();

    Plot::new("yearly_pm25")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Year")
        .y_axis_label("PM2.5")
        .x_axis_formatter(|mark, _range| {
            // Year labels only on whole-year grid marks.
            if mark.value.fract() == 0.0 {
                format!("{}", mark.value as i64)
            } else {
                String::new()
            }
        })
        .height(320.0)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(points.clone()))
                .name("PM2.5")
                .color(Color32::LIGHT_BLUE)
                .width(2.0);
            plot_ui.line(line);

            let markers = Points::new(PlotPoints::from(points))
                .shape(MarkerShape::Circle)
                .radius(4.0)
                .color(Color32::LIGHT_BLUE);
            plot_ui.points(markers);
        });
}

// ---------------------------------------------------------------------------
// Pollutant share pie chart
// ---------------------------------------------------------------------------

/// Segments per full circle when tessellating wedge arcs.
const ARC_STEPS: usize = 128;

/// Render the per-pollutant shares as a pie chart.
///
/// Slices start at 12 o'clock and sweep counter-clockwise in pollutant
/// display order. Each slice carries its percentage (one decimal) at its
/// mid-angle; pollutant names go to the legend.
pub fn feature_pie_chart(ui: &mut Ui, state: &AppState) {
    let Some(summaries) = &state.summaries else {
        return;
    };

    Plot::new("feature_pie")
        .legend(egui_plot::Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .height(320.0)
        .show(ui, |plot_ui| {
            let mut start = TAU / 4.0; // 12 o'clock
            for &(pollutant, share) in &summaries.shares {
                let sweep = share * TAU;
                let color = state.color_map.color_for(pollutant);

                let wedge = Polygon::new(wedge_points(start, sweep))
                    .name(pollutant.column_name())
                    .fill_color(color)
                    .stroke(Stroke::new(1.0, Color32::WHITE));
                plot_ui.polygon(wedge);

                // Percentage label at the slice's mid-angle. Slivers stay
                // unlabelled so the text doesn't overlap.
                if share >= 0.02 {
                    let mid = start + sweep / 2.0;
                    let label_pos = PlotPoint::new(0.62 * mid.cos(), 0.62 * mid.sin());
                    let label = format!("{:.1}%", share * 100.0);
                    plot_ui.text(Text::new(
                        label_pos,
                        RichText::new(label).strong().color(Color32::WHITE),
                    ));
                }

                start += sweep;
            }
        });
}

/// Tessellate one pie wedge as a fan of points around the origin.
fn wedge_points(start: f64, sweep: f64) -> PlotPoints<'static> {
    let steps = ((sweep / TAU) * ARC_STEPS as f64).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = start + sweep * (i as f64 / steps as f64);
        points.push([angle.cos(), angle.sin()]);
    }
    PlotPoints::from(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedge_fan_starts_at_origin_and_spans_the_arc() {
        let points = wedge_points(0.0, TAU / 4.0).points().to_vec();
        assert_eq!([points[0].x, points[0].y], [0.0, 0.0]);

        let first = &points[1];
        assert!((first.x - 1.0).abs() < 1e-9 && first.y.abs() < 1e-9);

        let last = points.last().unwrap();
        assert!(last.x.abs() < 1e-9 && (last.y - 1.0).abs() < 1e-9);
    }
}
