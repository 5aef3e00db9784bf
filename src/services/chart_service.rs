use plotters::prelude::*;
use crate::models::Quote;

pub const DEFAULT_CHART_WIDTH: u32 = 800;
pub const DEFAULT_CHART_HEIGHT: u32 = 400;

const UP_COLOR: RGBColor = RGBColor(22, 163, 74);
const DOWN_COLOR: RGBColor = RGBColor(220, 38, 38);

/// Render a quote's closing-price history as an SVG line chart
pub fn render_history_svg(quote: &Quote, width: u32, height: u32) -> Result<String, String> {
    if quote.history.len() < 2 {
        return Err("Not enough price data to generate chart (minimum 2 points required).".to_string());
    }

    let dates = quote.dates();
    let prices = quote.prices();
    let mut svg = String::new();

    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill canvas: {}", e))?;

        // Find price range
        let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max_price = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // Pad the range; a flat series still gets a visible band
        let price_range = max_price - min_price;
        let padding = (price_range * 0.1).max(max_price.abs() * 0.01).max(1e-6);
        let y_min = (min_price - padding).max(0.0);
        let y_max = max_price + padding;

        let last_index = (prices.len() - 1) as i32;
        let line_color = if quote.change_percent >= 0.0 { UP_COLOR } else { DOWN_COLOR };

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("{} 1-Month Price History", quote.symbol),
                ("sans-serif", 24.0).into_font(),
            )
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0..last_index, y_min..y_max)
            .map_err(|e| format!("Failed to build chart: {}", e))?;

        chart
            .configure_mesh()
            .x_labels(6)
            .x_label_formatter(&|x: &i32| dates.get(*x as usize).cloned().unwrap_or_default())
            .y_desc("Closing Price ($)")
            .draw()
            .map_err(|e| format!("Failed to draw mesh: {}", e))?;

        chart
            .draw_series(LineSeries::new(
                prices.iter().enumerate().map(|(i, &price)| (i as i32, price)),
                ShapeStyle::from(&line_color).stroke_width(2),
            ))
            .map_err(|e| format!("Failed to draw line: {}", e))?;

        root.present()
            .map_err(|e| format!("Failed to render chart: {}", e))?;
    }

    Ok(svg)
}
