use chrono::{DateTime, FixedOffset};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::Transaction;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_WIDTH: u32 = 640;
const CANVAS_HEIGHT: u32 = 320;

#[derive(Properties, PartialEq)]
pub struct UsageChartProps {
    pub transactions: Vec<Transaction>,
    /// Dataset label shown under the chart (the selected user's email)
    pub label: String,
}

/// Token-usage line chart: transaction amounts over their creation dates,
/// drawn with plotters onto a canvas.
pub struct UsageChart {
    canvas_ref: NodeRef,
}

impl Component for UsageChart {
    type Message = ();
    type Properties = UsageChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        // Redrawing on every render keeps the canvas in sync with whichever
        // user's transactions are currently loaded.
        self.draw(&ctx.props().transactions);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if ctx.props().transactions.is_empty() {
            return html! {
                <div class="chart-empty">
                    <p>{"No transaction data available"}</p>
                </div>
            };
        }

        html! {
            <div class="chart-content">
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="usage-chart-canvas"
                    width={CANVAS_WIDTH.to_string()}
                    height={CANVAS_HEIGHT.to_string()}
                ></canvas>
                <div class="chart-legend">{&ctx.props().label}</div>
            </div>
        }
    }
}

impl UsageChart {
    fn draw(&self, transactions: &[Transaction]) {
        let series = Self::chart_series(transactions);
        if series.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        // chart_series is sorted, so the range is first..last. A single
        // point gets a day of padding on both sides so the axis stays valid.
        let (min_date, max_date) = {
            let first = series[0].0;
            let last = series[series.len() - 1].0;
            if first == last {
                (first - chrono::Duration::days(1), last + chrono::Duration::days(1))
            } else {
                (first, last)
            }
        };

        let min_amount = series.iter().map(|&(_, a)| a).fold(f64::INFINITY, f64::min);
        let max_amount = series
            .iter()
            .map(|&(_, a)| a)
            .fold(f64::NEG_INFINITY, f64::max);
        let padding = (max_amount - min_amount).max(1.0) * 0.1;
        let y_min = 0.0_f64.min(min_amount - padding);
        let y_max = max_amount + padding;

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(min_date..max_date, y_min..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .y_desc("BTKN")
            .x_label_formatter(&|dt| dt.format("%Y-%m-%d").to_string())
            .label_style(("sans-serif", 12, &RGBColor(156, 163, 175)))
            .axis_style(&RGBColor(230, 230, 230))
            .x_labels(6)
            .y_labels(8)
            .draw()
            .is_err()
        {
            return;
        }

        let line_color = RGBColor(28, 100, 242);
        if chart
            .draw_series(LineSeries::new(
                series.iter().cloned(),
                line_color.stroke_width(2),
            ))
            .is_err()
        {
            return;
        }

        for &(date, amount) in &series {
            let _ = chart.draw_series(std::iter::once(Circle::new(
                (date, amount),
                3,
                line_color.filled(),
            )));
        }

        let _ = root.present();
    }

    /// Chronologically sorted (date, amount) pairs. Entries whose timestamp
    /// does not parse as RFC 3339 are skipped.
    fn chart_series(transactions: &[Transaction]) -> Vec<(DateTime<FixedOffset>, f64)> {
        let mut series: Vec<_> = transactions
            .iter()
            .filter_map(|tx| {
                DateTime::parse_from_rfc3339(&tx.created_at)
                    .ok()
                    .map(|dt| (dt, tx.amount))
            })
            .collect();
        series.sort_by_key(|&(dt, _)| dt);
        series
    }
}
