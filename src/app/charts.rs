use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use crate::{
    app::home::Trend,
    models::{Interval, PriceSeries},
};

const BODY: char = '┃';
const WICK: char = '│';
const BULLISH: Color = Color::Green;
const BEARISH: Color = Color::Red;
const MIN_LABEL_WIDTH: usize = 10;

pub fn trend_color(trend: Option<Trend>) -> Color {
    match trend {
        Some(Trend::Down) => Color::Red,
        Some(Trend::Up) => Color::Green,
        None => Color::Gray,
    }
}

/// Min and max over the given values, padded by 2% so lines do not hug the
/// chart border.
fn padded_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let margin = if max > min { (max - min) * 0.02 } else { 1.0 };
    [min - margin, max + margin]
}

fn time_label(series: &PriceSeries, index: usize) -> String {
    let format = match series.interval() {
        Interval::OneDay => "%Y-%m-%d",
        _ => "%H:%M",
    };
    series
        .samples()
        .get(index)
        .map(|sample| sample.timestamp().format(format).to_string())
        .unwrap_or_default()
}

fn x_axis(series: &PriceSeries) -> Axis<'static> {
    let last = series.len().saturating_sub(1);
    Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, last.max(1) as f64])
        .labels(vec![
            Span::raw(time_label(series, 0)),
            Span::raw(time_label(series, last / 2)),
            Span::raw(time_label(series, last)),
        ])
}

fn y_axis(bounds: [f64; 2], title: &str) -> Axis<'static> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    Axis::default()
        .title(title.to_string())
        .style(Style::default().fg(Color::Gray))
        .bounds(bounds)
        .labels(vec![
            Span::raw(format!("{:.2}", bounds[0])),
            Span::raw(format!("{:.2}", mid)),
            Span::raw(format!("{:.2}", bounds[1])),
        ])
}

fn points(series: &PriceSeries, field: impl Fn(usize) -> f64) -> Vec<(f64, f64)> {
    (0..series.len()).map(|i| (i as f64, field(i))).collect()
}

/// Closing prices as a single line.
pub fn render_close_line(
    frame: &mut Frame,
    area: Rect,
    series: &PriceSeries,
    title: &str,
    color: Color,
) {
    let samples = series.samples();
    let data = points(series, |i| *samples[i].close());
    let bounds = padded_bounds(data.iter().map(|(_, y)| *y));

    let datasets = vec![
        Dataset::default()
            .name("Close")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .x_axis(x_axis(series))
        .y_axis(y_axis(bounds, "Price"));

    frame.render_widget(chart, area);
}

/// Open, high, low and close overlaid as four lines.
pub fn render_ohlc(frame: &mut Frame, area: Rect, series: &PriceSeries, title: &str) {
    let samples = series.samples();
    let open = points(series, |i| *samples[i].open());
    let high = points(series, |i| *samples[i].high());
    let low = points(series, |i| *samples[i].low());
    let close = points(series, |i| *samples[i].close());
    let bounds = padded_bounds(samples.iter().flat_map(|s| [*s.low(), *s.high()]));

    let lines = [
        ("Open", Color::Blue, &open),
        ("High", Color::Green, &high),
        ("Low", Color::Red, &low),
        ("Close", Color::Yellow, &close),
    ];
    let datasets = lines
        .iter()
        .map(|(name, color, data)| {
            Dataset::default()
                .name(*name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(data.as_slice())
        })
        .collect::<Vec<_>>();

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .x_axis(x_axis(series))
        .y_axis(y_axis(bounds, "Price"));

    frame.render_widget(chart, area);
}

pub fn render_volume(frame: &mut Frame, area: Rect, series: &PriceSeries, title: &str) {
    let samples = series.samples();
    let data = points(series, |i| *samples[i].volume() as f64);
    let max = data.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let bounds = [0.0, if max > 0.0 { max * 1.05 } else { 1.0 }];

    let datasets = vec![
        Dataset::default()
            .name("Volume")
            .marker(symbols::Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(Color::Cyan))
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .x_axis(x_axis(series))
        .y_axis(
            Axis::default()
                .title("Volume")
                .style(Style::default().fg(Color::Gray))
                .bounds(bounds)
                .labels(vec![Span::raw("0"), Span::raw(format!("{:.0}", bounds[1]))]),
        );

    frame.render_widget(chart, area);
}

/// One candle per column, newest on the right. When the series is wider
/// than the plot only the most recent candles are drawn.
pub struct Candlesticks<'a> {
    series: &'a PriceSeries,
    block: Option<Block<'a>>,
}

impl<'a> Candlesticks<'a> {
    pub fn new(series: &'a PriceSeries) -> Self {
        Self {
            series,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for Candlesticks<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        let samples = self.series.samples();
        let label_width = samples
            .iter()
            .flat_map(|s| [*s.high(), *s.low()])
            .map(|price| format!("{:.2}", price).len())
            .max()
            .unwrap_or(0)
            .max(MIN_LABEL_WIDTH);
        // label followed by " │"
        let axis_width = label_width as u16 + 2;
        if inner.width <= axis_width || inner.height < 2 {
            return;
        }

        let plot_width = (inner.width - axis_width) as usize;
        let visible = &samples[samples.len().saturating_sub(plot_width)..];
        if visible.is_empty() {
            return;
        }

        let low = visible.iter().map(|s| *s.low()).fold(f64::INFINITY, f64::min);
        let high = visible
            .iter()
            .map(|s| *s.high())
            .fold(f64::NEG_INFINITY, f64::max);
        let span = if high > low { high - low } else { 1.0 };
        let last_row = inner.height - 1;
        let to_row = |price: f64| -> u16 {
            let offset = ((high - price) / span * last_row as f64).round();
            offset.clamp(0.0, last_row as f64) as u16
        };

        let axis_style = Style::default().fg(Color::Gray);
        for (row, price) in [(0, high), (last_row / 2, (high + low) / 2.0), (last_row, low)] {
            buf.set_string(
                inner.x,
                inner.y + row,
                format!("{:>width$.2} {}", price, WICK, width = label_width),
                axis_style,
            );
        }

        for (i, sample) in visible.iter().enumerate() {
            let x = inner.x + axis_width + i as u16;
            let color = if sample.close() >= sample.open() {
                BULLISH
            } else {
                BEARISH
            };
            let body_top = to_row(sample.open().max(*sample.close()));
            let body_bottom = to_row(sample.open().min(*sample.close()));

            for row in to_row(*sample.high())..=to_row(*sample.low()) {
                let glyph = if (body_top..=body_bottom).contains(&row) {
                    BODY
                } else {
                    WICK
                };
                if let Some(cell) = buf.cell_mut((x, inner.y + row)) {
                    cell.set_char(glyph).set_fg(color);
                }
            }
        }
    }
}

pub fn render_candlesticks(frame: &mut Frame, area: Rect, series: &PriceSeries, title: &str) {
    let widget = Candlesticks::new(series)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(widget, area);
}
