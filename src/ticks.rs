//! Tick layout for a ruler configuration.

use crate::config::RulerConfig;
use crate::units::{Unit, pixels_per_unit, tick_step};
use serde::{Deserialize, Serialize};

/// Distance to a graduation under which a value counts as sitting on it.
const GRADUATION_TOLERANCE: f64 = 1e-3;

/// Slack on the tick count and the last offset, so that a ruler whose length is
/// an exact multiple of the step keeps its final tick.
const RANGE_EPSILON: f64 = 1e-9;

/// Visual emphasis of a tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickWeight {
    Major,
    Medium,
    /// Quarter-inch marks, between medium and minor.
    MinorMedium,
    Minor,
}

impl TickWeight {
    /// Length of the mark in ruler-local pixels.
    pub fn mark_length(self) -> f64 {
        match self {
            TickWeight::Major => 24.0,
            TickWeight::Medium => 16.0,
            TickWeight::MinorMedium => 12.0,
            TickWeight::Minor => 8.0,
        }
    }
}

/// A single graduation on the ruler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Distance from the zero mark in unzoomed pixels.
    pub offset_pixels: f64,
    pub weight: TickWeight,
    /// Value printed next to the mark, in the active unit.
    pub label: Option<f64>,
}

impl Tick {
    /// Label formatted without trailing zeros (`1`, `2.5`, `0.25`).
    pub fn label_text(&self) -> Option<String> {
        self.label.map(format_label)
    }
}

fn format_label(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Whether `value` lies within tolerance of a multiple of `multiple`.
fn near_multiple(value: f64, multiple: f64) -> bool {
    let nearest = (value / multiple).round() * multiple;
    (value - nearest).abs() < GRADUATION_TOLERANCE
}

/// Weight of the tick at `value` and whether it carries a label.
fn classify(unit: Unit, value: f64) -> (TickWeight, bool) {
    match unit {
        Unit::Pixels => {
            let px = value.round() as i64;
            if px % 100 == 0 {
                (TickWeight::Major, true)
            } else if px % 50 == 0 {
                (TickWeight::Medium, false)
            } else {
                (TickWeight::Minor, false)
            }
        }
        Unit::Inches => {
            if near_multiple(value, 1.0) {
                (TickWeight::Major, true)
            } else if near_multiple(value, 0.5) {
                (TickWeight::Medium, false)
            } else if near_multiple(value, 0.25) {
                (TickWeight::MinorMedium, false)
            } else {
                (TickWeight::Minor, false)
            }
        }
        Unit::Centimeters | Unit::Millimeters => {
            let scale = if unit == Unit::Centimeters { 10.0 } else { 1.0 };
            let mm = (value * scale).round() as i64;
            if mm % 10 == 0 {
                (TickWeight::Major, true)
            } else if mm % 5 == 0 {
                (TickWeight::Medium, false)
            } else {
                (TickWeight::Minor, false)
            }
        }
    }
}

/// Generates the ticks of a ruler, ordered from the zero mark outwards.
///
/// Every tick's value is derived from its index (`index * step`) rather than
/// by repeatedly adding the step, so long physical rulers keep their labels.
/// Offsets always fall within `[0, config.length]`.
pub fn generate_ticks(config: &RulerConfig) -> Vec<Tick> {
    let ppu = pixels_per_unit(config.unit, config.dpi);
    let step = tick_step(config.unit);
    let total_units = config.length / ppu;

    let count = (total_units / step + RANGE_EPSILON).floor().max(0.0) as usize;
    let mut ticks = Vec::with_capacity(count + 1);

    for index in 0..=count {
        let value = index as f64 * step;
        let offset = value * ppu;
        if offset > config.length + RANGE_EPSILON * config.length.max(1.0) {
            break;
        }

        let (weight, labeled) = classify(config.unit, value);
        ticks.push(Tick {
            offset_pixels: offset.min(config.length),
            weight,
            label: labeled.then(|| (value * 100.0).round() / 100.0),
        });
    }

    ticks
}

/// Caption printed on the ruler body, e.g. `PX` or `IN (150%)`.
pub fn unit_caption(config: &RulerConfig) -> String {
    let symbol = config.unit.symbol().to_uppercase();
    if (config.zoom - 1.0).abs() > f64::EPSILON {
        format!("{symbol} ({}%)", (config.zoom * 100.0).round())
    } else {
        symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(unit: Unit, dpi: f64, length: f64) -> RulerConfig {
        RulerConfig {
            unit,
            dpi,
            length,
            ..RulerConfig::default()
        }
    }

    #[test]
    fn pixel_ruler_every_ten_pixels() {
        let ticks = generate_ticks(&config(Unit::Pixels, 96.0, 100.0));

        let offsets: Vec<f64> = ticks.iter().map(|t| t.offset_pixels).collect();
        assert_eq!(
            offsets,
            vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
        );

        for tick in &ticks {
            match tick.offset_pixels as i64 {
                0 | 100 => {
                    assert_eq!(tick.weight, TickWeight::Major);
                    assert_eq!(tick.label, Some(tick.offset_pixels));
                }
                50 => {
                    assert_eq!(tick.weight, TickWeight::Medium);
                    assert_eq!(tick.label, None);
                }
                _ => {
                    assert_eq!(tick.weight, TickWeight::Minor);
                    assert_eq!(tick.label, None);
                }
            }
        }
    }

    #[test]
    fn inch_ruler_graduations() {
        let ticks = generate_ticks(&config(Unit::Inches, 96.0, 96.0));
        assert_eq!(ticks.len(), 9);

        let at = |offset: f64| {
            ticks
                .iter()
                .find(|t| (t.offset_pixels - offset).abs() < 1e-9)
                .copied()
                .unwrap()
        };

        assert_eq!(at(96.0).weight, TickWeight::Major);
        assert_eq!(at(96.0).label, Some(1.0));
        assert_eq!(at(96.0).label_text().as_deref(), Some("1"));
        assert_eq!(at(48.0).weight, TickWeight::Medium);
        assert_eq!(at(24.0).weight, TickWeight::MinorMedium);
        assert_eq!(at(72.0).weight, TickWeight::MinorMedium);
        for eighth in [12.0, 36.0, 60.0, 84.0] {
            assert_eq!(at(eighth).weight, TickWeight::Minor);
            assert_eq!(at(eighth).label, None);
        }
    }

    #[test]
    fn long_inch_ruler_keeps_every_label() {
        let ticks = generate_ticks(&config(Unit::Inches, 72.0, 2000.0));
        let labels: Vec<f64> = ticks.iter().filter_map(|t| t.label).collect();
        let expected: Vec<f64> = (0..=27).map(f64::from).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn centimeter_ruler_labels_whole_centimeters() {
        let ticks = generate_ticks(&config(Unit::Centimeters, 96.0, 200.0));
        // 200px at 96dpi is 5.29cm, one tick per millimeter
        assert_eq!(ticks.len(), 53);

        let labels: Vec<f64> = ticks.iter().filter_map(|t| t.label).collect();
        assert_eq!(labels, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(ticks[5].weight, TickWeight::Medium);
        assert_eq!(ticks[3].weight, TickWeight::Minor);
    }

    #[test]
    fn millimeter_ruler_labels_every_ten() {
        let ticks = generate_ticks(&config(Unit::Millimeters, 127.0, 200.0));
        // 127dpi is exactly 5px per millimeter
        assert_eq!(ticks.len(), 41);
        assert!((ticks[40].offset_pixels - 200.0).abs() < 1e-9);
        assert_eq!(ticks[40].label, Some(40.0));
        assert_eq!(ticks[15].weight, TickWeight::Medium);
        assert_eq!(ticks[20].label_text().as_deref(), Some("20"));
    }

    #[test]
    fn offsets_stay_within_length() {
        for unit in Unit::ALL {
            for dpi in [72.0, 96.0, 113.0, 157.0, 200.0] {
                for length in [200.0, 250.0, 800.0, 1350.0, 2000.0] {
                    let config = config(unit, dpi, length);
                    let ticks = generate_ticks(&config);
                    assert!(!ticks.is_empty());
                    assert_eq!(ticks[0].offset_pixels, 0.0);
                    for pair in ticks.windows(2) {
                        assert!(pair[0].offset_pixels < pair[1].offset_pixels);
                    }
                    for tick in &ticks {
                        assert!(
                            (0.0..=length).contains(&tick.offset_pixels),
                            "{unit} dpi={dpi} length={length}: {tick:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn generation_is_repeatable() {
        let config = config(Unit::Centimeters, 110.0, 1450.0);
        assert_eq!(generate_ticks(&config), generate_ticks(&config));
    }

    #[test]
    fn zoom_and_rotation_do_not_change_layout() {
        let plain = config(Unit::Inches, 96.0, 800.0);
        let transformed = RulerConfig {
            zoom: 3.5,
            rotation: 127.0,
            ..plain.clone()
        };
        assert_eq!(generate_ticks(&plain), generate_ticks(&transformed));
    }

    #[test]
    fn zero_length_has_single_tick() {
        let ticks = generate_ticks(&config(Unit::Millimeters, 96.0, 0.0));
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].offset_pixels, 0.0);
        assert_eq!(ticks[0].label, Some(0.0));
    }

    #[test]
    fn labels_format_without_trailing_zeros() {
        assert_eq!(format_label(3.0), "3");
        assert_eq!(format_label(2.5), "2.5");
        assert_eq!(format_label(0.25), "0.25");
        assert_eq!(format_label(0.0), "0");
    }

    #[test]
    fn caption_shows_zoom_when_scaled() {
        let mut config = RulerConfig::default();
        assert_eq!(unit_caption(&config), "PX");

        config.unit = Unit::Inches;
        config.zoom = 1.5;
        assert_eq!(unit_caption(&config), "IN (150%)");
    }
}
